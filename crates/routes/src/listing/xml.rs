use super::{ListingField, ListingMeta, ListingPost};
use std::fmt::{self, Write};
use voids_db_views::structs::CommunityListing;
use voids_utils::error::VoidResult;

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#;

/// Removes any characters disallowed by the XML grammar.
/// See https://www.w3.org/TR/xml/#NT-Char for details.
fn sanitize_xml(input: &str) -> String {
  input
    .chars()
    .filter(|&c| {
      matches!(c,
        '\u{09}'
        | '\u{0A}'
        | '\u{0D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
    })
    .collect()
}

/// Text content of an element, with markup characters turned into entities.
pub fn escape_text(value: &str) -> String {
  htmlescape::encode_minimal(&sanitize_xml(value))
}

fn write_fields(xml: &mut String, indent: &str, fields: &[ListingField]) -> fmt::Result {
  for (name, value) in fields {
    match value {
      Some(v) => writeln!(xml, "{indent}<{name}>{}</{name}>", escape_text(v))?,
      None => writeln!(xml, "{indent}<{name}/>")?,
    }
  }
  Ok(())
}

/// ```xml
/// <community>
///   <meta><name>..</name>..</meta>
///   <posts><POST_1><title>..</title>..</POST_1></posts>
/// </community>
/// ```
pub fn listing_to_xml(listing: &CommunityListing) -> VoidResult<String> {
  let mut xml = String::from(XML_PROLOG);
  xml.push_str("\n<community>\n  <meta>\n");
  write_fields(
    &mut xml,
    "    ",
    &ListingMeta::from(&listing.community).fields(),
  )?;
  xml.push_str("  </meta>\n  <posts>\n");
  for post in &listing.posts {
    writeln!(xml, "    <POST_{}>", post.number)?;
    write_fields(&mut xml, "      ", &ListingPost::from(post).fields())?;
    writeln!(xml, "    </POST_{}>", post.number)?;
  }
  xml.push_str("  </posts>\n</community>\n");
  Ok(xml)
}
