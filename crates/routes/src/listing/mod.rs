//! The posts of a community in machine readable form. Both formats are built from one
//! [`CommunityListing`] and expose the same fields, see [`ListingMeta`] and [`ListingPost`].

use actix_web::{
  web::{Data, Path},
  HttpResponse,
};
use serde::Serialize;
use voids_api_common::{context::VoidContext, utils::blocking};
use voids_db_schema::{
  newtypes::CommunityId,
  source::{community::Community, post::Post},
};
use voids_db_views::structs::CommunityListing;
use voids_utils::error::VoidResult;

pub mod json;
pub mod xml;

pub const XML_CONTENT_TYPE: &str = "application/xml";

/// A field name with its value rendered as text, `None` for null.
pub type ListingField = (&'static str, Option<String>);

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ListingMeta<'a> {
  pub name: &'a str,
  pub id: CommunityId,
  pub display_name: Option<&'a str>,
  pub members: i32,
}

impl<'a> From<&'a Community> for ListingMeta<'a> {
  fn from(community: &'a Community) -> Self {
    ListingMeta {
      name: &community.name,
      id: community.id,
      display_name: community.display_name.as_deref(),
      members: community.members,
    }
  }
}

impl ListingMeta<'_> {
  pub fn fields(&self) -> [ListingField; 4] {
    [
      ("name", Some(self.name.to_string())),
      ("id", Some(self.id.to_string())),
      ("display_name", self.display_name.map(ToString::to_string)),
      ("members", Some(self.members.to_string())),
    ]
  }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ListingPost<'a> {
  pub title: &'a str,
  pub community: &'a str,
  pub body: Option<&'a str>,
  pub upvotes: i32,
  pub downvotes: i32,
}

impl<'a> From<&'a Post> for ListingPost<'a> {
  fn from(post: &'a Post) -> Self {
    ListingPost {
      title: &post.title,
      community: &post.community_name,
      body: post.body.as_deref(),
      upvotes: post.upvotes,
      downvotes: post.downvotes,
    }
  }
}

impl ListingPost<'_> {
  pub fn fields(&self) -> [ListingField; 5] {
    [
      ("title", Some(self.title.to_string())),
      ("community", Some(self.community.to_string())),
      ("body", self.body.map(ToString::to_string)),
      ("upvotes", Some(self.upvotes.to_string())),
      ("downvotes", Some(self.downvotes.to_string())),
    ]
  }
}

pub async fn read_listing(
  context: &VoidContext,
  community_name: String,
) -> VoidResult<CommunityListing> {
  blocking(context.pool(), move |conn| {
    CommunityListing::read(conn, &community_name)
  })
  .await?
}

#[tracing::instrument(skip_all)]
pub async fn get_listing_json(
  path: Path<String>,
  context: Data<VoidContext>,
) -> VoidResult<HttpResponse> {
  let listing = read_listing(&context, path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json::ListingJson::from(&listing)))
}

#[tracing::instrument(skip_all)]
pub async fn get_listing_xml(
  path: Path<String>,
  context: Data<VoidContext>,
) -> VoidResult<HttpResponse> {
  let listing = read_listing(&context, path.into_inner()).await?;
  let body = xml::listing_to_xml(&listing)?;
  Ok(
    HttpResponse::Ok()
      .content_type(XML_CONTENT_TYPE)
      .body(body),
  )
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use super::*;
  use crate::test_utils::{body_string, test_context};
  use actix_web::http::header::CONTENT_TYPE;
  use pretty_assertions::assert_eq;
  use serde_json::Value;
  use voids_db_schema::{
    newtypes::{PostId, PostNumber},
    source::{community::CommunityInsertForm, post::PostInsertForm},
    traits::Crud,
  };
  use voids_utils::error::VoidErrorType;

  fn sample_listing() -> CommunityListing {
    let published = chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc();
    let post = |number: i32, title: &str, body: Option<&str>| Post {
      id: PostId(number + 10),
      number: PostNumber(number),
      creator_name: "sara".into(),
      community_name: "tech".into(),
      title: title.into(),
      body: body.map(ToString::to_string),
      upvotes: number,
      downvotes: 1,
      published,
    };
    CommunityListing {
      community: Community {
        id: CommunityId(3),
        name: "tech".into(),
        display_name: None,
        members: 1,
        last_post_number: 10,
        published,
      },
      posts: vec![
        post(2, "Tom & Jerry <3", Some("says \"hi\"")),
        post(10, "plain", None),
      ],
    }
  }

  /// Compares one json object against the field list, and checks that the xml has an element
  /// with the same escaped text for every field.
  fn assert_same_fields(json: &Value, fields: &[ListingField], xml: &str) {
    let object = json.as_object().unwrap();
    let mut json_names = object.keys().map(String::as_str).collect::<Vec<_>>();
    let mut field_names = fields.iter().map(|(name, _)| *name).collect::<Vec<_>>();
    json_names.sort_unstable();
    field_names.sort_unstable();
    assert_eq!(field_names, json_names);

    for (name, value) in fields {
      let json_value = match &object[*name] {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
      };
      assert_eq!(value, &json_value, "{name}");

      let element = match value {
        Some(v) => format!("<{name}>{}</{name}>", xml::escape_text(v)),
        None => format!("<{name}/>"),
      };
      assert!(xml.contains(&element), "{element} missing in {xml}");
    }
  }

  #[test]
  fn json_and_xml_expose_the_same_fields() {
    let listing = sample_listing();
    let json = serde_json::to_value(json::ListingJson::from(&listing)).unwrap();
    let xml = xml::listing_to_xml(&listing).unwrap();

    assert_same_fields(
      &json["meta"],
      &ListingMeta::from(&listing.community).fields(),
      &xml,
    );
    for post in &listing.posts {
      assert_same_fields(
        &json["posts"][post.number.to_string()],
        &ListingPost::from(post).fields(),
        &xml,
      );
    }
    assert_eq!(2, json["posts"].as_object().unwrap().len());
  }

  #[actix_web::test]
  async fn handlers_read_from_the_database() -> VoidResult<()> {
    let context = test_context().await;
    blocking(context.pool(), |conn| {
      Community::create(conn, &CommunityInsertForm::new("tech".into(), Some("Tech".into())))?;
      Post::create(
        conn,
        &PostInsertForm::new("pia".into(), "tech".into(), "Rust 2.0".into()),
      )
    })
    .await??;

    let res = get_listing_json(Path::from("tech".to_string()), context.clone()).await?;
    let json: Value = serde_json::from_str(&body_string(res))?;
    assert_eq!("Tech", json["meta"]["display_name"]);
    assert_eq!("Rust 2.0", json["posts"]["1"]["title"]);
    assert_eq!(Value::Null, json["posts"]["1"]["body"]);

    let res = get_listing_xml(Path::from("tech".to_string()), context.clone()).await?;
    assert_eq!(res.headers().get(CONTENT_TYPE).unwrap(), XML_CONTENT_TYPE);
    let xml = body_string(res);
    assert!(xml.contains("<POST_1>"));
    assert!(xml.contains("<title>Rust 2.0</title>"));

    let err = get_listing_json(Path::from("nothing".to_string()), context)
      .await
      .unwrap_err();
    assert_eq!(VoidErrorType::CouldntFindCommunity, err.error_type);
    Ok(())
  }
}
