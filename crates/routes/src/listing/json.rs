use super::{ListingMeta, ListingPost};
use serde::{Serialize, Serializer};
use voids_db_schema::source::post::Post;
use voids_db_views::structs::CommunityListing;

/// `{"meta": {..}, "posts": {"<number>": {..}}}`
#[derive(Serialize, Debug)]
pub struct ListingJson<'a> {
  meta: ListingMeta<'a>,
  posts: PostsByNumber<'a>,
}

impl<'a> From<&'a CommunityListing> for ListingJson<'a> {
  fn from(listing: &'a CommunityListing) -> Self {
    ListingJson {
      meta: ListingMeta::from(&listing.community),
      posts: PostsByNumber(&listing.posts),
    }
  }
}

/// Serialized as an object keyed by post number, in the order of the listing.
#[derive(Debug)]
struct PostsByNumber<'a>(&'a [Post]);

impl Serialize for PostsByNumber<'_> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_map(
      self
        .0
        .iter()
        .map(|post| (post.number.to_string(), ListingPost::from(post))),
    )
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use super::*;
  use pretty_assertions::assert_eq;
  use voids_db_schema::{
    newtypes::{CommunityId, PostId, PostNumber},
    source::community::Community,
  };

  #[test]
  fn posts_keep_listing_order() {
    let published = chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc();
    let post = |number: i32| Post {
      id: PostId(number),
      number: PostNumber(number),
      creator_name: "sara".into(),
      community_name: "all".into(),
      title: format!("post {number}"),
      body: None,
      upvotes: 0,
      downvotes: 0,
      published,
    };
    let listing = CommunityListing {
      community: Community {
        id: CommunityId(1),
        name: "all".into(),
        display_name: Some("Everything".into()),
        members: 1,
        last_post_number: 10,
        published,
      },
      posts: vec![post(2), post(9), post(10)],
    };

    let json = serde_json::to_string(&ListingJson::from(&listing)).unwrap();
    assert_eq!(
      concat!(
        r#"{"meta":{"name":"all","id":1,"display_name":"Everything","members":1},"#,
        r#""posts":{"2":{"title":"post 2","community":"all","body":null,"upvotes":0,"downvotes":0},"#,
        r#""9":{"title":"post 9","community":"all","body":null,"upvotes":0,"downvotes":0},"#,
        r#""10":{"title":"post 10","community":"all","body":null,"upvotes":0,"downvotes":0}}}"#,
      ),
      json
    );
  }
}
