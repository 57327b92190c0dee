use crate::structs::CommunityListing;
use diesel::SqliteConnection;
use voids_db_schema::source::{community::Community, post::Post};
use voids_utils::error::{VoidErrorExt, VoidErrorType, VoidResult};

impl CommunityListing {
  pub fn read(conn: &mut SqliteConnection, community_name: &str) -> VoidResult<Self> {
    let community = Community::read_from_name(conn, community_name)
      .with_void_type(VoidErrorType::CouldntFindCommunity)?;
    let posts = Post::list_for_community(conn, &community.name)?;
    Ok(Self { community, posts })
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use super::*;
  use pretty_assertions::assert_eq;
  use voids_db_schema::{
    newtypes::PostNumber,
    source::{community::CommunityInsertForm, post::PostInsertForm},
    traits::Crud,
    utils::establish_unpooled_connection,
  };

  #[test]
  fn test_listing() {
    let conn = &mut establish_unpooled_connection();
    Community::create(conn, &CommunityInsertForm::new("cats".into(), Some("Cats".into()))).unwrap();
    Community::create(conn, &CommunityInsertForm::new("dogs".into(), None)).unwrap();

    for title in ["first", "second", "third"] {
      Post::create(
        conn,
        &PostInsertForm::new("sara".into(), "cats".into(), title.into()),
      )
      .unwrap();
    }
    Post::create(
      conn,
      &PostInsertForm::new("sara".into(), "dogs".into(), "woof".into()),
    )
    .unwrap();

    let listing = CommunityListing::read(conn, "cats").unwrap();
    assert_eq!("cats", listing.community.name);
    assert_eq!(
      vec![PostNumber(1), PostNumber(2), PostNumber(3)],
      listing.posts.iter().map(|p| p.number).collect::<Vec<_>>()
    );
    assert_eq!("third", listing.posts[2].title);

    let err = CommunityListing::read(conn, "birds").unwrap_err();
    assert_eq!(VoidErrorType::CouldntFindCommunity, err.error_type);
  }
}
