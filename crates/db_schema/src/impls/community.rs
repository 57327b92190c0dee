use crate::{
  newtypes::{CommunityId, PostNumber},
  schema::community::dsl::{community, last_post_number, name},
  source::community::{Community, CommunityInsertForm},
  traits::Crud,
};
use diesel::{
  delete,
  dsl::insert_into,
  result::Error,
  update,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};

impl Crud for Community {
  type InsertForm = CommunityInsertForm;
  type IdType = CommunityId;

  fn create(conn: &mut SqliteConnection, form: &CommunityInsertForm) -> Result<Self, Error> {
    insert_into(community)
      .values(form)
      .get_result::<Self>(conn)
  }

  fn read(conn: &mut SqliteConnection, community_id: CommunityId) -> Result<Self, Error> {
    community.find(community_id).first::<Self>(conn)
  }

  fn delete(conn: &mut SqliteConnection, community_id: CommunityId) -> Result<usize, Error> {
    delete(community.find(community_id)).execute(conn)
  }
}

impl Community {
  pub fn read_from_name(conn: &mut SqliteConnection, community_name: &str) -> Result<Self, Error> {
    community
      .filter(name.eq(community_name))
      .first::<Self>(conn)
  }

  pub fn list(conn: &mut SqliteConnection) -> Result<Vec<Self>, Error> {
    community.order_by(name.asc()).load::<Self>(conn)
  }

  /// Inserts the community unless one with the same name exists, then reads it back.
  pub fn create_if_missing(
    conn: &mut SqliteConnection,
    form: &CommunityInsertForm,
  ) -> Result<Self, Error> {
    insert_into(community)
      .values(form)
      .on_conflict(name)
      .do_nothing()
      .execute(conn)?;
    Self::read_from_name(conn, &form.name)
  }

  /// Hands out the next post number of the community. The counter lives in the community row, so
  /// numbers of deleted posts are never given out again.
  pub(crate) fn next_post_number(
    conn: &mut SqliteConnection,
    community_name: &str,
  ) -> Result<PostNumber, Error> {
    update(community.filter(name.eq(community_name)))
      .set(last_post_number.eq(last_post_number + 1))
      .returning(last_post_number)
      .get_result::<i32>(conn)
      .map(PostNumber)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use crate::{
    newtypes::PostNumber,
    source::community::{Community, CommunityInsertForm},
    traits::Crud,
    utils::{establish_unpooled_connection, is_unique_violation},
  };
  use pretty_assertions::assert_eq;

  #[test]
  fn test_crud() {
    let conn = &mut establish_unpooled_connection();

    let new_community = CommunityInsertForm::new("rust".into(), Some("Rust".into()));
    let inserted_community = Community::create(conn, &new_community).unwrap();

    let expected_community = Community {
      id: inserted_community.id,
      name: "rust".into(),
      display_name: Some("Rust".into()),
      members: 1,
      last_post_number: 0,
      published: inserted_community.published,
    };

    let read_community = Community::read(conn, inserted_community.id).unwrap();
    let read_by_name = Community::read_from_name(conn, "rust").unwrap();
    let num_deleted = Community::delete(conn, inserted_community.id).unwrap();

    assert_eq!(expected_community, read_community);
    assert_eq!(expected_community, inserted_community);
    assert_eq!(expected_community, read_by_name);
    assert_eq!(1, num_deleted);
  }

  #[test]
  fn duplicate_name_is_rejected() {
    let conn = &mut establish_unpooled_connection();

    let form = CommunityInsertForm::new("rust".into(), None);
    Community::create(conn, &form).unwrap();
    let err = Community::create(conn, &form).unwrap_err();
    assert!(is_unique_violation(&err));
  }

  #[test]
  fn create_if_missing_keeps_existing() {
    let conn = &mut establish_unpooled_connection();

    let original = Community::create(
      conn,
      &CommunityInsertForm::new("all".into(), Some("Everything".into())),
    )
    .unwrap();
    let again = Community::create_if_missing(
      conn,
      &CommunityInsertForm::new("all".into(), Some("Something else".into())),
    )
    .unwrap();

    assert_eq!(original, again);
    assert_eq!(1, Community::list(conn).unwrap().len());
  }

  #[test]
  fn post_numbers_count_up_per_community() {
    let conn = &mut establish_unpooled_connection();
    Community::create(conn, &CommunityInsertForm::new("a".into(), None)).unwrap();
    Community::create(conn, &CommunityInsertForm::new("b".into(), None)).unwrap();

    assert_eq!(PostNumber(1), Community::next_post_number(conn, "a").unwrap());
    assert_eq!(PostNumber(2), Community::next_post_number(conn, "a").unwrap());
    assert_eq!(PostNumber(1), Community::next_post_number(conn, "b").unwrap());
    assert!(matches!(
      Community::next_post_number(conn, "missing"),
      Err(diesel::NotFound)
    ));
  }
}
