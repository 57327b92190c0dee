use crate::{
  newtypes::{PostId, PostNumber},
  schema::post::dsl::{community_name, downvotes, number, post, upvotes},
  source::{
    community::Community,
    post::{NumberedPostForm, Post, PostInsertForm},
  },
  traits::Crud,
  VoteDirection,
};
use diesel::{
  delete,
  dsl::insert_into,
  result::Error,
  update,
  Connection,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};
use voids_utils::error::{VoidErrorExt, VoidErrorType, VoidResult};

impl Crud for Post {
  type InsertForm = PostInsertForm;
  type IdType = PostId;

  /// Takes the next number of the target community and inserts the post under it. Fails with
  /// `NotFound` if the community doesn't exist.
  fn create(conn: &mut SqliteConnection, form: &PostInsertForm) -> Result<Self, Error> {
    conn.transaction(|conn| {
      let next_number = Community::next_post_number(conn, &form.community_name)?;
      insert_into(post)
        .values(NumberedPostForm {
          number: next_number,
          creator_name: &form.creator_name,
          community_name: &form.community_name,
          title: &form.title,
          body: form.body.as_deref(),
        })
        .get_result::<Self>(conn)
    })
  }

  fn read(conn: &mut SqliteConnection, post_id: PostId) -> Result<Self, Error> {
    post.find(post_id).first::<Self>(conn)
  }

  fn delete(conn: &mut SqliteConnection, post_id: PostId) -> Result<usize, Error> {
    delete(post.find(post_id)).execute(conn)
  }
}

impl Post {
  pub fn read_from_number(
    conn: &mut SqliteConnection,
    for_community_name: &str,
    post_number: PostNumber,
  ) -> Result<Self, Error> {
    post
      .filter(community_name.eq(for_community_name))
      .filter(number.eq(post_number))
      .first::<Self>(conn)
  }

  /// All posts of a community, oldest first.
  pub fn list_for_community(
    conn: &mut SqliteConnection,
    for_community_name: &str,
  ) -> Result<Vec<Self>, Error> {
    post
      .filter(community_name.eq(for_community_name))
      .order_by(number.asc())
      .load::<Self>(conn)
  }

  /// Adds one vote to the post and returns it with the updated counters.
  ///
  /// The increment happens in the database (`upvotes = upvotes + 1`), inside a write transaction
  /// which also checks that the community exists. Concurrent votes on the same post are never
  /// lost.
  pub fn apply_vote(
    conn: &mut SqliteConnection,
    for_community_name: &str,
    post_number: PostNumber,
    direction: VoteDirection,
  ) -> VoidResult<Self> {
    conn.immediate_transaction(|conn| {
      Community::read_from_name(conn, for_community_name)
        .with_void_type(VoidErrorType::CouldntFindCommunity)?;

      let target = post
        .filter(community_name.eq(for_community_name))
        .filter(number.eq(post_number));
      let updated = match direction {
        VoteDirection::Up => update(target).set(upvotes.eq(upvotes + 1)).execute(conn),
        VoteDirection::Down => update(target).set(downvotes.eq(downvotes + 1)).execute(conn),
      }
      .with_void_type(VoidErrorType::CouldntUpdatePost)?;
      if updated == 0 {
        Err(VoidErrorType::CouldntFindPost)?
      }

      Self::read_from_number(conn, for_community_name, post_number)
        .with_void_type(VoidErrorType::CouldntFindPost)
    })
  }
}
