use crate::{
  newtypes::UserId,
  schema::login_token::{dsl::login_token, token, user_id},
  source::login_token::{LoginToken, LoginTokenCreateForm},
};
use diesel::{
  delete,
  dsl::exists,
  insert_into,
  result::Error,
  select,
  ExpressionMethods,
  QueryDsl,
  RunQueryDsl,
  SqliteConnection,
};

impl LoginToken {
  /// Two logins of the same user within one second get the same jwt, so an existing row is
  /// reused.
  pub fn create(conn: &mut SqliteConnection, form: LoginTokenCreateForm) -> Result<Self, Error> {
    insert_into(login_token)
      .values(&form)
      .on_conflict(token)
      .do_nothing()
      .execute(conn)?;
    login_token.find(&form.token).first::<Self>(conn)
  }

  /// Check if the given token is valid for user.
  pub fn validate(
    conn: &mut SqliteConnection,
    user_id_: UserId,
    token_: &str,
  ) -> Result<bool, Error> {
    select(exists(
      login_token.find(token_).filter(user_id.eq(user_id_)),
    ))
    .get_result(conn)
  }

  /// Invalidate specific token on user logout.
  pub fn invalidate(conn: &mut SqliteConnection, token_: &str) -> Result<usize, Error> {
    delete(login_token.find(token_)).execute(conn)
  }
}
