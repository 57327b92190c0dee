use crate::{newtypes::UserId, schema::login_token};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Stores data related to a specific user login session.
#[derive(Clone, Queryable, Selectable, Identifiable, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[diesel(table_name = login_token)]
#[diesel(primary_key(token))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LoginToken {
  /// Jwt token for this login
  #[serde(skip)]
  pub token: String,
  pub user_id: UserId,
  /// Time of login
  pub published: NaiveDateTime,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = login_token)]
pub struct LoginTokenCreateForm {
  pub token: String,
  pub user_id: UserId,
}
