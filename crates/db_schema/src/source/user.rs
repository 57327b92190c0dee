use crate::{newtypes::UserId, schema::user_};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A registered account. `karma` starts at 0 and `awards` empty, nothing changes them yet.
#[skip_serializing_none]
#[derive(Clone, Queryable, Selectable, Identifiable, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[diesel(table_name = user_)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
  pub id: UserId,
  pub username: String,
  pub email: String,
  #[serde(skip)]
  pub password_encrypted: String,
  pub published: NaiveDateTime,
  pub karma: Option<i32>,
  pub awards: Option<String>,
}

/// The password is given in plain text and hashed on insert.
#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = user_)]
pub struct UserInsertForm {
  pub username: String,
  pub email: String,
  pub password_encrypted: String,
  pub karma: Option<i32>,
}

impl UserInsertForm {
  pub fn new(username: String, email: String, password: String) -> Self {
    Self {
      username,
      email,
      password_encrypted: password,
      karma: Some(0),
    }
  }
}
