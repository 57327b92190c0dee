use crate::structs::LocalUserView;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use diesel::SqliteConnection;
use std::future::{ready, Ready};
use voids_db_schema::{newtypes::UserId, source::user::User, traits::Crud};
use voids_utils::error::{VoidError, VoidErrorExt, VoidErrorType, VoidResult};

impl LocalUserView {
  pub fn read(conn: &mut SqliteConnection, user_id: UserId) -> VoidResult<Self> {
    let user = User::read(conn, user_id).with_void_type(VoidErrorType::NotLoggedIn)?;
    Ok(Self { user })
  }

  /// Looks up a user for login. An unknown name is reported the same way as a wrong password.
  pub fn read_from_name(conn: &mut SqliteConnection, name: &str) -> VoidResult<Self> {
    let user = User::read_from_name(conn, name).with_void_type(VoidErrorType::IncorrectLogin)?;
    Ok(Self { user })
  }
}

impl FromRequest for LocalUserView {
  type Error = VoidError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(match req.extensions().get::<LocalUserView>() {
      Some(c) => Ok(c.clone()),
      None => Err(VoidErrorType::NotLoggedIn.into()),
    })
  }
}
