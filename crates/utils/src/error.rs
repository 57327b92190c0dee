use serde::{Deserialize, Serialize};
use std::{
  backtrace::Backtrace,
  fmt,
  fmt::{Debug, Display},
};
use strum::{Display, EnumIter};

pub type VoidResult<T> = Result<T, VoidError>;

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum VoidErrorType {
  NotFound,
  CouldntFindCommunity,
  CouldntFindPost,
  NotLoggedIn,
  IncorrectLogin,
  UsernameAlreadyExists,
  EmailAlreadyExists,
  CommunityAlreadyExists,
  /// A required form field was absent or blank
  MissingField(String),
  InvalidName,
  InvalidDisplayName,
  InvalidEmailAddress,
  InvalidPostTitle,
  InvalidBodyField,
  /// Password must be between 10 and 60 characters
  InvalidPassword,
  CouldntCreatePost,
  CouldntCreateCommunity,
  CouldntUpdatePost,
  CouldntRenderTemplate,
  Unknown(String),
}

pub struct VoidError {
  pub error_type: VoidErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for VoidError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => VoidErrorType::NotFound,
      _ => VoidErrorType::Unknown(format!("{}", &cause)),
    };
    VoidError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for VoidError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("VoidError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl Display for VoidError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl actix_web::error::ResponseError for VoidError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    use actix_web::http::StatusCode;
    match self.error_type {
      VoidErrorType::NotFound
      | VoidErrorType::CouldntFindCommunity
      | VoidErrorType::CouldntFindPost => StatusCode::NOT_FOUND,
      VoidErrorType::NotLoggedIn | VoidErrorType::IncorrectLogin => StatusCode::UNAUTHORIZED,
      VoidErrorType::UsernameAlreadyExists
      | VoidErrorType::EmailAlreadyExists
      | VoidErrorType::CommunityAlreadyExists => StatusCode::CONFLICT,
      VoidErrorType::CouldntRenderTemplate => StatusCode::INTERNAL_SERVER_ERROR,
      _ => StatusCode::BAD_REQUEST,
    }
  }

  fn error_response(&self) -> actix_web::HttpResponse {
    actix_web::HttpResponse::build(self.status_code()).json(&self.error_type)
  }
}

impl From<VoidErrorType> for VoidError {
  fn from(error_type: VoidErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    VoidError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait VoidErrorExt<T, E: Into<anyhow::Error>> {
  fn with_void_type(self, error_type: VoidErrorType) -> VoidResult<T>;
}

impl<T, E: Into<anyhow::Error>> VoidErrorExt<T, E> for Result<T, E> {
  fn with_void_type(self, error_type: VoidErrorType) -> VoidResult<T> {
    self.map_err(|error| VoidError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

pub trait VoidErrorExt2<T> {
  fn with_void_type(self, error_type: VoidErrorType) -> VoidResult<T>;
  fn into_anyhow(self) -> Result<T, anyhow::Error>;
}

impl<T> VoidErrorExt2<T> for VoidResult<T> {
  fn with_void_type(self, error_type: VoidErrorType) -> VoidResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }
  // can't be a From impl, it would conflict with the blanket Into<anyhow::Error> one
  fn into_anyhow(self) -> Result<T, anyhow::Error> {
    self.map_err(|e| e.inner)
  }
}
