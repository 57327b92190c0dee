use crate::error::{VoidErrorType, VoidResult};
use once_cell::sync::Lazy;
use regex::Regex;

static VALID_ACTOR_NAME_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]{3,20}$").expect("compile regex"));
static VALID_POST_TITLE_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r".*\S.*").expect("compile regex"));
static VALID_EMAIL_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("compile regex"));

const POST_TITLE_MAX_LENGTH: usize = 200;
const BODY_MAX_LENGTH: usize = 10000;
const DISPLAY_NAME_MAX_LENGTH: usize = 50;

/// Usernames and community names share one rule, they appear in urls.
pub fn is_valid_actor_name(name: &str) -> VoidResult<()> {
  if VALID_ACTOR_NAME_REGEX.is_match(name) {
    Ok(())
  } else {
    Err(VoidErrorType::InvalidName.into())
  }
}

pub fn is_valid_display_name(name: &str) -> VoidResult<()> {
  let check = !name.trim().is_empty()
    && name.chars().count() <= DISPLAY_NAME_MAX_LENGTH
    && !name.contains('\n');
  if check {
    Ok(())
  } else {
    Err(VoidErrorType::InvalidDisplayName.into())
  }
}

pub fn is_valid_post_title(title: &str) -> VoidResult<()> {
  let check = VALID_POST_TITLE_REGEX.is_match(title)
    && title.chars().count() <= POST_TITLE_MAX_LENGTH
    && !title.contains('\n');
  if check {
    Ok(())
  } else {
    Err(VoidErrorType::InvalidPostTitle.into())
  }
}

pub fn is_valid_body_field(body: &str) -> VoidResult<()> {
  if body.chars().count() <= BODY_MAX_LENGTH {
    Ok(())
  } else {
    Err(VoidErrorType::InvalidBodyField.into())
  }
}

pub fn is_valid_email(email: &str) -> VoidResult<()> {
  if VALID_EMAIL_REGEX.is_match(email) {
    Ok(())
  } else {
    Err(VoidErrorType::InvalidEmailAddress.into())
  }
}

pub fn password_length_check(pass: &str) -> VoidResult<()> {
  if !(10..=60).contains(&pass.chars().count()) {
    Err(VoidErrorType::InvalidPassword.into())
  } else {
    Ok(())
  }
}

/// Form fields arrive as optional strings, a blank value counts as missing.
pub fn required_field(value: &Option<String>, field: &str) -> VoidResult<String> {
  match value.as_deref().map(str::trim) {
    Some(v) if !v.is_empty() => Ok(v.to_string()),
    _ => Err(VoidErrorType::MissingField(field.to_string()).into()),
  }
}
