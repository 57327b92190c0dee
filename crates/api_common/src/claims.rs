use crate::{context::VoidContext, utils::blocking};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use voids_db_schema::{
  newtypes::UserId,
  source::login_token::{LoginToken, LoginTokenCreateForm},
};
use voids_utils::error::{VoidErrorExt, VoidErrorType, VoidResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// user_id, standard claim by RFC 7519.
  pub sub: i32,
  pub iss: String,
  /// Time when this token was issued as UNIX-timestamp in seconds
  pub iat: i64,
}

impl Claims {
  /// Checks the signature and that the token wasn't logged out. Tokens don't expire.
  pub async fn validate(jwt: &str, context: &VoidContext) -> VoidResult<UserId> {
    let mut validation = Validation::default();
    validation.validate_exp = false;
    validation.required_spec_claims.remove("exp");
    let key = DecodingKey::from_secret(context.settings().jwt_secret.as_ref());
    let claims =
      decode::<Claims>(jwt, &key, &validation).with_void_type(VoidErrorType::NotLoggedIn)?;
    let user_id = UserId(claims.claims.sub);

    let jwt = jwt.to_string();
    let is_valid =
      blocking(context.pool(), move |conn| LoginToken::validate(conn, user_id, &jwt)).await??;
    if !is_valid {
      Err(VoidErrorType::NotLoggedIn)?
    }
    Ok(user_id)
  }

  /// Signs a new jwt for the user and stores it as a login token.
  pub async fn generate(user_id: UserId, context: &VoidContext) -> VoidResult<String> {
    let settings = context.settings();
    let my_claims = Claims {
      sub: user_id.0,
      iss: settings.hostname.clone(),
      iat: Utc::now().timestamp(),
    };
    let key = EncodingKey::from_secret(settings.jwt_secret.as_ref());
    let token = encode(&Header::default(), &my_claims, &key)?;

    let form = LoginTokenCreateForm {
      token: token.clone(),
      user_id,
    };
    blocking(context.pool(), move |conn| LoginToken::create(conn, form)).await??;
    Ok(token)
  }
}
