use actix_web::{
  cookie::{Cookie, SameSite},
  http::header::{AUTHORIZATION, LOCATION},
  HttpRequest,
  HttpResponse,
};
use diesel::SqliteConnection;
use voids_db_schema::utils::DbPool;
use voids_utils::{
  error::{VoidErrorType, VoidResult},
  settings::structs::Settings,
};

pub const AUTH_COOKIE_NAME: &str = "auth";

pub async fn blocking<F, T>(pool: &DbPool, f: F) -> VoidResult<T>
where
  F: FnOnce(&mut SqliteConnection) -> T + Send + 'static,
  T: Send + 'static,
{
  let pool = pool.clone();
  let blocking_span = tracing::info_span!("blocking operation");
  let res = actix_web::web::block(move || {
    let entered = blocking_span.enter();
    let mut conn = pool.get()?;
    let res = (f)(&mut conn);
    drop(entered);
    Ok(res) as VoidResult<T>
  })
  .await?;

  res
}

/// Reads the jwt from the `Authorization: Bearer` header, falling back to the `auth` cookie.
pub fn read_auth_token(req: &HttpRequest) -> VoidResult<Option<String>> {
  if let Some(header) = req.headers().get(AUTHORIZATION) {
    let token = header
      .to_str()?
      .strip_prefix("Bearer ")
      .ok_or(VoidErrorType::NotLoggedIn)?;
    Ok(Some(token.to_string()))
  } else if let Some(cookie) = req.cookie(AUTH_COOKIE_NAME) {
    Ok(Some(cookie.value().to_string()))
  } else {
    Ok(None)
  }
}

pub fn create_login_cookie(jwt: String, settings: &Settings) -> Cookie<'static> {
  let mut cookie = Cookie::new(AUTH_COOKIE_NAME, jwt);
  cookie.set_secure(settings.tls_enabled);
  cookie.set_same_site(SameSite::Lax);
  cookie.set_http_only(true);
  cookie.set_path("/");
  cookie
}

/// A cookie with the same name and path as the login cookie, for
/// [`HttpResponse::add_removal_cookie`].
pub fn login_cookie_template() -> Cookie<'static> {
  Cookie::build(AUTH_COOKIE_NAME, "").path("/").finish()
}

/// Form submissions answer with `303 See Other`, so reloading the target doesn't resubmit.
pub fn redirect_to(location: &str) -> HttpResponse {
  HttpResponse::SeeOther()
    .insert_header((LOCATION, location))
    .finish()
}
