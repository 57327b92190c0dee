use actix_web::{web::Data, HttpRequest, HttpResponse};
use voids_api_common::{
  context::VoidContext,
  utils::{blocking, login_cookie_template, read_auth_token, redirect_to},
};
use voids_db_schema::source::login_token::LoginToken;
use voids_db_views::structs::LocalUserView;
use voids_utils::error::{VoidErrorType, VoidResult};

#[tracing::instrument(skip_all)]
pub async fn logout(
  req: HttpRequest,
  // require login
  _local_user_view: LocalUserView,
  context: Data<VoidContext>,
) -> VoidResult<HttpResponse> {
  let jwt = read_auth_token(&req)?.ok_or(VoidErrorType::NotLoggedIn)?;
  blocking(context.pool(), move |conn| LoginToken::invalidate(conn, &jwt)).await??;

  let mut res = redirect_to("/");
  res.add_removal_cookie(&login_cookie_template())?;
  Ok(res)
}
