use actix_web::{
  web::{Data, Form},
  HttpResponse,
};
use voids_api_common::{
  claims::Claims,
  context::VoidContext,
  person::Login,
  utils::{blocking, create_login_cookie, redirect_to},
};
use voids_db_views::structs::LocalUserView;
use voids_utils::{
  error::{VoidErrorType, VoidResult},
  utils::validation::required_field,
};

#[tracing::instrument(skip_all)]
pub async fn login(data: Form<Login>, context: Data<VoidContext>) -> VoidResult<HttpResponse> {
  let username = required_field(&data.username, "username")?;
  let password = required_field(&data.password, "password")?;

  // Fetch that username
  let local_user_view = blocking(context.pool(), move |conn| {
    LocalUserView::read_from_name(conn, &username)
  })
  .await??;

  // Verify the password
  if !local_user_view.user.verify_password(&password) {
    Err(VoidErrorType::IncorrectLogin)?
  }

  let jwt = Claims::generate(local_user_view.user.id, &context).await?;
  let mut res = redirect_to("/");
  res.add_cookie(&create_login_cookie(jwt, context.settings()))?;
  Ok(res)
}
