use actix_web::{
  web::{Data, Form},
  HttpResponse,
};
use tracing::info;
use voids_api_common::{
  claims::Claims,
  context::VoidContext,
  person::Register,
  utils::{blocking, create_login_cookie, redirect_to},
};
use voids_db_schema::{
  source::user::{User, UserInsertForm},
  traits::Crud,
};
use voids_utils::{
  error::{VoidError, VoidErrorType, VoidResult},
  utils::validation::{is_valid_actor_name, is_valid_email, password_length_check, required_field},
};

/// Creates the account and logs it in right away.
#[tracing::instrument(skip_all)]
pub async fn register(
  data: Form<Register>,
  context: Data<VoidContext>,
) -> VoidResult<HttpResponse> {
  let username = required_field(&data.username, "username")?;
  let password = required_field(&data.password, "password")?;
  let email = required_field(&data.email, "email")?;

  is_valid_actor_name(&username)?;
  password_length_check(&password)?;
  is_valid_email(&email)?;

  let form = UserInsertForm::new(username, email, password);
  let user = blocking(context.pool(), move |conn| {
    conn.immediate_transaction::<_, VoidError, _>(|conn| {
      if User::is_username_taken(conn, &form.username)? {
        Err(VoidErrorType::UsernameAlreadyExists)?
      }
      if User::is_email_taken(conn, &form.email)? {
        Err(VoidErrorType::EmailAlreadyExists)?
      }
      Ok(User::create(conn, &form)?)
    })
  })
  .await??;
  info!("New user {} signed up", user.username);

  let jwt = Claims::generate(user.id, &context).await?;
  let mut res = redirect_to("/");
  res.add_cookie(&create_login_cookie(jwt, context.settings()))?;
  Ok(res)
}
