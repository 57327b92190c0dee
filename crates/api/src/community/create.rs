use actix_web::{
  web::{Data, Form},
  HttpResponse,
};
use voids_api_common::{
  community::CreateCommunity,
  context::VoidContext,
  utils::{blocking, redirect_to},
};
use voids_db_schema::{
  source::community::{Community, CommunityInsertForm},
  traits::Crud,
  utils::is_unique_violation,
};
use voids_db_views::structs::LocalUserView;
use voids_utils::{
  error::{VoidErrorExt, VoidErrorType, VoidResult},
  utils::validation::{is_valid_actor_name, is_valid_display_name, required_field},
};

#[tracing::instrument(skip_all)]
pub async fn create_community(
  data: Form<CreateCommunity>,
  context: Data<VoidContext>,
  local_user_view: LocalUserView,
) -> VoidResult<HttpResponse> {
  let name = required_field(&data.name, "community-name")?;
  is_valid_actor_name(&name)?;
  let display_name = data
    .display_name
    .as_deref()
    .map(str::trim)
    .filter(|d| !d.is_empty())
    .map(ToString::to_string);
  if let Some(display_name) = &display_name {
    is_valid_display_name(display_name)?;
  }

  let form = CommunityInsertForm::new(name, display_name);
  let created = blocking(context.pool(), move |conn| Community::create(conn, &form)).await?;
  let error_type = match &created {
    Err(e) if is_unique_violation(e) => VoidErrorType::CommunityAlreadyExists,
    _ => VoidErrorType::CouldntCreateCommunity,
  };
  let community = created.with_void_type(error_type)?;
  tracing::info!(
    "{} created community {}",
    local_user_view.user.username,
    community.name
  );

  Ok(redirect_to(&format!("/v/{}", community.name)))
}
