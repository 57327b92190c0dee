use actix_web::{
  web::{Data, Form, Path},
  HttpResponse,
};
use diesel::SqliteConnection;
use tracing::info;
use voids_api_common::{
  context::VoidContext,
  post::CreatePost,
  utils::{blocking, redirect_to},
};
use voids_db_schema::{
  source::{
    community::Community,
    post::{Post, PostInsertForm},
  },
  traits::Crud,
};
use voids_db_views::structs::LocalUserView;
use voids_utils::{
  error::{VoidError, VoidErrorExt, VoidErrorType, VoidResult},
  utils::validation::{is_valid_body_field, is_valid_post_title, required_field},
};

#[tracing::instrument(skip_all)]
pub async fn create_post(
  path: Path<String>,
  data: Form<CreatePost>,
  context: Data<VoidContext>,
  local_user_view: LocalUserView,
) -> VoidResult<HttpResponse> {
  let community_name = path.into_inner();
  let title = required_field(&data.title, "post-title")?;
  is_valid_post_title(&title)?;
  let body = data
    .body
    .as_deref()
    .map(str::trim)
    .filter(|b| !b.is_empty())
    .map(ToString::to_string);
  if let Some(body) = &body {
    is_valid_body_field(body)?;
  }

  let form = PostInsertForm {
    body,
    ..PostInsertForm::new(
      local_user_view.user.username.clone(),
      community_name.clone(),
      title,
    )
  };
  let default_community = context.settings().setup.default_community.clone();
  let posts = blocking(context.pool(), move |conn| {
    create_with_cross_post(conn, &form, &default_community)
  })
  .await??;
  info!(
    "{} created {} post(s) for {}",
    local_user_view.user.username,
    posts.len(),
    community_name
  );

  Ok(redirect_to(&format!("/v/{community_name}")))
}

/// Inserts the post, plus a copy in the default community unless it was submitted there. Either
/// both are created or neither.
pub fn create_with_cross_post(
  conn: &mut SqliteConnection,
  form: &PostInsertForm,
  default_community: &str,
) -> VoidResult<Vec<Post>> {
  conn.immediate_transaction::<_, VoidError, _>(|conn| {
    Community::read_from_name(conn, &form.community_name)
      .with_void_type(VoidErrorType::CouldntFindCommunity)?;

    let post = Post::create(conn, form).with_void_type(VoidErrorType::CouldntCreatePost)?;
    let mut posts = vec![post];
    if form.community_name != default_community {
      let cross_post = Post::create(conn, &form.cross_post(default_community))
        .with_void_type(VoidErrorType::CouldntCreatePost)?;
      posts.push(cross_post);
    }
    Ok(posts)
  })
}
