//! Server rendered html pages. Every form on them posts to a handler of `voids_api`.

use crate::listing::read_listing;
use actix_web::{
  http::header::ContentType,
  web::{Data, Path},
  HttpResponse,
};
use askama::Template;
use voids_api_common::{context::VoidContext, utils::blocking};
use voids_db_schema::{
  newtypes::PostNumber,
  source::{community::Community, post::Post},
};
use voids_db_views::structs::{CommunityListing, LocalUserView};
use voids_utils::{
  error::{VoidErrorExt, VoidErrorType, VoidResult},
  utils::generate_random_username,
};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
  username: Option<&'a str>,
  communities: &'a [Community],
}

#[derive(Template)]
#[template(path = "community.html")]
struct CommunityTemplate<'a> {
  username: Option<&'a str>,
  listing: &'a CommunityListing,
}

#[derive(Template)]
#[template(path = "post.html")]
struct PostTemplate<'a> {
  username: Option<&'a str>,
  community: &'a Community,
  post: &'a Post,
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate<'a> {
  username: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "signup.html")]
struct SignupTemplate<'a> {
  username: Option<&'a str>,
  suggested_name: &'a str,
}

#[derive(Template)]
#[template(path = "create_post.html")]
struct CreatePostTemplate<'a> {
  username: Option<&'a str>,
  community: &'a Community,
}

#[derive(Template)]
#[template(path = "create_community.html")]
struct CreateCommunityTemplate<'a> {
  username: Option<&'a str>,
}

fn render(template: &impl Template) -> VoidResult<HttpResponse> {
  let html = template
    .render()
    .with_void_type(VoidErrorType::CouldntRenderTemplate)?;
  Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

fn username(local_user_view: &Option<LocalUserView>) -> Option<&str> {
  local_user_view.as_ref().map(|v| v.user.username.as_str())
}

async fn read_community(context: &VoidContext, community_name: String) -> VoidResult<Community> {
  blocking(context.pool(), move |conn| {
    Community::read_from_name(conn, &community_name)
  })
  .await?
  .with_void_type(VoidErrorType::CouldntFindCommunity)
}

#[tracing::instrument(skip_all)]
pub async fn index(
  context: Data<VoidContext>,
  local_user_view: Option<LocalUserView>,
) -> VoidResult<HttpResponse> {
  let communities = blocking(context.pool(), Community::list).await??;
  render(&IndexTemplate {
    username: username(&local_user_view),
    communities: &communities,
  })
}

#[tracing::instrument(skip_all)]
pub async fn community_page(
  path: Path<String>,
  context: Data<VoidContext>,
  local_user_view: Option<LocalUserView>,
) -> VoidResult<HttpResponse> {
  let listing = read_listing(&context, path.into_inner()).await?;
  render(&CommunityTemplate {
    username: username(&local_user_view),
    listing: &listing,
  })
}

#[tracing::instrument(skip_all)]
pub async fn post_page(
  path: Path<(String, i32)>,
  context: Data<VoidContext>,
  local_user_view: Option<LocalUserView>,
) -> VoidResult<HttpResponse> {
  let (community_name, number) = path.into_inner();
  let community = read_community(&context, community_name).await?;
  let name = community.name.clone();
  let post = blocking(context.pool(), move |conn| {
    Post::read_from_number(conn, &name, PostNumber(number))
  })
  .await?
  .with_void_type(VoidErrorType::CouldntFindPost)?;

  render(&PostTemplate {
    username: username(&local_user_view),
    community: &community,
    post: &post,
  })
}

#[tracing::instrument(skip_all)]
pub async fn create_post_form(
  path: Path<String>,
  context: Data<VoidContext>,
  local_user_view: LocalUserView,
) -> VoidResult<HttpResponse> {
  let community = read_community(&context, path.into_inner()).await?;
  render(&CreatePostTemplate {
    username: Some(&local_user_view.user.username),
    community: &community,
  })
}

#[tracing::instrument(skip_all)]
pub async fn create_community_form(local_user_view: LocalUserView) -> VoidResult<HttpResponse> {
  render(&CreateCommunityTemplate {
    username: Some(&local_user_view.user.username),
  })
}

#[tracing::instrument(skip_all)]
pub async fn login_form(local_user_view: Option<LocalUserView>) -> VoidResult<HttpResponse> {
  render(&LoginTemplate {
    username: username(&local_user_view),
  })
}

#[tracing::instrument(skip_all)]
pub async fn signup_form(local_user_view: Option<LocalUserView>) -> VoidResult<HttpResponse> {
  render(&SignupTemplate {
    username: username(&local_user_view),
    suggested_name: &generate_random_username(),
  })
}
