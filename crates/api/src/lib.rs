pub mod community;
pub mod local_user;
pub mod post;

#[cfg(test)]
pub(crate) mod test_utils {
  #![allow(clippy::unwrap_used)]

  use actix::Actor;
  use actix_web::{body::MessageBody, web::Data, HttpResponse};
  use voids_api_common::{
    context::VoidContext,
    utils::blocking,
    websocket::chat_server::ChatServer,
  };
  use voids_db_schema::{
    source::{
      community::{Community, CommunityInsertForm},
      user::{User, UserInsertForm},
    },
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use voids_db_views::structs::LocalUserView;
  use voids_utils::settings::structs::Settings;

  /// A context on a fresh in-memory database which already has the `all` community.
  pub(crate) async fn test_context() -> Data<VoidContext> {
    let pool = build_db_pool_for_tests();
    blocking(&pool, |conn| {
      Community::create(
        conn,
        &CommunityInsertForm::new("all".into(), Some("Everything".into())),
      )
    })
    .await
    .unwrap()
    .unwrap();
    Data::new(VoidContext::create(
      pool,
      ChatServer::startup().start(),
      Settings::default(),
    ))
  }

  pub(crate) async fn test_user(context: &VoidContext, name: &str) -> LocalUserView {
    let form = UserInsertForm::new(
      name.to_string(),
      format!("{name}@voids.example"),
      "0123456789".into(),
    );
    let user = blocking(context.pool(), move |conn| User::create(conn, &form))
      .await
      .unwrap()
      .unwrap();
    LocalUserView { user }
  }

  pub(crate) fn body_string(res: HttpResponse) -> String {
    String::from_utf8(res.into_body().try_into_bytes().unwrap().to_vec()).unwrap()
  }
}
