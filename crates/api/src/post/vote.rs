use actix_web::web::{Data, Json, Path};
use tracing::debug;
use voids_api_common::{
  context::VoidContext,
  post::VoteResponse,
  utils::blocking,
  websocket::{handlers::SendVoteUpdate, VoteUpdate},
};
use voids_db_schema::{newtypes::PostNumber, source::post::Post, VoteDirection};
use voids_db_views::structs::LocalUserView;
use voids_utils::error::VoidResult;

#[tracing::instrument(skip_all)]
pub async fn upvote_post(
  path: Path<(String, i32)>,
  context: Data<VoidContext>,
  _local_user_view: LocalUserView,
) -> VoidResult<Json<VoteResponse>> {
  let (community_name, number) = path.into_inner();
  let res = vote_post(&context, community_name, PostNumber(number), VoteDirection::Up).await?;
  Ok(Json(res))
}

#[tracing::instrument(skip_all)]
pub async fn downvote_post(
  path: Path<(String, i32)>,
  context: Data<VoidContext>,
  _local_user_view: LocalUserView,
) -> VoidResult<Json<VoteResponse>> {
  let (community_name, number) = path.into_inner();
  let res = vote_post(&context, community_name, PostNumber(number), VoteDirection::Down).await?;
  Ok(Json(res))
}

/// Applies the vote, then tells every websocket session about the new count. Nothing is sent if
/// the vote failed.
pub async fn vote_post(
  context: &VoidContext,
  community_name: String,
  post_number: PostNumber,
  direction: VoteDirection,
) -> VoidResult<VoteResponse> {
  let community = community_name.clone();
  let post = blocking(context.pool(), move |conn| {
    Post::apply_vote(conn, &community, post_number, direction)
  })
  .await??;
  let new_vote_count = post.vote_count();
  debug!(
    "{} vote on {}/{}, now {}",
    direction, community_name, post_number, new_vote_count
  );

  context.chat_server().do_send(SendVoteUpdate(VoteUpdate {
    community: community_name,
    post_id: post_number,
    new_count: new_vote_count,
  }));

  Ok(VoteResponse {
    result: 200,
    new_vote_count,
  })
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use super::*;
  use crate::test_utils::{body_string, test_context, test_user};
  use actix::{Actor, Context, Handler, Message, MessageResult};
  use actix_web::{HttpRequest, Responder};
  use pretty_assertions::assert_eq;
  use voids_api_common::websocket::handlers::{Connect, WsMessage};
  use voids_db_schema::{
    source::{
      community::{Community, CommunityInsertForm},
      post::PostInsertForm,
    },
    traits::Crud,
  };
  use voids_utils::error::VoidErrorType;

  #[derive(Default)]
  struct Viewer {
    received: Vec<String>,
  }

  impl Actor for Viewer {
    type Context = Context<Self>;
  }

  impl Handler<WsMessage> for Viewer {
    type Result = ();

    fn handle(&mut self, msg: WsMessage, _: &mut Context<Self>) {
      self.received.push(msg.0);
    }
  }

  #[derive(Message)]
  #[rtype(result = "Vec<String>")]
  struct Received;

  impl Handler<Received> for Viewer {
    type Result = MessageResult<Received>;

    fn handle(&mut self, _: Received, _: &mut Context<Self>) -> Self::Result {
      MessageResult(self.received.clone())
    }
  }

  async fn setup_tech_post(context: &VoidContext) -> PostNumber {
    blocking(context.pool(), |conn| {
      Community::create(conn, &CommunityInsertForm::new("tech".into(), None))?;
      Post::create(
        conn,
        &PostInsertForm::new("pia".into(), "tech".into(), "Vote on me".into()),
      )
    })
    .await
    .unwrap()
    .unwrap()
    .number
  }

  #[actix_web::test]
  async fn up_up_down() -> VoidResult<()> {
    let context = test_context().await;
    let number = setup_tech_post(&context).await;

    let viewer = Viewer::default().start();
    context
      .chat_server()
      .send(Connect {
        addr: viewer.clone().recipient(),
      })
      .await
      .unwrap();

    vote_post(&context, "tech".into(), number, VoteDirection::Up).await?;
    vote_post(&context, "tech".into(), number, VoteDirection::Up).await?;
    let res = vote_post(&context, "tech".into(), number, VoteDirection::Down).await?;
    assert_eq!(
      VoteResponse {
        result: 200,
        new_vote_count: 1,
      },
      res
    );

    let post = blocking(context.pool(), move |conn| {
      Post::read_from_number(conn, "tech", number)
    })
    .await??;
    assert_eq!(2, post.upvotes);
    assert_eq!(1, post.downvotes);

    // let the chat server work through its mailbox before asking the viewer
    context
      .chat_server()
      .send(voids_api_common::websocket::handlers::GetUsersOnline)
      .await
      .unwrap();
    assert_eq!(
      vec![
        r#"{"op":"vote update","data":["tech",1,1]}"#.to_string(),
        r#"{"op":"vote update","data":["tech",1,2]}"#.to_string(),
        r#"{"op":"vote update","data":["tech",1,1]}"#.to_string(),
      ],
      viewer.send(Received).await.unwrap()
    );
    Ok(())
  }

  #[actix_web::test]
  async fn failed_vote_is_not_published() {
    let context = test_context().await;
    setup_tech_post(&context).await;
    let viewer = Viewer::default().start();
    context
      .chat_server()
      .send(Connect {
        addr: viewer.clone().recipient(),
      })
      .await
      .unwrap();

    let err = vote_post(&context, "tech".into(), PostNumber(9), VoteDirection::Up)
      .await
      .unwrap_err();
    assert_eq!(VoidErrorType::CouldntFindPost, err.error_type);
    let err = vote_post(&context, "nope".into(), PostNumber(1), VoteDirection::Up)
      .await
      .unwrap_err();
    assert_eq!(VoidErrorType::CouldntFindCommunity, err.error_type);

    context
      .chat_server()
      .send(voids_api_common::websocket::handlers::GetUsersOnline)
      .await
      .unwrap();
    assert!(viewer.send(Received).await.unwrap().is_empty());
  }

  #[actix_web::test]
  async fn upvote_handler_answers_json() -> VoidResult<()> {
    let context = test_context().await;
    let number = setup_tech_post(&context).await;
    let user = test_user(&context, "vic").await;

    let res = upvote_post(Path::from(("tech".to_string(), number.0)), context, user).await?;
    let req: HttpRequest = actix_web::test::TestRequest::default().to_http_request();
    let body = body_string(res.respond_to(&req).map_into_boxed_body());
    assert_eq!(r#"{"result":200,"new_vote_count":1}"#, body);
    Ok(())
  }
}
