use crate::websocket::{
  chat_server::ChatServer,
  serialize_websocket_message,
  UserOperation,
  VoteUpdate,
};
use actix::{Actor, Context, Handler, Message, Recipient};
use tracing::{debug, error};
use voids_utils::ConnectionId;

/// A string message sent to a websocket session
#[derive(Message)]
#[rtype(result = "()")]
pub struct WsMessage(pub String);

pub struct SessionInfo {
  pub addr: Recipient<WsMessage>,
}

/// Make actor from `ChatServer`
impl Actor for ChatServer {
  /// We are going to use simple Context, we just need ability to communicate
  /// with other actors.
  type Context = Context<Self>;
}

/// New chat session is created
#[derive(Message)]
#[rtype(ConnectionId)]
pub struct Connect {
  pub addr: Recipient<WsMessage>,
}

/// Register new session and assign unique id to this session
impl Handler<Connect> for ChatServer {
  type Result = ConnectionId;

  fn handle(&mut self, msg: Connect, _: &mut Context<Self>) -> Self::Result {
    let id = self.next_connection_id();
    self.sessions.insert(id, SessionInfo { addr: msg.addr });
    debug!("websocket session {} joined, {} online", id, self.sessions.len());
    id
  }
}

/// Session is disconnected
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
  pub id: ConnectionId,
}

impl Handler<Disconnect> for ChatServer {
  type Result = ();

  fn handle(&mut self, msg: Disconnect, _: &mut Context<Self>) -> Self::Result {
    if self.sessions.remove(&msg.id).is_some() {
      debug!("websocket session {} left", msg.id);
    }
  }
}

/// Getting the number of online connections
#[derive(Message)]
#[rtype(usize)]
pub struct GetUsersOnline;

impl Handler<GetUsersOnline> for ChatServer {
  type Result = usize;

  fn handle(&mut self, _msg: GetUsersOnline, _: &mut Context<Self>) -> Self::Result {
    self.sessions.len()
  }
}

/// Publish a committed vote to everyone connected right now. Nothing is kept for sessions which
/// connect later.
#[derive(Message)]
#[rtype(result = "()")]
pub struct SendVoteUpdate(pub VoteUpdate);

impl Handler<SendVoteUpdate> for ChatServer {
  type Result = ();

  fn handle(&mut self, msg: SendVoteUpdate, _: &mut Context<Self>) -> Self::Result {
    match serialize_websocket_message(&UserOperation::VoteUpdate, &msg.0) {
      Ok(message) => self.send_all_message(&message),
      Err(e) => error!("Couldn't serialize vote update: {}", e),
    }
  }
}
