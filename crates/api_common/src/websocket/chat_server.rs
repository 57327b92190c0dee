use crate::websocket::handlers::{SessionInfo, WsMessage};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashMap;
use voids_utils::ConnectionId;

/// `ChatServer` is an actor. It keeps the list of connected websocket sessions and fans every
/// published event out to all of them.
pub struct ChatServer {
  /// A map from generated random ID to session addr
  pub(super) sessions: HashMap<ConnectionId, SessionInfo>,

  /// Rng for generating a unique session id
  pub(super) rng: StdRng,
}

impl ChatServer {
  pub fn startup() -> ChatServer {
    ChatServer {
      sessions: HashMap::new(),
      rng: StdRng::from_entropy(),
    }
  }

  pub(super) fn next_connection_id(&mut self) -> ConnectionId {
    loop {
      let id = self.rng.gen::<usize>();
      if !self.sessions.contains_key(&id) {
        return id;
      }
    }
  }

  pub(super) fn send_all_message(&self, message: &str) {
    for session in self.sessions.values() {
      session.addr.do_send(WsMessage(message.to_owned()));
    }
  }
}
