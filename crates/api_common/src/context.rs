use crate::websocket::chat_server::ChatServer;
use actix::Addr;
use std::sync::Arc;
use voids_db_schema::utils::DbPool;
use voids_utils::settings::structs::Settings;

/// Everything a request handler needs, shared between all workers.
#[derive(Clone)]
pub struct VoidContext {
  pool: DbPool,
  chat_server: Addr<ChatServer>,
  settings: Arc<Settings>,
}

impl VoidContext {
  pub fn create(pool: DbPool, chat_server: Addr<ChatServer>, settings: Settings) -> VoidContext {
    VoidContext {
      pool,
      chat_server,
      settings: Arc::new(settings),
    }
  }
  pub fn pool(&self) -> &DbPool {
    &self.pool
  }
  pub fn chat_server(&self) -> &Addr<ChatServer> {
    &self.chat_server
  }
  pub fn settings(&self) -> &Settings {
    &self.settings
  }
}
