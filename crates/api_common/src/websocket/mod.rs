use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use voids_db_schema::newtypes::PostNumber;
use voids_utils::error::VoidResult;

pub mod chat_server;
pub mod handlers;

#[derive(Serialize)]
struct WebsocketResponse<T> {
  op: String,
  data: T,
}

pub fn serialize_websocket_message<OP, Response>(op: &OP, data: &Response) -> VoidResult<String>
where
  Response: Serialize,
  OP: ToString,
{
  let response = WebsocketResponse {
    op: op.to_string(),
    data,
  };
  Ok(serde_json::to_string(&response)?)
}

#[derive(EnumString, Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOperation {
  #[strum(serialize = "vote update")]
  VoteUpdate,
}

/// Sent to every websocket session after a vote was committed. On the wire this is the array
/// `[community, post_id, new_count]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, PostNumber, i32)", from = "(String, PostNumber, i32)")]
pub struct VoteUpdate {
  pub community: String,
  pub post_id: PostNumber,
  pub new_count: i32,
}

impl From<VoteUpdate> for (String, PostNumber, i32) {
  fn from(update: VoteUpdate) -> Self {
    (update.community, update.post_id, update.new_count)
  }
}

impl From<(String, PostNumber, i32)> for VoteUpdate {
  fn from((community, post_id, new_count): (String, PostNumber, i32)) -> Self {
    VoteUpdate {
      community,
      post_id,
      new_count,
    }
  }
}
