use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
  Debug, Copy, Clone, Hash, Eq, PartialEq, Default, Serialize, Deserialize, DieselNewType,
)]
/// The user id.
pub struct UserId(pub i32);

#[derive(
  Debug, Copy, Clone, Hash, Eq, PartialEq, Default, Serialize, Deserialize, DieselNewType,
)]
/// The community id.
pub struct CommunityId(pub i32);

#[derive(
  Debug, Copy, Clone, Hash, Eq, PartialEq, Default, Serialize, Deserialize, DieselNewType,
)]
/// The internal post id, unique across all communities.
pub struct PostId(pub i32);

#[derive(
  Debug,
  Copy,
  Clone,
  Hash,
  Eq,
  PartialEq,
  Ord,
  PartialOrd,
  Default,
  Serialize,
  Deserialize,
  DieselNewType,
)]
/// The public post id. Numbers start at 1 in every community and are never reused.
pub struct PostNumber(pub i32);

impl fmt::Display for PostNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl fmt::Display for CommunityId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
