use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Create a post in the community of the url.
pub struct CreatePost {
  #[serde(rename = "post-title")]
  pub title: Option<String>,
  #[serde(rename = "post-content")]
  pub body: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct VoteResponse {
  /// Always 200, kept for clients which look at the body only
  pub result: u16,
  /// Upvotes minus downvotes after this vote
  pub new_vote_count: i32,
}
