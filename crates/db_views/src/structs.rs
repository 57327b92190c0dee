use serde::{Deserialize, Serialize};
use voids_db_schema::source::{community::Community, post::Post, user::User};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// The logged in user of a request, put into the request extensions by the session middleware.
pub struct LocalUserView {
  pub user: User,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// A community together with all of its posts, ordered by post number.
pub struct CommunityListing {
  pub community: Community,
  pub posts: Vec<Post>,
}
