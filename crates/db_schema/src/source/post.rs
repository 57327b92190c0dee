use crate::{
  newtypes::{PostId, PostNumber},
  schema::post,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Queryable, Selectable, Identifiable, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Post {
  pub id: PostId,
  /// The id shown to users, unique within the community
  pub number: PostNumber,
  pub creator_name: String,
  pub community_name: String,
  pub title: String,
  pub body: Option<String>,
  pub upvotes: i32,
  pub downvotes: i32,
  pub published: NaiveDateTime,
}

impl Post {
  /// The score shown next to the post, and sent out with every vote update.
  pub fn vote_count(&self) -> i32 {
    self.upvotes - self.downvotes
  }
}

/// The number is not part of the form, it is handed out by the community on insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostInsertForm {
  pub creator_name: String,
  pub community_name: String,
  pub title: String,
  pub body: Option<String>,
}

impl PostInsertForm {
  pub fn new(creator_name: String, community_name: String, title: String) -> Self {
    Self {
      creator_name,
      community_name,
      title,
      body: None,
    }
  }

  /// The same post, submitted to another community.
  pub fn cross_post(&self, community_name: &str) -> Self {
    Self {
      community_name: community_name.to_string(),
      ..self.clone()
    }
  }
}

#[derive(Insertable)]
#[diesel(table_name = post)]
pub(crate) struct NumberedPostForm<'a> {
  pub number: PostNumber,
  pub creator_name: &'a str,
  pub community_name: &'a str,
  pub title: &'a str,
  pub body: Option<&'a str>,
}
