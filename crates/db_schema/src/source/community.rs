use crate::{newtypes::CommunityId, schema::community};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Queryable, Selectable, Identifiable, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[diesel(table_name = community)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Community {
  pub id: CommunityId,
  /// The unique name, used in urls
  pub name: String,
  pub display_name: Option<String>,
  pub members: i32,
  /// The number of the most recent post. Only ever incremented.
  #[serde(skip)]
  pub last_post_number: i32,
  pub published: NaiveDateTime,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = community)]
pub struct CommunityInsertForm {
  pub name: String,
  pub display_name: Option<String>,
  pub members: i32,
}

impl CommunityInsertForm {
  pub fn new(name: String, display_name: Option<String>) -> Self {
    Self {
      name,
      display_name,
      members: 1,
    }
  }
}
