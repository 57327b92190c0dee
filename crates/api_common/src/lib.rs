pub mod claims;
pub mod community;
pub mod context;
pub mod person;
pub mod post;
pub mod utils;
pub mod websocket;

pub extern crate voids_db_schema;
pub extern crate voids_db_views;
pub extern crate voids_utils;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Returned by operations which have nothing else to report.
pub struct SuccessResponse {
  pub success: bool,
}

impl Default for SuccessResponse {
  fn default() -> Self {
    SuccessResponse { success: true }
  }
}
