use serde::{Deserialize, Serialize};

/// The signup form. Fields are optional so a missing one is reported by name.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Register {
  pub username: Option<String>,
  pub password: Option<String>,
  pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Login {
  pub username: Option<String>,
  pub password: Option<String>,
}
