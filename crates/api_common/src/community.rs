use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreateCommunity {
  #[serde(rename = "community-name")]
  pub name: Option<String>,
  #[serde(rename = "community-display-name")]
  pub display_name: Option<String>,
}
