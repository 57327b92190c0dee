use doku::Document;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, Document)]
#[serde(default)]
pub struct Settings {
  /// settings related to the sqlite database
  #[default(Default::default())]
  pub database: DatabaseConfig,
  /// Parameters for automatic configuration of a new instance (only used at first start)
  #[default(Default::default())]
  pub setup: SetupConfig,
  /// the domain name of your instance
  #[default("localhost")]
  #[doku(example = "example.com")]
  pub hostname: String,
  /// Address where voids should listen for incoming requests
  #[default(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)))]
  #[doku(as = "String")]
  pub bind: IpAddr,
  /// Port where voids should listen for incoming requests
  #[default(8536)]
  pub port: u16,
  /// Whether the site is available over TLS. Controls the `Secure` flag of the login cookie.
  #[default(false)]
  pub tls_enabled: bool,
  /// Secret used to sign login tokens. Change this before going live.
  #[default("changeme")]
  #[doku(example = "a-long-random-string")]
  pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, Document)]
#[serde(default)]
pub struct DatabaseConfig {
  /// Path of the sqlite database file, or `:memory:`
  #[default("voids.db")]
  #[doku(example = "/var/lib/voids/voids.db")]
  pub path: String,
  /// Maximum number of pooled sqlite connections
  #[default(8)]
  pub pool_size: u32,
  /// How long a writer waits for the database lock before giving up
  #[default(5000)]
  pub busy_timeout_ms: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, Document)]
#[serde(default)]
pub struct SetupConfig {
  /// Name of the community that receives a copy of every post
  #[default("all")]
  pub default_community: String,
  /// Display name of the default community
  #[default(Some("Everything".into()))]
  #[doku(example = "Everything")]
  pub default_community_display_name: Option<String>,
}
