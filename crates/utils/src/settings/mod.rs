use crate::error::VoidResult;
use deser_hjson::from_str;
use doku::json::{AutoComments, CommentsStyle, Formatting, ObjectsStyle};
use once_cell::sync::Lazy;
use std::{env, fs, io::ErrorKind};
use structs::Settings;
use tracing::warn;

pub mod structs;

static DEFAULT_CONFIG_FILE: &str = "config/config.hjson";

pub static SETTINGS: Lazy<Settings> = Lazy::new(|| {
  if env::var("VOIDS_INITIALIZE_WITH_DEFAULT_SETTINGS").is_ok() {
    Settings::default()
  } else {
    Settings::init().expect("Failed to load settings file, see documentation (https://github.com/voids-project/voids)")
  }
});

impl Settings {
  /// Reads config from configuration file.
  ///
  /// Note: The env var `VOIDS_DATABASE_PATH` overrides the database file from the config, see
  /// [`Settings::get_database_path`].
  ///
  /// Warning: Only call this once.
  pub(crate) fn init() -> VoidResult<Self> {
    Self::init_from(&Self::get_config_location())
  }

  /// Reads config from the given file instead of the default location.
  pub fn init_from(location: &str) -> VoidResult<Self> {
    let config = from_str::<Settings>(&Self::read_config_file(location)?)?;
    Ok(config)
  }

  pub fn get_database_path(&self) -> String {
    env::var("VOIDS_DATABASE_PATH").unwrap_or_else(|_| self.database.path.clone())
  }

  fn get_config_location() -> String {
    env::var("VOIDS_CONFIG_LOCATION").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string())
  }

  /// A missing config file is not an error, every setting has a default.
  fn read_config_file(location: &str) -> VoidResult<String> {
    match fs::read_to_string(location) {
      Ok(s) => Ok(s),
      Err(e) if e.kind() == ErrorKind::NotFound => {
        warn!("No config file at {}, using default settings", location);
        Ok("{}".to_string())
      }
      Err(e) => Err(e.into()),
    }
  }

  /// The default config with every option documented, in hjson.
  pub fn documented_defaults() -> String {
    let fmt = Formatting {
      auto_comments: AutoComments::none(),
      comments_style: CommentsStyle {
        separator: "#".to_owned(),
      },
      objects_style: ObjectsStyle {
        surround_keys_with_quotes: false,
        use_comma_as_separator: false,
      },
      ..Default::default()
    };
    doku::to_json_fmt_val(&fmt, &Settings::default())
  }

  /// Returns either "http" or "https", depending on tls_enabled setting
  pub fn get_protocol_string(&self) -> &'static str {
    if self.tls_enabled {
      "https"
    } else {
      "http"
    }
  }

  /// Returns something like `http://localhost` or `https://voids.example`,
  /// with the correct protocol and hostname.
  pub fn get_protocol_and_hostname(&self) -> String {
    format!("{}://{}", self.get_protocol_string(), self.hostname)
  }
}
