#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_derive_newtype;

pub mod impls;
pub mod newtypes;
pub mod schema;
pub mod source;
pub mod traits;
pub mod utils;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which counter a vote increments. Votes are anonymous, there is no record of who voted.
#[derive(EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
  Up,
  Down,
}
