#[macro_use]
extern crate smart_default;

pub mod error;
pub mod response;
pub mod settings;
pub mod utils;

pub type ConnectionId = usize;

#[macro_export]
macro_rules! location_info {
  () => {
    format!(
      "None value at {}:{}, column {}",
      file!(),
      line!(),
      column!()
    )
  };
}
