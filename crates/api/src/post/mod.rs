pub mod create;
pub mod vote;
