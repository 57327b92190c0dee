pub mod listing;
pub mod pages;
pub mod websocket;
