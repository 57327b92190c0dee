pub mod community;
pub mod login_token;
pub mod post;
pub mod user;
