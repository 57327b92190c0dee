pub mod community_listing;
pub mod local_user_view;
pub mod structs;
