use actix_web::web;
use voids_api::{
  community::create::create_community,
  local_user::{login::login, logout::logout, register::register},
  post::{
    create::create_post,
    vote::{downvote_post, upvote_post},
  },
};
use voids_routes::{
  listing::{get_listing_json, get_listing_xml},
  pages::{
    community_page,
    create_community_form,
    create_post_form,
    index,
    login_form,
    post_page,
    signup_form,
  },
  websocket::websocket,
};

pub fn config(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(index))
    // Communities
    .service(
      web::resource("/create-community")
        .route(web::get().to(create_community_form))
        .route(web::post().to(create_community)),
    )
    .service(
      web::scope("/v/{community}")
        .route("", web::get().to(community_page))
        .route("/json", web::get().to(get_listing_json))
        .route("/xml", web::get().to(get_listing_xml))
        .service(
          web::resource("/new")
            .route(web::get().to(create_post_form))
            .route(web::post().to(create_post)),
        ),
    )
    // Posts
    .route("/comments/{community}/{post_id}", web::get().to(post_page))
    .service(
      web::resource("/upvote/{community}/{post_id}")
        .route(web::get().to(upvote_post))
        .route(web::post().to(upvote_post)),
    )
    .service(
      web::resource("/downvote/{community}/{post_id}")
        .route(web::get().to(downvote_post))
        .route(web::post().to(downvote_post)),
    )
    // User
    .service(
      web::resource("/login")
        .route(web::get().to(login_form))
        .route(web::post().to(login)),
    )
    .service(
      web::resource("/signup")
        .route(web::get().to(signup_form))
        .route(web::post().to(register)),
    )
    .route("/register", web::get().to(signup_form))
    .route("/logoff", web::get().to(logout))
    // Live vote updates
    .route("/ws", web::get().to(websocket));
}
