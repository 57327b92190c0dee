pub mod api_routes_http;
pub mod root_span_builder;
pub mod session_middleware;

use crate::{root_span_builder::QuieterRootSpanBuilder, session_middleware::SessionMiddleware};
use actix::Actor;
use actix_web::{
  middleware::{self, ErrorHandlers},
  web::Data,
  App,
  HttpServer,
};
use clap::Parser;
use tracing::info;
use tracing_actix_web::TracingLogger;
use voids_api_common::{
  context::VoidContext,
  utils::blocking,
  websocket::chat_server::ChatServer,
};
use voids_db_schema::{
  source::community::{Community, CommunityInsertForm},
  utils::{build_db_pool, DbPool},
};
use voids_utils::{
  error::VoidResult,
  response::jsonify_plain_text_errors,
  settings::{structs::Settings, SETTINGS},
};

#[derive(Parser, Debug)]
#[command(
  version,
  about = "A link aggregator with live vote updates",
  long_about = "A link aggregator with live vote updates.

This is the voids backend server. By default it reads config/config.hjson, every missing option
takes its default value."
)]
pub struct CmdArgs {
  /// Read the config from this file.
  #[arg(long, env = "VOIDS_CONFIG_LOCATION")]
  config: Option<String>,
  /// Print the config with all options and their documentation, then exit.
  #[arg(long, default_value_t = false)]
  print_config_docs: bool,
}

/// Creates the community which receives a copy of every post, unless it exists already.
pub async fn setup_default_community(pool: &DbPool, settings: &Settings) -> VoidResult<Community> {
  let form = CommunityInsertForm::new(
    settings.setup.default_community.clone(),
    settings.setup.default_community_display_name.clone(),
  );
  Ok(blocking(pool, move |conn| Community::create_if_missing(conn, &form)).await??)
}

/// Placing the main function in lib.rs allows other crates to import it and embed voids
pub async fn start_voids_server(args: CmdArgs) -> VoidResult<()> {
  if args.print_config_docs {
    println!("{}", Settings::documented_defaults());
    return Ok(());
  }

  let settings = match &args.config {
    Some(location) => Settings::init_from(location)?,
    None => SETTINGS.clone(),
  };

  let pool = build_db_pool(&settings)?;
  let all = setup_default_community(&pool, &settings).await?;
  info!("Cross posts go to v/{}", all.name);

  let chat_server = ChatServer::startup().start();
  let context = VoidContext::create(pool, chat_server, settings.clone());

  info!(
    "Starting http server at {}:{}",
    settings.bind, settings.port
  );
  HttpServer::new(move || {
    App::new()
      .wrap(middleware::Compress::default())
      .wrap(ErrorHandlers::new().default_handler(jsonify_plain_text_errors))
      .wrap(SessionMiddleware::new(context.clone()))
      .wrap(TracingLogger::<QuieterRootSpanBuilder>::new())
      .app_data(Data::new(context.clone()))
      .configure(api_routes_http::config)
  })
  .bind((settings.bind, settings.port))?
  .run()
  .await?;

  Ok(())
}
