use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use voids_server::{start_voids_server, CmdArgs};
use voids_utils::error::VoidResult;

#[actix_web::main]
pub async fn main() -> VoidResult<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let args = CmdArgs::parse();

  start_voids_server(args).await?;
  Ok(())
}
