use actix_web::HttpServer;
use std::env;

use crate::app::config::Config;
use crate::app::factory::{AppState, CreateApp};

mod analysis;
mod app;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  if env::var_os("RUST_LOG").is_none() {
    env::set_var("RUST_LOG", "actix_web=info,info");
  }
  env_logger::init();

  let config : Config = Config::load();
  let app_state : AppState = AppState::new();

  let server_builder = HttpServer::new(move || {
    let factory: CreateApp = CreateApp::from_state(app_state.clone());
    factory.build_app().wrap(actix_web::middleware::Logger::default())
  });

  let (host, port) = config.bind_address();
  log::info!("Company analysis service listening on http://{}:{}", host, port);
  let server = server_builder.bind((host, port))?;

  server.run().await?;

  Ok(())
}
