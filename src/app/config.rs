use std::env;

use log;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
  pub host: String,
  pub port: u16,
}

impl Default for Config {
  fn default() -> Self {
    Config { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT }
  }
}

impl Config {

  pub fn load() -> Self {
    match dotenv::dotenv() {
      Ok(_) => log::info!("Loaded .env file"),
      Err(_) => log::warn!("No .env file found"),
    }

    let host: String = env::var("HOST").unwrap_or_else(|_| {
      log::info!("HOST not set, using default {}", DEFAULT_HOST);
      DEFAULT_HOST.to_string()
    });

    let port: u16 = match env::var("PORT") {
      Ok(raw) => Self::parse_port(&raw),
      Err(_) => {
        log::info!("PORT not set, using default {}", DEFAULT_PORT);
        DEFAULT_PORT
      }
    };

    return Config { host, port }
  }

  fn parse_port(raw: &str) -> u16 {
    match raw.trim().parse::<u16>() {
      Ok(port) => port,
      Err(e) => {
        log::error!("Invalid PORT {:?} ({}), using default {}", raw, e, DEFAULT_PORT);
        DEFAULT_PORT
      }
    }
  }

  pub fn bind_address(&self) -> (String, u16) {
    (self.host.clone(), self.port)
  }

}
