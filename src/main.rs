pub mod api;
pub mod config;
pub mod db;
pub mod error;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::Error;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "movies_api=debug,tower_http=info".into());
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing init failed: {e}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::load()?;
    api::server::start_server(&config).await
}
