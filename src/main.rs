use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod endpoints;
mod error;
mod extractors;
mod middleware;
mod solver;
mod types;

use solver::{Solver, StubSolver};
use types::Config;

const CONFIG_PATH: &str = "config.yml";

#[derive(Clone)]
pub struct AppState {
    pub solver: Arc<dyn Solver + Send + Sync>,
}

impl AppState {
    pub fn new(solver: impl Solver + Send + Sync + 'static) -> Self {
        Self {
            solver: Arc::new(solver),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let loaded = Config::parse_from_file(CONFIG_PATH)?;
    let config_found = loaded.is_some();
    let config = loaded.unwrap_or_default();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !config_found {
        warn!("{CONFIG_PATH} not found, using default config");
    }

    let app = endpoints::routes(&config).with_state(AppState::new(StubSolver));

    let listener = tokio::net::TcpListener::bind((config.listen_addr.as_str(), config.listen_port))
        .await
        .with_context(|| format!("Couldn't bind to {}:{}", config.listen_addr, config.listen_port))?;

    info!("Listening on {}:{}", config.listen_addr, config.listen_port);

    axum::serve(listener, app).await?;

    Ok(())
}
