//! HTTP server for the wage calculator.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wage_calculator::api::create_router;
use wage_calculator::config::ConfigLoader;
use wage_calculator::error::{EngineError, EngineResult};

const CONFIG_PATH_VAR: &str = "WAGE_CALCULATOR_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/server.yaml";

#[tokio::main]
async fn main() -> EngineResult<()> {
    let config_path =
        std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path)?;
    let server = config.server();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_filter))
        .map_err(|e| EngineError::ConfigParseError {
            path: config_path.clone(),
            message: format!("invalid log_filter: {}", e),
        })?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let address = server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| EngineError::Server {
            message: format!("failed to bind {}: {}", address, e),
        })?;

    info!(address = %address, config = %config_path, "Wage calculator listening");

    axum::serve(listener, create_router())
        .await
        .map_err(|e| EngineError::Server {
            message: e.to_string(),
        })
}
