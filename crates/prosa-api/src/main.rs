//! prosa-api server entry point

use std::sync::Arc;

use prosa::{DocumentAnalyzer, ProseAnalyzer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use prosa_api::ApiError;
use prosa_api::api::{AppState, run_server};
use prosa_api::config::{Config, LogLevel};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Configuration first: the log level comes from it
  let config = Config::from_env()?;
  init_tracing(config.log_level);
  tracing::info!(
    bind_addr = %config.bind_addr(),
    log_level = ?config.log_level,
    analysis_timeout_ms = config.analysis_timeout.as_millis(),
    max_body_bytes = config.max_body_bytes,
    "configuration loaded"
  );

  let analyzer: Arc<dyn DocumentAnalyzer> = Arc::new(ProseAnalyzer::new());
  tracing::info!("analyzer initialized");

  let state = AppState::new(config, analyzer);

  run_server(state).await
}

/// `RUST_LOG` wins over `LOG_LEVEL` when set
fn init_tracing(level: LogLevel) {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();
}
