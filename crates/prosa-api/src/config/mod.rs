//! Config module

mod constants;
mod env;
mod secret;

pub use constants::{
  API_KEY_HEADER, DEFAULT_ANALYSIS_TIMEOUT_MS, DEFAULT_HOST, DEFAULT_LOG_LEVEL,
  DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, HEALTH_PATH_PREFIX, MAX_TEXT_LENGTH, PLACEHOLDER_SECRET,
};
pub use env::{Config, LogLevel};
pub use secret::SharedSecret;
