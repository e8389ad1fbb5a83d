//! Config loading from environment variables

use std::str::FromStr;
use std::time::Duration;

use super::constants::{
  DEFAULT_ANALYSIS_TIMEOUT_MS, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_MAX_BODY_BYTES,
  DEFAULT_PORT,
};
use super::secret::SharedSecret;
use crate::errors::ApiError;

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
  /// trace
  Trace,
  /// debug
  Debug,
  /// info
  Info,
  /// warn
  Warn,
  /// error
  Error,
  /// logging disabled
  Off,
}

impl FromStr for LogLevel {
  type Err = String;

  /// Accepts level names and the numeric scale used by older deployments
  /// (`1`=debug, `2`=info, `3`=warn, `4`=error, `5`=off)
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" | "1" => Ok(Self::Debug),
      "info" | "2" => Ok(Self::Info),
      "warn" | "warning" | "3" => Ok(Self::Warn),
      "error" | "4" => Ok(Self::Error),
      "off" | "5" => Ok(Self::Off),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error, off, 1-5",
        s
      )),
    }
  }
}

impl LogLevel {
  /// Directive for `tracing_subscriber::EnvFilter`
  #[must_use]
  pub fn as_directive(&self) -> &'static str {
    match self {
      Self::Trace => "trace",
      Self::Debug => "debug",
      Self::Info => "info",
      Self::Warn => "warn",
      Self::Error => "error",
      Self::Off => "off",
    }
  }
}

/// API Server Configuration
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind host (e.g. "0.0.0.0")
  pub host: String,
  /// Listening port
  pub port: u16,
  /// Shared secret expected in the `X-API-Key` header
  pub api_key: SharedSecret,
  /// Log verbosity
  pub log_level: LogLevel,
  /// Upper bound on one analyzer invocation
  pub analysis_timeout: Duration,
  /// Request body limit in bytes
  pub max_body_bytes: usize,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if a value is missing or invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through `lookup` (environment in production, a map in tests)
  ///
  /// | Variable | Default |
  /// |---|---|
  /// | `PROSA_HOST` | `0.0.0.0` |
  /// | `PROSA_PORT` (or `PROSE_PORT`) | `8080` |
  /// | `API_KEY` | required |
  /// | `LOG_LEVEL` | `info` |
  /// | `PROSA_ANALYSIS_TIMEOUT_MS` | `10000` |
  /// | `PROSA_MAX_BODY_BYTES` | `2097152` |
  ///
  /// # Errors
  /// Returns an error if a value is missing or invalid
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::errors::Result<Self> {
    let host = lookup("PROSA_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = match lookup("PROSA_PORT").or_else(|| lookup("PROSE_PORT")) {
      // ":8080" is accepted as well
      Some(raw) => raw
        .trim()
        .trim_start_matches(':')
        .parse::<u16>()
        .map_err(|e| ApiError::config(format!("invalid port '{raw}': {e}")))?,
      None => DEFAULT_PORT,
    };

    let api_key = match lookup("API_KEY") {
      Some(value) => SharedSecret::new(value)?,
      None => return Err(ApiError::config("API_KEY must be set")),
    };

    let log_level_str = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let log_level = LogLevel::from_str(&log_level_str).map_err(ApiError::config)?;

    let timeout_ms =
      parse_positive(&lookup, "PROSA_ANALYSIS_TIMEOUT_MS", DEFAULT_ANALYSIS_TIMEOUT_MS)?;
    let max_body_bytes =
      parse_positive(&lookup, "PROSA_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES as u64)?;

    Ok(Self {
      host,
      port,
      api_key,
      log_level,
      analysis_timeout: Duration::from_millis(timeout_ms),
      max_body_bytes: usize::try_from(max_body_bytes)
        .map_err(|e| ApiError::config(format!("PROSA_MAX_BODY_BYTES out of range: {e}")))?,
    })
  }

  /// Address to bind the listener to ("host:port")
  #[must_use]
  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

/// Reads a variable that must be a positive integer
fn parse_positive(
  lookup: &impl Fn(&str) -> Option<String>,
  key: &str,
  default: u64,
) -> crate::errors::Result<u64> {
  let Some(raw) = lookup(key) else {
    return Ok(default);
  };
  match raw.trim().parse::<u64>() {
    Ok(0) => Err(ApiError::config(format!("{key} must be greater than 0"))),
    Ok(value) => Ok(value),
    Err(e) => Err(ApiError::config(format!("invalid {key} '{raw}': {e}"))),
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn load(vars: &[(&str, &str)]) -> crate::errors::Result<Config> {
    let map: HashMap<String, String> =
      vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    Config::from_lookup(|key| map.get(key).cloned())
  }

  #[test]
  fn log_level_from_str_names() {
    assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
    assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
    assert_eq!(LogLevel::from_str("off").unwrap(), LogLevel::Off);
  }

  #[test]
  fn log_level_from_str_numeric() {
    assert_eq!(LogLevel::from_str("1").unwrap(), LogLevel::Debug);
    assert_eq!(LogLevel::from_str("2").unwrap(), LogLevel::Info);
    assert_eq!(LogLevel::from_str("5").unwrap(), LogLevel::Off);
  }

  #[test]
  fn log_level_from_str_invalid() {
    assert!(LogLevel::from_str("verbose").is_err());
  }

  #[test]
  fn defaults_apply_when_only_secret_is_set() {
    let config = load(&[("API_KEY", "s3cret")]).unwrap();
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.analysis_timeout, Duration::from_millis(10_000));
    assert_eq!(config.max_body_bytes, 2 * 1024 * 1024);
    assert!(config.api_key.matches(b"s3cret"));
  }

  #[test]
  fn missing_secret_is_an_error() {
    let err = load(&[]).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn empty_or_placeholder_secret_is_an_error() {
    assert!(load(&[("API_KEY", "")]).is_err());
    assert!(load(&[("API_KEY", "ChangeMe")]).is_err());
  }

  #[test]
  fn port_accepts_legacy_name_and_colon_prefix() {
    let config = load(&[("API_KEY", "k"), ("PROSE_PORT", ":9090")]).unwrap();
    assert_eq!(config.port, 9090);

    let config = load(&[("API_KEY", "k"), ("PROSA_PORT", "7000"), ("PROSE_PORT", "9090")]).unwrap();
    assert_eq!(config.port, 7000);
  }

  #[test]
  fn invalid_numbers_are_errors() {
    assert!(load(&[("API_KEY", "k"), ("PROSA_PORT", "http")]).is_err());
    assert!(load(&[("API_KEY", "k"), ("PROSA_ANALYSIS_TIMEOUT_MS", "0")]).is_err());
    assert!(load(&[("API_KEY", "k"), ("PROSA_MAX_BODY_BYTES", "-1")]).is_err());
  }

  #[test]
  fn debug_output_does_not_contain_secret() {
    let config = load(&[("API_KEY", "very-secret-value")]).unwrap();
    assert!(!format!("{config:?}").contains("very-secret-value"));
  }
}
