//! API configuration constants

/// Maximum accepted `text` length in bytes
///
/// Analysis cost grows with input length, so very long inputs are refused
/// before they reach the analyzer.
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default per-request analysis timeout (milliseconds)
pub const DEFAULT_ANALYSIS_TIMEOUT_MS: u64 = 10_000;

/// Default request body limit (bytes)
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Request header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Paths starting with this prefix bypass authentication
pub const HEALTH_PATH_PREFIX: &str = "/health";

/// Placeholder secret that must never be served with
pub const PLACEHOLDER_SECRET: &str = "ChangeMe";
