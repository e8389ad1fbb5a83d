//! Shared secret for the API key gate

use subtle::ConstantTimeEq;

use super::constants::PLACEHOLDER_SECRET;
use crate::errors::ApiError;

/// The configured API key.
///
/// - Never empty and never the placeholder value (checked at construction)
/// - `Debug` prints `[REDACTED]`, so a logged `Config` cannot leak it
/// - Comparison is constant-time
#[derive(Clone)]
pub struct SharedSecret(String);

impl SharedSecret {
  /// Wraps a configured secret
  ///
  /// # Errors
  /// Returns a config error if the value is empty or the placeholder
  pub fn new(value: impl Into<String>) -> crate::errors::Result<Self> {
    let value = value.into();
    if value.is_empty() {
      return Err(ApiError::config("API_KEY must not be empty"));
    }
    if value == PLACEHOLDER_SECRET {
      return Err(ApiError::config(format!(
        "API_KEY is still the placeholder '{PLACEHOLDER_SECRET}'; set a real secret"
      )));
    }
    Ok(Self(value))
  }

  /// Byte-for-byte comparison against a presented credential
  #[must_use]
  pub fn matches(&self, presented: &[u8]) -> bool {
    let expected = self.0.as_bytes();
    if presented.len() != expected.len() {
      // keep timing independent of where the lengths diverge
      let _ = expected.ct_eq(expected);
      return false;
    }
    presented.ct_eq(expected).into()
  }
}

impl std::fmt::Debug for SharedSecret {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("SharedSecret([REDACTED])")
  }
}
