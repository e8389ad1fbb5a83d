//! API key gate
//!
//! Every request except `/health*` must carry the shared secret in
//! `X-API-Key`. The gate runs before routing and body parsing.

use axum::{
  extract::{Request, State},
  http::HeaderValue,
  middleware::Next,
  response::Response,
};
use tracing::{info, warn};

use super::state::AppState;
use crate::config::{API_KEY_HEADER, HEALTH_PATH_PREFIX, SharedSecret};
use crate::errors::ApiError;

/// Middleware enforcing the API key
///
/// Logs one audit line per checked request with the outcome and path.
/// The presented and expected credentials never appear in the log.
///
/// # Errors
/// `401 unauthorized` if the header is missing or does not match
pub async fn require_api_key(
  State(state): State<AppState>,
  request: Request,
  next: Next,
) -> Result<Response, ApiError> {
  let path = request.uri().path().to_owned();
  if path.starts_with(HEALTH_PATH_PREFIX) {
    return Ok(next.run(request).await);
  }

  match check_credential(&state.config.api_key, request.headers().get(API_KEY_HEADER)) {
    Ok(()) => {
      info!(outcome = "accepted", path = %path, "api key check");
      Ok(next.run(request).await)
    }
    Err(e) => {
      warn!(outcome = "rejected", path = %path, reason = %e, "api key check");
      Err(e)
    }
  }
}

/// Compares a presented header against the configured secret
///
/// # Errors
/// `MissingCredential` without a header, `InvalidCredential` on mismatch
pub fn check_credential(
  secret: &SharedSecret,
  presented: Option<&HeaderValue>,
) -> Result<(), ApiError> {
  let Some(value) = presented else {
    return Err(ApiError::MissingCredential);
  };
  if secret.matches(value.as_bytes()) {
    Ok(())
  } else {
    Err(ApiError::InvalidCredential)
  }
}
