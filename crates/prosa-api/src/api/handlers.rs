//! HTTP handler definitions

use axum::{Json, extract::State, http::Uri, response::Response};
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::models::{AnalysisRequest, HealthStatus, encode_json};

use super::state::AppState;

/// GET /health
///
/// Liveness probe. Needs no credential and never touches the analyzer.
pub async fn health_check() -> Json<HealthStatus> {
  Json(HealthStatus::UP)
}

/// POST /tokens
///
/// # Request Body
/// ```json
/// { "text": "Ian is Dutch." }
/// ```
///
/// # Response
/// - 200 OK: `[{"tag":"NNP","text":"Ian","label":"B-PERSON"}, ...]`
/// - 400 Bad Request: body is not an object with a string `text`
/// - 401 Unauthorized: missing or wrong API key
/// - 500 / 504: analysis failed or timed out
pub async fn post_tokens(
  State(state): State<AppState>,
  request: AnalysisRequest,
) -> Result<Response, ApiError> {
  debug!(text_len = request.text.len(), "token request received");

  let tokens = state.service.tokens(request.text).await?;
  info!(token_count = tokens.len(), "tokens extracted");

  encode_json(&tokens)
}

/// POST /entities
///
/// Same request and error contract as `/tokens`; responds with
/// `[{"text":"Utrecht","label":"GPE"}, ...]`.
pub async fn post_entities(
  State(state): State<AppState>,
  request: AnalysisRequest,
) -> Result<Response, ApiError> {
  debug!(text_len = request.text.len(), "entity request received");

  let entities = state.service.entities(request.text).await?;
  info!(entity_count = entities.len(), "entities extracted");

  encode_json(&entities)
}

/// POST /sentences
pub async fn post_sentences(
  State(state): State<AppState>,
  request: AnalysisRequest,
) -> Result<Response, ApiError> {
  debug!(text_len = request.text.len(), "sentence request received");

  let sentences = state.service.sentences(request.text).await?;
  info!(sentence_count = sentences.len(), "sentences extracted");

  encode_json(&sentences)
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
  ApiError::not_found(uri.path())
}
