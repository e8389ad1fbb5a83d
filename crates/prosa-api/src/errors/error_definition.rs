//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use prosa::errors::AnalyzerError;

/// Error category, one per HTTP outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Credential missing or wrong
  Auth,
  /// Body is not a JSON object with a string `text`
  Parse,
  /// `text` exceeds the accepted length
  TextTooLong,
  /// Body exceeds the configured byte limit
  PayloadTooLarge,
  /// The analyzer failed
  Analysis,
  /// The analyzer did not finish in time
  AnalysisTimeout,
  /// The response could not be serialized
  Encoding,
  /// No such route
  NotFound,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Error code sent in the response body
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Auth => "unauthorized",
      Self::Parse => "parse_error",
      Self::TextTooLong => "text_too_long",
      Self::PayloadTooLarge => "payload_too_large",
      Self::Analysis => "analysis_error",
      Self::AnalysisTimeout => "analysis_timeout",
      Self::Encoding => "encoding_error",
      Self::NotFound => "not_found",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Auth => StatusCode::UNAUTHORIZED,
      Self::Parse | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
      Self::AnalysisTimeout => StatusCode::GATEWAY_TIMEOUT,
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::Analysis | Self::Encoding | Self::Internal | Self::Config => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// No `X-API-Key` header
  #[error("missing API key")]
  MissingCredential,

  /// `X-API-Key` does not match the configured secret
  #[error("invalid API key")]
  InvalidCredential,

  /// Body is not valid JSON
  #[error("request body is not valid JSON: {0}")]
  InvalidJson(String),

  /// Body is valid JSON but not an object
  #[error("request body must be a JSON object")]
  NotAnObject,

  /// The object has no `text` field
  #[error("missing field 'text'")]
  MissingText,

  /// `text` is present but not a string
  #[error("field 'text' must be a string, got {0}")]
  TextNotString(&'static str),

  /// `text` is too long
  #[error("text is too long: {0} bytes (max: {1} bytes)")]
  TextTooLong(usize, usize),

  /// Body exceeds the configured limit
  #[error("request body is too large")]
  PayloadTooLarge,

  /// Analyzer failure
  #[error("analysis failed: {0}")]
  Analysis(String),

  /// Analyzer exceeded the timeout (milliseconds)
  #[error("analysis timed out after {0} ms")]
  AnalysisTimeout(u128),

  /// Serialization failure
  #[error("failed to encode response: {0}")]
  Encoding(String),

  /// Unknown route
  #[error("no route for {0}")]
  NotFound(String),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Error category
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::MissingCredential | Self::InvalidCredential => ApiErrorKind::Auth,
      Self::InvalidJson(_) | Self::NotAnObject | Self::MissingText | Self::TextNotString(_) => {
        ApiErrorKind::Parse
      }
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::PayloadTooLarge => ApiErrorKind::PayloadTooLarge,
      Self::Analysis(_) => ApiErrorKind::Analysis,
      Self::AnalysisTimeout(_) => ApiErrorKind::AnalysisTimeout,
      Self::Encoding(_) => ApiErrorKind::Encoding,
      Self::NotFound(_) => ApiErrorKind::NotFound,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates an invalid JSON error
  #[must_use]
  pub fn invalid_json(message: impl Into<String>) -> Self {
    Self::InvalidJson(message.into())
  }

  /// Creates a text length error
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// Creates an analysis error
  #[must_use]
  pub fn analysis(message: impl Into<String>) -> Self {
    Self::Analysis(message.into())
  }

  /// Creates an encoding error
  #[must_use]
  pub fn encoding(message: impl Into<String>) -> Self {
    Self::Encoding(message.into())
  }

  /// Creates a not found error
  #[must_use]
  pub fn not_found(path: impl Into<String>) -> Self {
    Self::NotFound(path.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON shape of an error response
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// Maps analyzer failures to the API layer
///
/// Every analyzer error is reported as an analysis failure, including
/// input the analyzer refuses (blank text).
impl From<AnalyzerError> for ApiError {
  fn from(err: AnalyzerError) -> Self {
    ApiError::analysis(err.to_string())
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
