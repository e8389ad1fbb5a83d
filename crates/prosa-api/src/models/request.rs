//! Request model definition

use axum::{
  body::Bytes,
  extract::{FromRequest, Request},
  http::StatusCode,
};
use serde_json::Value;

use crate::config::MAX_TEXT_LENGTH;
use crate::errors::ApiError;

/// Body of `POST /tokens`, `/entities` and `/sentences`
///
/// Only `text` is read. Other fields are ignored and the `Content-Type`
/// header is not checked, so clients that send JSON as `text/plain` work too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
  /// Text to analyze
  pub text: String,
}

impl AnalysisRequest {
  /// Parses a raw request body
  ///
  /// # Errors
  /// - Parse error if the body is not a JSON object with a string `text`
  /// - `TextTooLong` if `text` exceeds [`MAX_TEXT_LENGTH`]
  pub fn from_body(body: &[u8]) -> crate::errors::Result<Self> {
    let value: Value =
      serde_json::from_slice(body).map_err(|e| ApiError::invalid_json(e.to_string()))?;

    let Value::Object(mut fields) = value else {
      return Err(ApiError::NotAnObject);
    };

    let text = match fields.remove("text") {
      Some(Value::String(text)) => text,
      Some(other) => return Err(ApiError::TextNotString(json_type_name(&other))),
      None => return Err(ApiError::MissingText),
    };

    if text.len() > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text.len(), MAX_TEXT_LENGTH));
    }

    Ok(Self { text })
  }
}

fn json_type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

impl<S> FromRequest<S> for AnalysisRequest
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let body = Bytes::from_request(req, state).await.map_err(|rejection| {
      if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
      } else {
        ApiError::invalid_json(rejection.body_text())
      }
    })?;

    Self::from_body(&body)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_text_field() {
    let req = AnalysisRequest::from_body(br#"{"text": "Ian is Dutch."}"#).unwrap();
    assert_eq!(req.text, "Ian is Dutch.");
  }

  #[test]
  fn ignores_unknown_fields() {
    let req = AnalysisRequest::from_body(br#"{"text": "hi", "lang": "en"}"#).unwrap();
    assert_eq!(req.text, "hi");
  }

  #[test]
  fn empty_text_is_accepted_here() {
    let req = AnalysisRequest::from_body(br#"{"text": ""}"#).unwrap();
    assert_eq!(req.text, "");
  }

  #[test]
  fn malformed_json_is_parse_error() {
    let err = AnalysisRequest::from_body(b"{\"text\": ").unwrap_err();
    assert!(matches!(err, ApiError::InvalidJson(_)));
  }

  #[test]
  fn non_object_is_parse_error() {
    assert!(matches!(AnalysisRequest::from_body(b"[1, 2]").unwrap_err(), ApiError::NotAnObject));
    assert!(matches!(AnalysisRequest::from_body(b"\"text\"").unwrap_err(), ApiError::NotAnObject));
  }

  #[test]
  fn missing_text_is_parse_error() {
    let err = AnalysisRequest::from_body(br#"{"body": "x"}"#).unwrap_err();
    assert!(matches!(err, ApiError::MissingText));
  }

  #[test]
  fn mistyped_text_is_parse_error() {
    let err = AnalysisRequest::from_body(br#"{"text": 42}"#).unwrap_err();
    assert!(matches!(err, ApiError::TextNotString("number")));

    let err = AnalysisRequest::from_body(br#"{"text": null}"#).unwrap_err();
    assert!(matches!(err, ApiError::TextNotString("null")));
  }

  #[test]
  fn overlong_text_is_rejected() {
    let body = serde_json::json!({ "text": "a".repeat(MAX_TEXT_LENGTH + 1) }).to_string();
    let err = AnalysisRequest::from_body(body.as_bytes()).unwrap_err();
    let ApiError::TextTooLong(len, max) = err else {
      panic!("expected TextTooLong, got {err:?}");
    };
    assert_eq!(len, MAX_TEXT_LENGTH + 1);
    assert_eq!(max, MAX_TEXT_LENGTH);
  }
}
