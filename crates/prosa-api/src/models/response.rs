//! Response model definition

use axum::{
  http::{HeaderValue, header},
  response::{IntoResponse, Response},
};
use serde::Serialize;

use prosa::{DocEntity, DocSentence, DocToken};

use crate::errors::ApiError;

/// One element of the `POST /tokens` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenDto {
  /// Penn Treebank tag
  pub tag: String,
  /// Surface form
  pub text: String,
  /// IOB entity label
  pub label: String,
}

impl From<DocToken> for TokenDto {
  fn from(token: DocToken) -> Self {
    Self {
      tag: token.tag,
      text: token.text,
      label: token.label,
    }
  }
}

/// One element of the `POST /entities` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityDto {
  /// Mention text
  pub text: String,
  /// Entity type
  pub label: String,
}

impl From<DocEntity> for EntityDto {
  fn from(entity: DocEntity) -> Self {
    Self {
      text: entity.text,
      label: entity.label,
    }
  }
}

/// One element of the `POST /sentences` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceDto {
  /// Sentence text
  pub text: String,
}

impl From<DocSentence> for SentenceDto {
  fn from(sentence: DocSentence) -> Self {
    Self { text: sentence.text }
  }
}

/// `GET /health` response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
  /// Always `"UP"` while the process serves requests
  pub status: &'static str,
}

impl HealthStatus {
  /// The only status this server reports
  pub const UP: Self = Self { status: "UP" };
}

/// Serializes `value` into a `200 OK` JSON response
///
/// # Errors
/// Returns an encoding error if serialization fails
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> crate::errors::Result<Response> {
  let body = serde_json::to_vec(value).map_err(|e| ApiError::encoding(e.to_string()))?;
  Ok(
    (
      [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
      body,
    )
      .into_response(),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn token_dto_field_order() {
    let mut token = DocToken::new("Ian", 0, 3);
    token.tag = "NNP".to_string();
    token.label = "B-PERSON".to_string();

    let json = serde_json::to_string(&TokenDto::from(token)).unwrap();
    assert_eq!(json, r#"{"tag":"NNP","text":"Ian","label":"B-PERSON"}"#);
  }

  #[test]
  fn entity_dto_drops_offsets() {
    let entity = DocEntity {
      text: "Utrecht".to_string(),
      label: "GPE".to_string(),
      start: 10,
      end: 17,
    };
    let json = serde_json::to_string(&EntityDto::from(entity)).unwrap();
    assert_eq!(json, r#"{"text":"Utrecht","label":"GPE"}"#);
  }

  #[test]
  fn health_status_json() {
    assert_eq!(serde_json::to_string(&HealthStatus::UP).unwrap(), r#"{"status":"UP"}"#);
  }

  #[tokio::test]
  async fn empty_list_encodes_as_array() {
    let response = encode_json::<[SentenceDto]>(&[]).unwrap();
    assert_eq!(
      response.headers().get(header::CONTENT_TYPE).unwrap(),
      "application/json"
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"[]");
  }
}
