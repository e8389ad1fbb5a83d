//! Error definitions

use thiserror::Error;

/// Errors reported by a [`DocumentAnalyzer`](crate::analyzer::DocumentAnalyzer).
///
/// A failed analysis never carries partial results: callers get either a whole
/// [`Document`](crate::models::Document) or one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalyzerError {
  /// The input text cannot be turned into a document
  #[error("input text cannot be analyzed: {reason}")]
  InvalidInput {
    /// Why the input was rejected
    reason: String,
  },

  /// An internal stage broke one of its own invariants
  #[error("analyzer internal error: {reason}")]
  Internal {
    /// What went wrong
    reason: String,
  },
}

impl AnalyzerError {
  /// Creates an `InvalidInput` error
  #[must_use]
  pub fn invalid_input(reason: impl Into<String>) -> Self {
    Self::InvalidInput {
      reason: reason.into(),
    }
  }

  /// Creates an `Internal` error
  #[must_use]
  pub fn internal(reason: impl Into<String>) -> Self {
    Self::Internal {
      reason: reason.into(),
    }
  }
}

/// Standard result alias of the prosa crate
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_input_message_contains_reason() {
    let err = AnalyzerError::invalid_input("text is empty");
    assert_eq!(
      err,
      AnalyzerError::InvalidInput {
        reason: "text is empty".to_string()
      }
    );
    assert!(err.to_string().contains("text is empty"));
  }

  #[test]
  fn internal_message_contains_reason() {
    let err = AnalyzerError::internal("span out of range");
    assert!(err.to_string().starts_with("analyzer internal error"));
  }
}
