//! models module
pub mod model_definition;

/// Re-export
pub use model_definition::{
  DocEntity, DocSentence, DocToken, Document, EntityKind, OUTSIDE_LABEL,
};
