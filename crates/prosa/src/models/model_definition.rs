//! Data Model Definition
use serde::Serialize;

/// IOB label used for tokens outside any entity
pub const OUTSIDE_LABEL: &str = "O";

/// A single token of the analyzed text (word, number or punctuation symbol)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocToken {
  /// Penn Treebank part-of-speech tag (empty when tagging is disabled)
  pub tag: String,
  /// Verbatim surface form
  pub text: String,
  /// IOB entity label: `B-<TYPE>`, `I-<TYPE>`, `O`, or empty when extraction is disabled
  pub label: String,
  /// Start byte offset in the source text
  pub start: usize,
  /// End byte offset in the source text (exclusive)
  pub end: usize,
}

impl DocToken {
  /// Creates an untagged, unlabelled token
  pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
    Self {
      tag: String::new(),
      text: text.into(),
      label: String::new(),
      start,
      end,
    }
  }
}

/// A sentence of the analyzed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocSentence {
  /// Verbatim sentence text (`source[start..end]`)
  pub text: String,
  /// Start byte offset in the source text
  pub start: usize,
  /// End byte offset in the source text (exclusive)
  pub end: usize,
}

/// A named-entity mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocEntity {
  /// Verbatim mention text
  pub text: String,
  /// Entity type, e.g. `PERSON`, `GPE`, `ORG`
  pub label: String,
  /// Start byte offset in the source text
  pub start: usize,
  /// End byte offset in the source text (exclusive)
  pub end: usize,
}

/// Result of analyzing one text
///
/// Tokens and sentences are in source order. Entities follow the order in which
/// they were found, which is also source order for [`ProseAnalyzer`](crate::analyzer::ProseAnalyzer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
  /// Tokens (empty when tokenization is disabled)
  pub tokens: Vec<DocToken>,
  /// Sentences (empty when segmentation is disabled)
  pub sentences: Vec<DocSentence>,
  /// Named entities (empty when extraction is disabled or nothing was found)
  pub entities: Vec<DocEntity>,
}

/// Entity types produced by the built-in chunker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
  /// People, including fictional
  Person,
  /// Geo-political entities: countries, cities, states, and their demonyms
  Gpe,
  /// Companies, agencies, institutions
  Org,
}

impl EntityKind {
  /// Label text used in IOB tags and entity output
  #[must_use]
  pub fn label(&self) -> &'static str {
    match self {
      EntityKind::Person => "PERSON",
      EntityKind::Gpe => "GPE",
      EntityKind::Org => "ORG",
    }
  }

  /// `B-` label for the first token of a mention
  #[must_use]
  pub fn begin_label(&self) -> String {
    format!("B-{}", self.label())
  }

  /// `I-` label for the following tokens of a mention
  #[must_use]
  pub fn inside_label(&self) -> String {
    format!("I-{}", self.label())
  }
}

impl std::fmt::Display for EntityKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.label())
  }
}
