// crates/prosa/src/analyzer.rs

//! DocumentAnalyzer: the analysis interface of the prosa crate.
//!
//! - [`DocumentAnalyzer`] is the seam that callers (such as the HTTP server) depend on
//! - [`ProseAnalyzer`] is the built-in rule-based English implementation
//!
//! A caller that only needs the interface can plug in any other engine.

use tracing::debug;

use crate::config::DocumentOptions;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::models::{DocToken, Document};
use crate::ner::EntityChunker;
use crate::segmenter::SentenceSegmenter;
use crate::tagger::PosTagger;
use crate::tokenizer::WordTokenizer;

/// Turns raw text into a [`Document`]
///
/// Implementations must be deterministic for a given `(text, options)` pair and
/// must report unusable input as an [`AnalyzerError`] instead of returning an
/// empty document.
pub trait DocumentAnalyzer: Send + Sync {
  /// Analyzes `text`, running the stages selected by `options`
  ///
  /// # Errors
  /// - `InvalidInput` if the text cannot be analyzed (empty, whitespace only, NUL bytes)
  /// - `Internal` if a stage breaks its own invariants
  fn analyze(&self, text: &str, options: DocumentOptions) -> AnalyzerResult<Document>;
}

/// Rule-based English analyzer
///
/// Pipeline: [`WordTokenizer`] → [`PosTagger`] → [`EntityChunker`], with
/// [`SentenceSegmenter`] running over the same tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProseAnalyzer {
  tokenizer: WordTokenizer,
  tagger: PosTagger,
  segmenter: SentenceSegmenter,
  chunker: EntityChunker,
}

impl ProseAnalyzer {
  /// Creates the analyzer
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Rejects input that cannot form a document
  fn validate(text: &str) -> AnalyzerResult<()> {
    if text.trim().is_empty() {
      return Err(AnalyzerError::invalid_input("text is empty"));
    }
    if text.contains('\0') {
      return Err(AnalyzerError::invalid_input("text contains NUL characters"));
    }
    Ok(())
  }
}

impl DocumentAnalyzer for ProseAnalyzer {
  fn analyze(&self, text: &str, options: DocumentOptions) -> AnalyzerResult<Document> {
    Self::validate(text)?;

    let options = options.normalized();
    let mut document = Document::default();

    if !options.tokenize {
      return Ok(document);
    }

    let mut tokens = self.tokenizer.tokenize(text);
    check_spans(text, &tokens)?;

    if options.tag {
      self.tagger.tag(text, &mut tokens);
    }
    if options.extract {
      document.entities = self.chunker.extract(text, &mut tokens);
    }
    if options.segment {
      document.sentences = self.segmenter.segment(text, &tokens);
    }

    debug!(
      text_len = text.len(),
      tokens = tokens.len(),
      sentences = document.sentences.len(),
      entities = document.entities.len(),
      "Document analysis completed"
    );

    document.tokens = tokens;
    Ok(document)
  }
}

/// Every token must be the exact source slice it claims to cover
fn check_spans(text: &str, tokens: &[DocToken]) -> AnalyzerResult<()> {
  for token in tokens {
    if text.get(token.start..token.end) != Some(token.text.as_str()) {
      return Err(AnalyzerError::internal(format!(
        "token {:?} does not match source range {}..{}",
        token.text, token.start, token.end
      )));
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_blank_text() {
    let analyzer = ProseAnalyzer::new();
    for text in ["", "   ", "\n\t"] {
      let err = analyzer.analyze(text, DocumentOptions::all()).unwrap_err();
      assert!(matches!(err, AnalyzerError::InvalidInput { .. }), "{text:?}");
    }
  }

  #[test]
  fn rejects_nul() {
    let err = ProseAnalyzer::new().analyze("a\0b", DocumentOptions::all()).unwrap_err();
    assert!(matches!(err, AnalyzerError::InvalidInput { .. }));
  }

  #[test]
  fn disabled_stages_stay_empty() {
    let doc = ProseAnalyzer::new()
      .analyze("Ian is Dutch. He lives here.", DocumentOptions::none().with_segment())
      .unwrap();
    assert_eq!(doc.sentences.len(), 2);
    assert!(doc.entities.is_empty());
    assert!(doc.tokens.iter().all(|t| t.tag.is_empty() && t.label.is_empty()));
  }

  #[test]
  fn nothing_requested_yields_empty_document() {
    let doc = ProseAnalyzer::new().analyze("Ian is Dutch.", DocumentOptions::none()).unwrap();
    assert_eq!(doc, Document::default());
  }

  #[test]
  fn span_check_detects_mismatch() {
    let tokens = vec![DocToken::new("Ian", 0, 2)];
    assert!(matches!(
      check_spans("Ian", &tokens),
      Err(AnalyzerError::Internal { .. })
    ));
  }
}
