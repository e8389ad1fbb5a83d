// crates/prosa/src/config.rs

//! Per-document pipeline switches.

/// Selects which analysis stages run for a document.
///
/// Stages depend on each other: entity extraction needs POS tags and tagging
/// needs tokens. [`normalized`](Self::normalized) switches on whatever an
/// enabled stage requires, so callers only ask for what they want to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOptions {
  /// Split the text into tokens
  pub tokenize: bool,
  /// Assign a part-of-speech tag to every token
  pub tag: bool,
  /// Split the text into sentences
  pub segment: bool,
  /// Extract named entities (and IOB labels on tokens)
  pub extract: bool,
}

impl Default for DocumentOptions {
  fn default() -> Self {
    Self::all()
  }
}

impl DocumentOptions {
  /// Every stage enabled
  #[must_use]
  pub const fn all() -> Self {
    Self {
      tokenize: true,
      tag: true,
      segment: true,
      extract: true,
    }
  }

  /// Every stage disabled
  #[must_use]
  pub const fn none() -> Self {
    Self {
      tokenize: false,
      tag: false,
      segment: false,
      extract: false,
    }
  }

  /// Enables sentence segmentation
  #[must_use]
  pub const fn with_segment(mut self) -> Self {
    self.segment = true;
    self
  }

  /// Enables entity extraction
  #[must_use]
  pub const fn with_extract(mut self) -> Self {
    self.extract = true;
    self
  }

  /// Enables POS tagging
  #[must_use]
  pub const fn with_tag(mut self) -> Self {
    self.tag = true;
    self
  }

  /// Returns a copy with stage dependencies switched on.
  ///
  /// - `extract` implies `tag`
  /// - `tag` implies `tokenize`
  /// - `segment` works on tokens, so it also implies `tokenize`
  #[must_use]
  pub const fn normalized(self) -> Self {
    let tag = self.tag || self.extract;
    Self {
      tokenize: self.tokenize || tag || self.segment,
      tag,
      segment: self.segment,
      extract: self.extract,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_enables_everything() {
    assert_eq!(DocumentOptions::default(), DocumentOptions::all());
  }

  #[test]
  fn extract_pulls_in_tag_and_tokenize() {
    let opts = DocumentOptions::none().with_extract().normalized();
    assert!(opts.extract);
    assert!(opts.tag);
    assert!(opts.tokenize);
    assert!(!opts.segment);
  }

  #[test]
  fn segment_only_needs_tokens() {
    let opts = DocumentOptions::none().with_segment().normalized();
    assert!(opts.segment);
    assert!(opts.tokenize);
    assert!(!opts.tag);
    assert!(!opts.extract);
  }

  #[test]
  fn none_stays_none() {
    assert_eq!(DocumentOptions::none().normalized(), DocumentOptions::none());
  }
}
