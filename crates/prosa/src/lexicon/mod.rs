//! Lexicon module
//!
//! Word lists consulted by the tokenizer, tagger and entity chunker. The tables
//! are compiled into the binary and indexed once on first use.

mod tables;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Indexed view over the built-in word lists
pub struct Lexicon {
  closed_class: HashMap<&'static str, &'static str>,
  verb_bases: HashSet<&'static str>,
  abbreviations: HashSet<&'static str>,
  titles: HashSet<&'static str>,
  first_names: HashSet<&'static str>,
  places: HashSet<&'static str>,
  demonyms: HashSet<&'static str>,
  organizations: HashSet<&'static str>,
  org_suffixes: HashSet<&'static str>,
  org_heads: HashSet<&'static str>,
}

/// Longest stem (without the final period) still considered an abbreviation
const MAX_ABBREVIATION_LEN: usize = 16;

/// Process-wide lexicon (initialized only once)
static LEXICON: OnceLock<Lexicon> = OnceLock::new();

impl Lexicon {
  /// Returns the shared lexicon, building the indexes on the first call
  pub fn global() -> &'static Lexicon {
    LEXICON.get_or_init(Self::build)
  }

  fn build() -> Self {
    Self {
      closed_class: tables::CLOSED_CLASS.iter().copied().collect(),
      verb_bases: tables::VERB_BASES.iter().copied().collect(),
      abbreviations: tables::ABBREVIATIONS.iter().copied().collect(),
      titles: tables::TITLES.iter().copied().collect(),
      first_names: tables::FIRST_NAMES.iter().copied().collect(),
      places: tables::PLACES.iter().copied().collect(),
      demonyms: tables::DEMONYMS.iter().copied().collect(),
      organizations: tables::ORGANIZATIONS.iter().copied().collect(),
      org_suffixes: tables::ORG_SUFFIXES.iter().copied().collect(),
      org_heads: tables::ORG_HEADS.iter().copied().collect(),
    }
  }

  /// Tag of a closed-class or high-frequency word (`lower` must be lowercase)
  pub fn closed_class_tag(&self, lower: &str) -> Option<&'static str> {
    self.closed_class.get(lower).copied()
  }

  /// Whether `lower` is the base form of a known verb
  pub fn is_verb_base(&self, lower: &str) -> bool {
    self.verb_bases.contains(lower)
  }

  /// Returns the base form if `lower` is a known verb inflected with `suffix`.
  ///
  /// Handles the plain suffix (`walks`), a dropped final `e` (`lived`, `living`)
  /// and a doubled final consonant (`planned`, `running`).
  pub fn verb_base_of(&self, lower: &str, suffix: &str) -> Option<String> {
    let stem = lower.strip_suffix(suffix)?;
    if stem.is_empty() {
      return None;
    }
    if self.is_verb_base(stem) {
      return Some(stem.to_string());
    }
    let with_e = format!("{stem}e");
    if self.is_verb_base(&with_e) {
      return Some(with_e);
    }
    let bytes = stem.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
      let undoubled = &stem[..stem.len() - 1];
      if self.is_verb_base(undoubled) {
        return Some(undoubled.to_string());
      }
    }
    None
  }

  /// Whether `word` (with or without its trailing period) is an abbreviation
  /// that keeps its period.
  ///
  /// Besides the fixed list this accepts single-letter initials (`J.`) and
  /// dotted letter sequences (`U.S.A.`).
  pub fn is_abbreviation(&self, word: &str) -> bool {
    let Some(stem) = word.strip_suffix('.') else {
      return false;
    };
    if stem.is_empty() || stem.len() > MAX_ABBREVIATION_LEN {
      return false;
    }
    if self.abbreviations.contains(stem.to_ascii_lowercase().as_str()) {
      return true;
    }
    stem.split('.').all(|part| {
      let mut chars = part.chars();
      matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    })
  }

  /// Whether `lower` (period already stripped) is a personal title
  pub fn is_title(&self, lower: &str) -> bool {
    self.titles.contains(lower)
  }

  /// Whether `lower` is a common given name
  pub fn is_first_name(&self, lower: &str) -> bool {
    self.first_names.contains(lower)
  }

  /// Whether `lower` names a known place
  pub fn is_place(&self, lower: &str) -> bool {
    self.places.contains(lower)
  }

  /// Whether `lower` is a nationality adjective or its plural (`dutch`, `americans`)
  pub fn is_demonym(&self, lower: &str) -> bool {
    self.demonyms.contains(lower)
      || lower.strip_suffix('s').is_some_and(|singular| self.demonyms.contains(singular))
  }

  /// Whether `lower` names a known organisation
  pub fn is_organization(&self, lower: &str) -> bool {
    self.organizations.contains(lower)
  }

  /// Whether `lower` (period already stripped) ends organisation names
  pub fn is_org_suffix(&self, lower: &str) -> bool {
    self.org_suffixes.contains(lower)
  }

  /// Whether `lower` starts organisation names
  pub fn is_org_head(&self, lower: &str) -> bool {
    self.org_heads.contains(lower)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn abbreviations_keep_their_period() {
    let lex = Lexicon::global();
    assert!(lex.is_abbreviation("Mr."));
    assert!(lex.is_abbreviation("etc."));
    assert!(lex.is_abbreviation("U.S."));
    assert!(lex.is_abbreviation("J."));
    assert!(lex.is_abbreviation("U.S.A."));
    assert!(!lex.is_abbreviation("Dutch."));
    assert!(!lex.is_abbreviation("Mr"));
    assert!(!lex.is_abbreviation("."));
  }

  #[test]
  fn long_dotted_words_are_not_abbreviations() {
    let lex = Lexicon::global();
    let dotted = format!("{}.", vec!["a"; 40].join("."));
    assert!(!lex.is_abbreviation(&dotted));
  }

  #[test]
  fn verb_inflections_resolve_to_base() {
    let lex = Lexicon::global();
    assert_eq!(lex.verb_base_of("walks", "s").as_deref(), Some("walk"));
    assert_eq!(lex.verb_base_of("lived", "d").as_deref(), Some("live"));
    assert_eq!(lex.verb_base_of("living", "ing").as_deref(), Some("live"));
    assert_eq!(lex.verb_base_of("running", "ing").as_deref(), Some("run"));
    assert_eq!(lex.verb_base_of("planned", "ed").as_deref(), Some("plan"));
    assert_eq!(lex.verb_base_of("tables", "s"), None);
  }

  #[test]
  fn demonym_plurals() {
    let lex = Lexicon::global();
    assert!(lex.is_demonym("dutch"));
    assert!(lex.is_demonym("americans"));
    assert!(!lex.is_demonym("paris"));
  }

  #[test]
  fn closed_class_lookup() {
    let lex = Lexicon::global();
    assert_eq!(lex.closed_class_tag("is"), Some("VBZ"));
    assert_eq!(lex.closed_class_tag("the"), Some("DT"));
    assert_eq!(lex.closed_class_tag("zebra"), None);
  }
}
