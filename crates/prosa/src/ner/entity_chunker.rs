//! Named-entity extraction over tagged tokens
//!
//! Proper-noun runs are grouped into mentions, classified with the built-in
//! gazetteers and a few surface cues, and written back onto the tokens as IOB
//! labels (`B-PERSON`, `I-PERSON`, `O`, ...).

use tracing::debug;

use crate::lexicon::Lexicon;
use crate::models::{DocEntity, DocToken, EntityKind, OUTSIDE_LABEL};
use crate::segmenter::sentence_starts;

/// Words allowed inside a name when both sides are proper nouns ("Bank of America")
const CONNECTORS: &[&str] = &["of", "&"];

/// Most connectors one mention may span ("Bank of the Republic of Utrecht")
const MAX_CONNECTORS: usize = 2;

/// Gazetteer- and cue-based entity chunker
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityChunker;

impl EntityChunker {
  /// Creates a chunker
  #[must_use]
  pub fn new() -> Self {
    Self
  }

  /// Labels `tokens` (already POS-tagged, from `text`) and returns the entity
  /// mentions in source order.
  pub fn extract(&self, text: &str, tokens: &mut [DocToken]) -> Vec<DocEntity> {
    let lexicon = Lexicon::global();
    let starts = sentence_starts(text, tokens);

    for token in tokens.iter_mut() {
      token.label = OUTSIDE_LABEL.to_string();
    }

    let mut entities = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
      if !is_candidate(lexicon, &tokens[i]) {
        i += 1;
        continue;
      }

      let mut end = run_end(lexicon, tokens, i);
      let mut start = i;

      // titles announce a person but are not part of the mention
      let mut person_hint = false;
      while start < end && is_title(lexicon, &tokens[start]) {
        person_hint = true;
        start += 1;
      }
      if start == end {
        i = end;
        continue;
      }

      // a sentence-initial word the tagger read as a common word ("New York")
      if start == i && start > 0 && is_capitalized(&tokens[start - 1]) {
        let phrase = phrase_of(&tokens[start - 1..end]);
        if lexicon.is_place(&phrase) || lexicon.is_organization(&phrase) {
          start -= 1;
        }
      }

      let sentence_start = starts[start];
      let mut kind = classify(lexicon, &tokens[start..end], person_hint, sentence_start);

      // "University of Utrecht", "Procter & Gamble"
      let mut connectors = 0;
      while connectors < MAX_CONNECTORS
        && end + 1 < tokens.len()
        && CONNECTORS.contains(&tokens[end].text.to_lowercase().as_str())
        && is_candidate(lexicon, &tokens[end + 1])
      {
        let extended_end = run_end(lexicon, tokens, end + 1);
        match classify(lexicon, &tokens[start..extended_end], person_hint, sentence_start) {
          Some(extended @ (EntityKind::Org | EntityKind::Gpe)) => {
            kind = Some(extended);
            end = extended_end;
            connectors += 1;
          }
          _ => break,
        }
      }

      if let Some(kind) = kind {
        tokens[start].label = kind.begin_label();
        for token in &mut tokens[start + 1..end] {
          token.label = kind.inside_label();
        }
        entities.push(DocEntity {
          text: text[tokens[start].start..tokens[end - 1].end].to_string(),
          label: kind.label().to_string(),
          start: tokens[start].start,
          end: tokens[end - 1].end,
        });
      }

      i = end;
    }

    debug!(entity_count = entities.len(), "Entity extraction completed");

    entities
  }
}

fn is_capitalized(token: &DocToken) -> bool {
  token.text.chars().next().is_some_and(char::is_uppercase)
}

/// Lowercased form without trailing periods ("Inc." -> "inc")
fn normalized(token: &DocToken) -> String {
  token.text.trim_end_matches('.').to_lowercase()
}

fn phrase_of(tokens: &[DocToken]) -> String {
  tokens.iter().map(normalized).collect::<Vec<_>>().join(" ")
}

fn is_demonym(lexicon: &Lexicon, token: &DocToken) -> bool {
  is_capitalized(token) && lexicon.is_demonym(&token.text.to_lowercase())
}

fn is_title(lexicon: &Lexicon, token: &DocToken) -> bool {
  lexicon.is_title(&normalized(token))
}

/// Whether the token can be part of a mention
fn is_candidate(lexicon: &Lexicon, token: &DocToken) -> bool {
  matches!(token.tag.as_str(), "NNP" | "NNPS") || is_demonym(lexicon, token)
}

/// Exclusive end of the candidate run starting at `start`.
///
/// A demonym is always a mention of its own, so "Dutch Prime Minister"
/// yields "Dutch" separately. A title opens a new run ("Acme Corp. Mr. Jansen").
fn run_end(lexicon: &Lexicon, tokens: &[DocToken], start: usize) -> usize {
  if is_demonym(lexicon, &tokens[start]) {
    return start + 1;
  }
  let leading_titles = tokens[start..].iter().take_while(|t| is_title(lexicon, t)).count();
  let mut end = start + leading_titles.max(1);
  while end < tokens.len()
    && is_candidate(lexicon, &tokens[end])
    && !is_demonym(lexicon, &tokens[end])
    && !is_title(lexicon, &tokens[end])
  {
    end += 1;
  }
  end
}

fn is_acronym(token: &DocToken) -> bool {
  token.text.chars().filter(|c| c.is_alphabetic()).count() >= 2
    && token.text.chars().all(|c| c.is_uppercase() || c == '.' || c == '&')
}

/// Decides the entity type of a run, or `None` when it is not a mention
fn classify(
  lexicon: &Lexicon,
  run: &[DocToken],
  person_hint: bool,
  sentence_start: bool,
) -> Option<EntityKind> {
  let words: Vec<String> = run.iter().map(normalized).collect();
  let phrase = words.join(" ");
  let first = words.first()?;
  let last = words.last()?;
  let multi_word = run.len() > 1;

  if lexicon.is_organization(&phrase)
    || (multi_word && (lexicon.is_org_suffix(last) || lexicon.is_org_head(first)))
  {
    return Some(EntityKind::Org);
  }
  if lexicon.is_place(&phrase) || (!multi_word && lexicon.is_demonym(first)) {
    return Some(EntityKind::Gpe);
  }
  if person_hint || lexicon.is_first_name(first) {
    return Some(EntityKind::Person);
  }
  if !multi_word {
    // lone unknown capitalized words are only trusted when they look like acronyms
    return is_acronym(&run[0]).then_some(EntityKind::Org);
  }
  if sentence_start && lexicon.closed_class_tag(first).is_some() {
    return None;
  }
  if run.len() <= 3 {
    Some(EntityKind::Person)
  } else {
    Some(EntityKind::Org)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tagger::PosTagger;
  use crate::tokenizer::WordTokenizer;

  fn analyze(text: &str) -> (Vec<DocToken>, Vec<DocEntity>) {
    let mut tokens = WordTokenizer::new().tokenize(text);
    PosTagger::new().tag(text, &mut tokens);
    let entities = EntityChunker::new().extract(text, &mut tokens);
    (tokens, entities)
  }

  fn pairs(text: &str) -> Vec<(String, String)> {
    analyze(text).1.into_iter().map(|e| (e.text, e.label)).collect()
  }

  fn p(text: &str, label: &str) -> (String, String) {
    (text.to_string(), label.to_string())
  }

  #[test]
  fn person_and_demonym() {
    assert_eq!(pairs("Ian is Dutch."), vec![p("Ian", "PERSON"), p("Dutch", "GPE")]);
  }

  #[test]
  fn iob_labels_on_tokens() {
    let (tokens, _) = analyze("Ian lives in New York.");
    let labels: Vec<&str> = tokens.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["B-PERSON", "O", "O", "B-GPE", "I-GPE", "O"]);
  }

  #[test]
  fn sentence_initial_place() {
    assert_eq!(pairs("New York is big."), vec![p("New York", "GPE")]);
  }

  #[test]
  fn title_marks_person_without_being_included() {
    assert_eq!(pairs("We met Dr. Jansen today."), vec![p("Jansen", "PERSON")]);
  }

  #[test]
  fn title_splits_adjacent_names() {
    assert_eq!(
      pairs("He joined Acme Corp. Mr. Jansen agreed."),
      vec![p("Acme Corp.", "ORG"), p("Jansen", "PERSON")]
    );
  }

  #[test]
  fn organisations_from_suffix_and_connector() {
    assert_eq!(
      pairs("She joined Acme Corp. after leaving the Bank of America."),
      vec![p("Acme Corp.", "ORG"), p("Bank of America", "ORG")]
    );
  }

  #[test]
  fn known_organisation_and_acronym() {
    assert_eq!(
      pairs("Google and NASA signed it."),
      vec![p("Google", "ORG"), p("NASA", "ORG")]
    );
  }

  #[test]
  fn repeated_mentions_are_not_merged() {
    assert_eq!(
      pairs("Paris is nice. I love Paris."),
      vec![p("Paris", "GPE"), p("Paris", "GPE")]
    );
  }

  #[test]
  fn no_entities_in_plain_text() {
    let (tokens, entities) = analyze("the cat sat on the mat.");
    assert!(entities.is_empty());
    assert!(tokens.iter().all(|t| t.label == OUTSIDE_LABEL));
  }
}
