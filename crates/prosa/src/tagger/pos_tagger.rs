//! Part-of-speech tagging with the Penn Treebank tag set
//!
//! Tagging runs in two passes:
//! 1. a lexical pass that looks at each token in isolation (lexicon, shape, suffix)
//! 2. a contextual pass that repairs common noun/verb confusions from neighbouring tags

use tracing::debug;

use crate::lexicon::Lexicon;
use crate::models::DocToken;
use crate::segmenter::sentence_starts;

/// Forms of "be"
const BE_FORMS: &[&str] = &["be", "is", "am", "are", "was", "were", "been", "being", "'re", "'m"];

/// Forms of "have"
const HAVE_FORMS: &[&str] = &["have", "has", "had", "having", "'ve"];

/// Adverbs allowed between an auxiliary and a past form ("has not yet really finished")
const MAX_ADVERBS_BEFORE_PARTICIPLE: usize = 3;

/// Rule-based POS tagger
///
/// Stateless and deterministic: the same tokens always receive the same tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosTagger;

impl PosTagger {
  /// Creates a tagger
  #[must_use]
  pub fn new() -> Self {
    Self
  }

  /// Writes a tag into every token of `tokens` (which must come from `text`)
  pub fn tag(&self, text: &str, tokens: &mut [DocToken]) {
    let lexicon = Lexicon::global();

    let starts = sentence_starts(text, tokens);
    for (i, &sentence_start) in starts.iter().enumerate() {
      let tag = lexical_tag(lexicon, tokens, i, sentence_start);
      tokens[i].tag = tag.to_string();
    }

    repair_in_context(lexicon, tokens);

    debug!(token_count = tokens.len(), "POS tagging completed");
  }
}

/// Tag from the token alone (plus its neighbours' positions for quotes)
fn lexical_tag(
  lexicon: &Lexicon,
  tokens: &[DocToken],
  i: usize,
  sentence_start: bool,
) -> &'static str {
  let word = tokens[i].text.as_str();

  if let Some(tag) = punctuation_tag(tokens, i) {
    return tag;
  }
  if is_number(word) {
    return "CD";
  }

  let lower = word.to_lowercase();
  let capitalized = word.chars().next().is_some_and(char::is_uppercase);

  if capitalized {
    return capitalized_tag(lexicon, word, &lower, sentence_start);
  }

  if let Some(tag) = lexicon.closed_class_tag(&lower) {
    return tag;
  }
  if lexicon.is_verb_base(&lower) {
    return "VB";
  }
  if lexicon.is_demonym(&lower) {
    return "JJ";
  }
  suffix_tag(lexicon, &lower)
}

fn capitalized_tag(
  lexicon: &Lexicon,
  word: &str,
  lower: &str,
  sentence_start: bool,
) -> &'static str {
  let stripped = lower.trim_end_matches('.');

  // "I" is the only capitalized pronoun
  if word == "I" {
    return "PRP";
  }
  // acronyms ("NASA", "U.S.")
  if word.chars().filter(|c| c.is_alphabetic()).count() >= 2
    && word.chars().all(|c| c.is_uppercase() || c == '.' || c == '&')
  {
    return "NNP";
  }
  if lexicon.is_demonym(lower) {
    let plural = lower.strip_suffix('s').is_some_and(|singular| lexicon.is_demonym(singular));
    return if plural { "NNPS" } else { "JJ" };
  }
  if lexicon.is_title(stripped)
    || lexicon.is_first_name(lower)
    || lexicon.is_place(lower)
    || lexicon.is_organization(lower)
    || lexicon.is_org_suffix(stripped)
  {
    return "NNP";
  }

  if sentence_start {
    if let Some(tag) = lexicon.closed_class_tag(lower) {
      return tag;
    }
    if lexicon.is_verb_base(lower) {
      return "VB";
    }
    let guess = suffix_tag(lexicon, lower);
    if guess != "NN" {
      return guess;
    }
  }

  "NNP"
}

/// Tags for punctuation and symbols
fn punctuation_tag(tokens: &[DocToken], i: usize) -> Option<&'static str> {
  let tag = match tokens[i].text.as_str() {
    "." | "!" | "?" => ".",
    "," => ",",
    ":" | ";" | "..." | "…" | "-" | "--" | "—" | "–" => ":",
    "(" | "[" | "{" => "(",
    ")" | "]" | "}" => ")",
    "“" | "‘" | "`" | "``" | "«" => "``",
    "”" | "’" | "''" | "»" => "''",
    "\"" | "'" => {
      // straight quotes: opening when glued to the next token but not to the previous one
      let glued_next = tokens.get(i + 1).is_some_and(|next| next.start == tokens[i].end);
      let glued_prev = i > 0 && tokens[i - 1].end == tokens[i].start;
      if glued_next && !glued_prev { "``" } else { "''" }
    }
    "$" | "€" | "£" | "¥" => "$",
    "#" => "#",
    other if other.chars().all(|c| !c.is_alphanumeric()) => "SYM",
    _ => return None,
  };
  Some(tag)
}

/// Whether the token is numeric ("42", "3.14", "1,000", "1990s", "50%")
fn is_number(word: &str) -> bool {
  let mut chars = word.chars();
  chars.next().is_some_and(|c| c.is_ascii_digit())
    && word.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%' | 's' | ':' | '/'))
}

/// Guess for an unknown lowercase word from its ending
fn suffix_tag(lexicon: &Lexicon, lower: &str) -> &'static str {
  let len = lower.chars().count();

  if lower.contains('-') {
    return "JJ";
  }
  if len > 4 && lower.ends_with("ing") {
    return "VBG";
  }
  if len > 3 && lower.ends_with("ed") {
    return "VBD";
  }
  if len > 3 && lower.ends_with("ly") {
    return "RB";
  }
  const ADJ_SUFFIXES: &[&str] =
    &["ous", "ful", "ive", "able", "ible", "ical", "less", "ish", "ic", "al"];
  if len > 4 && ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
    return "JJ";
  }
  if len > 5 && lower.ends_with("est") {
    return "JJS";
  }
  const NOUN_SUFFIXES: &[&str] =
    &["tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "ism", "ist"];
  if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
    return "NN";
  }
  if is_verb_inflection(lexicon, lower) {
    // "lives", "goes": plural noun until context says otherwise
    return "NNS";
  }
  if len > 3 && lower.ends_with('s') && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s)) {
    return "NNS";
  }
  "NN"
}

/// Whether `lower` is a known verb with a third-person "-s"/"-es" ending
fn is_verb_inflection(lexicon: &Lexicon, lower: &str) -> bool {
  lexicon.verb_base_of(lower, "s").is_some() || lexicon.verb_base_of(lower, "es").is_some()
}

fn lower_of(token: &DocToken) -> String {
  token.text.to_lowercase()
}

/// Contextual repair pass (left to right, each rule sees already-repaired tags)
fn repair_in_context(lexicon: &Lexicon, tokens: &mut [DocToken]) {
  for i in 0..tokens.len() {
    let lower = lower_of(&tokens[i]);
    let prev_tag = if i > 0 { tokens[i - 1].tag.clone() } else { String::new() };
    let prev_lower = if i > 0 { lower_of(&tokens[i - 1]) } else { String::new() };
    let next_tag = tokens.get(i + 1).map(|t| t.tag.clone()).unwrap_or_default();
    let next_lower = tokens.get(i + 1).map(lower_of).unwrap_or_default();
    let current = tokens[i].tag.clone();

    let repaired: Option<&'static str> = match current.as_str() {
      // "'s": verb after pronouns or before verb-like words, otherwise possessive
      _ if lower == "'s" || lower == "’s" => {
        if matches!(prev_tag.as_str(), "PRP" | "WP" | "EX" | "WDT" | "DT")
          || matches!(next_tag.as_str(), "DT" | "VBG" | "VBN" | "RB" | "IN" | "PRP")
        {
          Some("VBZ")
        } else {
          Some("POS")
        }
      }
      // "like" as a verb ("they like", "doesn't like")
      "IN" if lower == "like" && matches!(prev_tag.as_str(), "MD" | "TO" | "RB") => Some("VB"),
      "IN" if lower == "like" && matches!(prev_tag.as_str(), "PRP" | "NNS") => Some("VBP"),
      // existential "there"
      "RB" if lower == "there" && BE_FORMS.contains(&next_lower.as_str()) => Some("EX"),
      // "to"/modal + verb base
      "NN" | "VBP" | "JJ"
        if (prev_tag == "TO" || prev_tag == "MD") && lexicon.is_verb_base(&lower) =>
      {
        Some("VB")
      }
      "VBP" if prev_tag == "MD" || prev_tag == "TO" => Some("VB"),
      // determiner/possessive + verb-looking word is a noun ("the work")
      "VB" | "VBP" if matches!(prev_tag.as_str(), "DT" | "PRP$" | "JJ" | "POS") => Some("NN"),
      // participle after a determiner is an adjective ("the fixed price")
      "VBD" | "VBN" if matches!(prev_tag.as_str(), "DT" | "PRP$") => Some("JJ"),
      // perfect and passive: have/be (+ adverb) + past form
      "VBD" if follows_auxiliary(tokens, i) => Some("VBN"),
      // subject + verb base is a present-tense verb ("they work")
      "VB" if matches!(prev_tag.as_str(), "PRP" | "NNS" | "NNPS" | "WP" | "WDT")
        && !matches!(prev_lower.as_str(), "me" | "him" | "us" | "them") =>
      {
        Some("VBP")
      }
      // singular subject + "-s" verb ("Ian lives")
      "NNS" if matches!(prev_tag.as_str(), "PRP" | "NNP" | "NN" | "WDT" | "WP" | "RB")
        && is_verb_inflection(lexicon, &lower) =>
      {
        Some("VBZ")
      }
      _ => None,
    };

    if let Some(tag) = repaired {
      tokens[i].tag = tag.to_string();
    }
  }
}

/// Whether a have/be form precedes `tokens[i]`, allowing adverbs in between
fn follows_auxiliary(tokens: &[DocToken], i: usize) -> bool {
  let mut j = i;
  while j > 0 && i - j <= MAX_ADVERBS_BEFORE_PARTICIPLE {
    j -= 1;
    let lower = lower_of(&tokens[j]);
    if BE_FORMS.contains(&lower.as_str()) || HAVE_FORMS.contains(&lower.as_str()) {
      return true;
    }
    if tokens[j].tag != "RB" {
      return false;
    }
  }
  false
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokenizer::WordTokenizer;

  fn tagged(text: &str) -> Vec<(String, String)> {
    let mut tokens = WordTokenizer::new().tokenize(text);
    PosTagger::new().tag(text, &mut tokens);
    tokens.into_iter().map(|t| (t.text, t.tag)).collect()
  }

  fn tags(text: &str) -> Vec<String> {
    tagged(text).into_iter().map(|(_, tag)| tag).collect()
  }

  #[test]
  fn tags_simple_sentence() {
    assert_eq!(tags("Ian is Dutch."), vec!["NNP", "VBZ", "JJ", "."]);
  }

  #[test]
  fn sentence_initial_function_words_use_lexicon() {
    assert_eq!(tags("The dog barked."), vec!["DT", "NN", "VBD", "."]);
  }

  #[test]
  fn third_person_verb_after_name() {
    assert_eq!(tags("Ian lives in Utrecht."), vec!["NNP", "VBZ", "IN", "NNP", "."]);
  }

  #[test]
  fn infinitive_and_modal() {
    assert_eq!(tags("I want to travel"), vec!["PRP", "VBP", "TO", "VB"]);
    assert_eq!(tags("We will work"), vec!["PRP", "MD", "VB"]);
  }

  #[test]
  fn noun_after_determiner() {
    assert_eq!(tags("the work"), vec!["DT", "NN"]);
  }

  #[test]
  fn perfect_participle() {
    assert_eq!(tags("they have already walked"), vec!["PRP", "VBP", "RB", "VBN"]);
  }

  #[test]
  fn possessive_and_contracted_is() {
    let tagged = tagged("Ian's dog said it's late");
    assert_eq!(tagged[1], ("'s".to_string(), "POS".to_string()));
    assert_eq!(tagged[5], ("'s".to_string(), "VBZ".to_string()));
  }

  #[test]
  fn punctuation_and_numbers() {
    assert_eq!(
      tags("\"It costs $5, or 3.5%.\""),
      vec!["``", "PRP", "NNS", "$", "CD", ",", "CC", "CD", ".", "''"]
    );
  }

  #[test]
  fn existential_there() {
    assert_eq!(tags("there is hope")[0], "EX");
  }

  #[test]
  fn acronyms_are_proper_nouns() {
    assert_eq!(tags("NASA launched it")[0], "NNP");
  }
}
