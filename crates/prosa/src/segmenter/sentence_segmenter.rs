//! Sentence segmentation over a token sequence

use tracing::debug;

use crate::models::{DocSentence, DocToken};

/// Whether the token ends a sentence (`.`, `!`, `?`, `...`, `…`, `?!`)
fn is_terminal(token: &DocToken) -> bool {
  !token.text.is_empty() && token.text.chars().all(|c| matches!(c, '.' | '!' | '?' | '…'))
}

/// Whether the token is an opening quote or bracket
fn is_opener(token: &DocToken) -> bool {
  matches!(token.text.as_str(), "(" | "[" | "{" | "\"" | "'" | "“" | "‘" | "`" | "«")
}

/// Whether the token is a closing quote or bracket
fn is_closer(token: &DocToken) -> bool {
  matches!(token.text.as_str(), ")" | "]" | "}" | "\"" | "'" | "”" | "’" | "»")
}

/// Whether the gap between two byte offsets contains a blank line
fn is_paragraph_break(text: &str, from: usize, to: usize) -> bool {
  text.get(from..to).is_some_and(|gap| gap.matches('\n').nth(1).is_some())
}

/// Sentence-start flag for every token, in one pass over `tokens`.
///
/// A token starts a sentence when it is the first token, follows a blank
/// line, or follows a terminal. Opening quotes and brackets directly before
/// the token are skipped, and closing ones after a terminal are looked
/// through, so `"Stop." He` and `He left. "Go` both start a sentence at the last word.
pub(crate) fn sentence_starts(text: &str, tokens: &[DocToken]) -> Vec<bool> {
  let mut starts = Vec::with_capacity(tokens.len());
  // a terminal, possibly followed by closers, ends right before the current token
  let mut after_terminal = false;
  // flag shared by every token of an opener run and the word after it
  let mut run_starts = true;

  for (i, token) in tokens.iter().enumerate() {
    if i == 0 || !is_opener(&tokens[i - 1]) {
      run_starts = i == 0
        || after_terminal
        || is_paragraph_break(text, tokens[i - 1].end, token.start);
    }
    starts.push(run_starts);
    after_terminal = is_terminal(token) || (is_closer(token) && after_terminal);
  }

  starts
}

/// Splits a token sequence into sentences
///
/// - Boundaries follow terminal punctuation, absorbing any directly attached
///   terminals and closing quotes/brackets (`Really?!"`)
/// - A blank line also ends a sentence
/// - Abbreviations such as `Mr.` are single tokens and never end a sentence
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
  /// Creates a segmenter
  #[must_use]
  pub fn new() -> Self {
    Self
  }

  /// Returns the sentences of `text`, given its tokens, in source order
  pub fn segment(&self, text: &str, tokens: &[DocToken]) -> Vec<DocSentence> {
    let mut sentences = Vec::new();
    let mut first: Option<usize> = None;
    let mut i = 0;

    while i < tokens.len() {
      let start_idx = *first.get_or_insert(i);
      let mut last = i;

      if is_terminal(&tokens[i]) {
        // absorb "?!" and closing quotes glued to the terminal
        while last + 1 < tokens.len()
          && tokens[last + 1].start == tokens[last].end
          && (is_terminal(&tokens[last + 1]) || is_closer(&tokens[last + 1]))
        {
          last += 1;
        }
        sentences.push(make_sentence(text, &tokens[start_idx], &tokens[last]));
        first = None;
      } else if last + 1 < tokens.len()
        && is_paragraph_break(text, tokens[last].end, tokens[last + 1].start)
      {
        sentences.push(make_sentence(text, &tokens[start_idx], &tokens[last]));
        first = None;
      }

      i = last + 1;
    }

    if let (Some(start_idx), Some(last)) = (first, tokens.last()) {
      sentences.push(make_sentence(text, &tokens[start_idx], last));
    }

    debug!(sentence_count = sentences.len(), "Segmentation completed");

    sentences
  }
}

fn make_sentence(text: &str, first: &DocToken, last: &DocToken) -> DocSentence {
  DocSentence {
    text: text[first.start..last.end].to_string(),
    start: first.start,
    end: last.end,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokenizer::WordTokenizer;

  fn sentences(text: &str) -> Vec<String> {
    let tokens = WordTokenizer::new().tokenize(text);
    SentenceSegmenter::new().segment(text, &tokens).into_iter().map(|s| s.text).collect()
  }

  #[test]
  fn splits_on_terminal_punctuation() {
    assert_eq!(
      sentences("Ian is Dutch. He lives in Utrecht! Does he?"),
      vec!["Ian is Dutch.", "He lives in Utrecht!", "Does he?"]
    );
  }

  #[test]
  fn abbreviations_do_not_split() {
    assert_eq!(
      sentences("Mr. Smith went to Washington. He stayed."),
      vec!["Mr. Smith went to Washington.", "He stayed."]
    );
  }

  #[test]
  fn closing_quotes_stay_with_sentence() {
    assert_eq!(
      sentences("She asked, \"Really?!\" Then she left."),
      vec!["She asked, \"Really?!\"", "Then she left."]
    );
  }

  #[test]
  fn unterminated_text_is_one_sentence() {
    assert_eq!(sentences("no punctuation here"), vec!["no punctuation here"]);
  }

  #[test]
  fn blank_line_ends_sentence() {
    assert_eq!(
      sentences("Title line\n\nBody text follows."),
      vec!["Title line", "Body text follows."]
    );
  }

  #[test]
  fn sentence_text_is_verbatim_slice() {
    let text = "First  one.\tSecond\none.";
    let tokens = WordTokenizer::new().tokenize(text);
    for sentence in SentenceSegmenter::new().segment(text, &tokens) {
      assert_eq!(&text[sentence.start..sentence.end], sentence.text);
    }
  }

  fn starts_of(text: &str) -> Vec<(String, bool)> {
    let tokens = WordTokenizer::new().tokenize(text);
    let starts = sentence_starts(text, &tokens);
    tokens.into_iter().map(|t| t.text).zip(starts).collect()
  }

  #[test]
  fn detects_sentence_starts() {
    let starts = starts_of("He left. \"Go home,\" she said.");
    let flag = |word: &str| starts.iter().find(|(t, _)| t == word).map(|(_, s)| *s);
    assert_eq!(flag("He"), Some(true));
    assert_eq!(flag("\""), Some(true));
    assert_eq!(flag("Go"), Some(true));
    assert_eq!(flag("home"), Some(false));
    assert_eq!(flag("she"), Some(false));
  }

  #[test]
  fn looks_through_closers_after_terminal() {
    let starts = starts_of("(He left.) Then \"Stop.\" He ran.");
    let then = starts.iter().position(|(t, _)| t == "Then").unwrap();
    let he_ran = starts.iter().rposition(|(t, _)| t == "He").unwrap();
    assert!(starts[0].1);
    assert!(starts[then].1);
    assert!(starts[he_ran].1);
  }

  #[test]
  fn blank_line_starts_sentence() {
    let starts = starts_of("Title line\n\nBody text");
    assert_eq!(
      starts.iter().map(|(_, s)| *s).collect::<Vec<_>>(),
      vec![true, false, true, false]
    );
  }

  #[test]
  fn long_bracket_runs_share_one_flag() {
    let text = format!("x {}y", "(".repeat(50_000));
    let tokens = WordTokenizer::new().tokenize(&text);
    let starts = sentence_starts(&text, &tokens);
    assert_eq!(starts.len(), tokens.len());
    assert!(starts[0]);
    assert!(starts[1..].iter().all(|s| !s));
  }
}
