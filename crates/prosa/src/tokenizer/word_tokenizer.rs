//! Rule-based English word tokenizer

use tracing::debug;

use crate::lexicon::Lexicon;
use crate::models::DocToken;

/// Characters split off the front of a word
const LEADING_PUNCT: &[char] = &[
  '(', '[', '{', '"', '\'', '“', '‘', '`', '¿', '¡', '«', '$', '€', '£', '¥', '#',
];

/// Characters split off the end of a word (the period is handled separately)
const TRAILING_PUNCT: &[char] = &[
  ',', ';', ':', '!', '?', ')', ']', '}', '"', '\'', '”', '’', '…', '»',
];

/// Clitics split from the end of a word, longest first
const CLITICS: &[&str] = &[
  "n't", "n’t", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'s", "’s", "'d", "’d", "'m", "’m",
];

/// English word tokenizer
///
/// - Stateless (word lists come from the shared [`Lexicon`])
/// - `Clone + Send + Sync`
/// - Every token carries its byte range in the input, so `&text[start..end] == token.text`
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
  /// Creates a tokenizer
  #[must_use]
  pub fn new() -> Self {
    Self
  }

  /// Splits `text` into tokens in source order
  pub fn tokenize(&self, text: &str) -> Vec<DocToken> {
    let lexicon = Lexicon::global();
    let mut tokens = Vec::new();

    for (base, chunk) in whitespace_chunks(text) {
      split_chunk(lexicon, chunk, base, &mut tokens);
    }

    debug!(
      text_len = text.len(),
      token_count = tokens.len(),
      "Tokenization completed"
    );

    tokens
  }
}

/// Yields `(byte offset, chunk)` for every whitespace-delimited chunk
fn whitespace_chunks(text: &str) -> impl Iterator<Item = (usize, &str)> {
  let mut chunks = Vec::new();
  let mut chunk_start: Option<usize> = None;

  for (idx, c) in text.char_indices() {
    match (c.is_whitespace(), chunk_start) {
      (true, Some(start)) => {
        chunks.push((start, &text[start..idx]));
        chunk_start = None;
      }
      (false, None) => chunk_start = Some(idx),
      _ => {}
    }
  }
  if let Some(start) = chunk_start {
    chunks.push((start, &text[start..]));
  }

  chunks.into_iter()
}

/// Splits one whitespace-delimited chunk into tokens
fn split_chunk(lexicon: &Lexicon, chunk: &str, base: usize, out: &mut Vec<DocToken>) {
  let mut start = 0;
  let mut end = chunk.len();

  // ─── Leading punctuation ───
  while let Some(c) = chunk[start..end].chars().next() {
    if !LEADING_PUNCT.contains(&c) || end - start <= c.len_utf8() {
      break;
    }
    push(out, chunk, base, start, start + c.len_utf8());
    start += c.len_utf8();
  }

  // ─── Trailing punctuation (collected back to front) ───
  let mut trailing: Vec<(usize, usize)> = Vec::new();
  // end of the leading period run; a chunk made only of periods stays whole ("...")
  let periods_end = chunk[start..end].find(|ch| ch != '.').map_or(end, |pos| start + pos);
  loop {
    let rest = &chunk[start..end];
    let Some(c) = rest.chars().next_back() else {
      break;
    };

    if end <= periods_end {
      break;
    }

    if rest.ends_with("...") {
      trailing.push((end - 3, end));
      end -= 3;
      continue;
    }

    if c == '.' {
      if lexicon.is_abbreviation(rest) {
        break;
      }
      trailing.push((end - 1, end));
      end -= 1;
      continue;
    }

    if TRAILING_PUNCT.contains(&c) && rest.len() > c.len_utf8() {
      trailing.push((end - c.len_utf8(), end));
      end -= c.len_utf8();
      continue;
    }

    break;
  }

  // ─── Word core with clitics ───
  if start < end {
    let core = &chunk[start..end];
    match split_clitic(core) {
      Some(split_at) => {
        push(out, chunk, base, start, start + split_at);
        push(out, chunk, base, start + split_at, end);
      }
      None => push(out, chunk, base, start, end),
    }
  }

  for (s, e) in trailing.into_iter().rev() {
    push(out, chunk, base, s, e);
  }
}

/// Returns the byte position where a trailing clitic starts, if any
fn split_clitic(core: &str) -> Option<usize> {
  for clitic in CLITICS {
    if core.len() <= clitic.len() {
      continue;
    }
    let split_at = core.len() - clitic.len();
    if !core.is_char_boundary(split_at) {
      continue;
    }
    let (stem, tail) = core.split_at(split_at);
    if tail.eq_ignore_ascii_case(clitic) && stem.chars().all(char::is_alphabetic) {
      return Some(split_at);
    }
  }
  None
}

fn push(out: &mut Vec<DocToken>, chunk: &str, base: usize, start: usize, end: usize) {
  out.push(DocToken::new(&chunk[start..end], base + start, base + end));
}
