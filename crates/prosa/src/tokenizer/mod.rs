//! tokenizer module
pub mod word_tokenizer;

/// Re-export
pub use word_tokenizer::WordTokenizer;
