//! prosa document analysis library
//!
//! Tokenization, sentence segmentation, part-of-speech tagging and named-entity
//! extraction for English text.
//!
//! ```
//! use prosa::{DocumentAnalyzer, DocumentOptions, ProseAnalyzer};
//!
//! let doc = ProseAnalyzer::new().analyze("Ian is Dutch.", DocumentOptions::all()).unwrap();
//! assert_eq!(doc.tokens[0].text, "Ian");
//! assert_eq!(doc.entities[0].label, "PERSON");
//! ```

/// Analyzer module - DocumentAnalyzer trait and the ProseAnalyzer pipeline
pub mod analyzer;

/// Config module - DocumentOptions stage switches
pub mod config;

/// Error module - AnalyzerError, AnalyzerResult
pub mod errors;

/// Lexicon module - built-in word lists and gazetteers
pub mod lexicon;

/// Data model module - Document, DocToken, DocSentence, DocEntity
pub mod models;

/// Named-entity module - IOB labelling and entity extraction
pub mod ner;

/// Segmenter module - sentence boundaries
pub mod segmenter;

/// Tagger module - Penn Treebank POS tagging
pub mod tagger;

/// Tokenizer module - word tokenization with byte offsets
pub mod tokenizer;

/// Re-exports
pub use analyzer::{DocumentAnalyzer, ProseAnalyzer};
pub use config::DocumentOptions;
pub use errors::{AnalyzerError, AnalyzerResult};
pub use models::{DocEntity, DocSentence, DocToken, Document};
