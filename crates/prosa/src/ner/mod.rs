//! ner module
pub mod entity_chunker;

/// Re-export
pub use entity_chunker::EntityChunker;
