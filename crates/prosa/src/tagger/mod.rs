//! tagger module
pub mod pos_tagger;

/// Re-export
pub use pos_tagger::PosTagger;
