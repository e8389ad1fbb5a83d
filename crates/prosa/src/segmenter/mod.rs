//! segmenter module
pub mod sentence_segmenter;

/// Re-export
pub use sentence_segmenter::SentenceSegmenter;
pub(crate) use sentence_segmenter::sentence_starts;
