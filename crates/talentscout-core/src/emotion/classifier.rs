//! EmotionClassifier trait definition.
//!
//! The classifier is an opaque text -> emotion-scores capability. It runs
//! in-process (a lexicon scorer in talentscout-infra), so the trait is
//! synchronous and object-safe.

use talentscout_types::emotion::{EmotionError, EmotionScores};

/// Trait for emotion classification backends.
///
/// An empty score mapping is a legitimate result (no signal in the text),
/// distinct from an `Err` (the classifier itself failed).
pub trait EmotionClassifier: Send + Sync {
    /// Human-readable classifier name (e.g., "lexicon").
    fn name(&self) -> &str;

    /// Score the text against the fixed emotion label set.
    fn classify(&self, text: &str) -> Result<EmotionScores, EmotionError>;
}
