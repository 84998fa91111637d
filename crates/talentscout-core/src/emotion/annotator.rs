//! Sentiment annotator deriving a dominant emotion from classifier scores.
//!
//! Wraps an [`EmotionClassifier`] and turns its raw score mapping into a
//! [`SentimentReport`]: the label with the maximum intensity, or `N/A`
//! when the mapping is empty.

use talentscout_types::emotion::{EmotionError, EmotionLabel, EmotionScores, SentimentReport};

use super::classifier::EmotionClassifier;

/// Annotates candidate text with a dominant emotion and the full score map.
pub struct SentimentAnnotator {
    classifier: Box<dyn EmotionClassifier>,
}

impl SentimentAnnotator {
    /// Create an annotator over the given classifier.
    pub fn new(classifier: Box<dyn EmotionClassifier>) -> Self {
        Self { classifier }
    }

    /// Name of the underlying classifier.
    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Score `text` and derive the dominant emotion.
    ///
    /// An empty mapping from the classifier yields `SentimentReport::not_applicable()`.
    /// A classifier failure propagates; the dialogue loop decides whether to
    /// recover (it does -- sentiment is auxiliary to the conversation).
    pub fn annotate(&self, text: &str) -> Result<SentimentReport, EmotionError> {
        let scores = self.classifier.classify(text)?;
        Ok(SentimentReport {
            dominant: dominant_emotion(&scores),
            scores,
        })
    }
}

/// The label with the maximum intensity, or `None` for an empty mapping.
///
/// Ties break toward the label earliest in [`EmotionLabel`] canonical order;
/// `EmotionScores` is a `BTreeMap` keyed by that order, and only a strictly
/// greater score displaces the current maximum.
pub fn dominant_emotion(scores: &EmotionScores) -> Option<EmotionLabel> {
    let mut best: Option<(EmotionLabel, f64)> = None;
    for (&label, &score) in scores {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((label, score)),
        }
    }
    best.map(|(label, _)| label)
}
