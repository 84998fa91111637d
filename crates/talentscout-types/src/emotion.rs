//! Emotion scoring types for the sentiment side channel.
//!
//! Each non-exit candidate turn is scored against a fixed set of five
//! emotion labels. Scores live outside the transcript: they are surfaced
//! to the UI but never fed back to the model.

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The fixed emotion label set.
///
/// Declaration order is the canonical tie-break order for dominant-emotion
/// selection: when two labels share the maximum intensity, the one declared
/// first wins. `Ord` derives from declaration order, so `BTreeMap` iteration
/// matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Angry,
    Surprise,
    Sad,
    Fear,
}

impl EmotionLabel {
    /// All labels in canonical (tie-break) order.
    pub const ALL: [EmotionLabel; 5] = [
        EmotionLabel::Happy,
        EmotionLabel::Angry,
        EmotionLabel::Surprise,
        EmotionLabel::Sad,
        EmotionLabel::Fear,
    ];
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmotionLabel::Happy => write!(f, "happy"),
            EmotionLabel::Angry => write!(f, "angry"),
            EmotionLabel::Surprise => write!(f, "surprise"),
            EmotionLabel::Sad => write!(f, "sad"),
            EmotionLabel::Fear => write!(f, "fear"),
        }
    }
}

impl FromStr for EmotionLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(EmotionLabel::Happy),
            "angry" => Ok(EmotionLabel::Angry),
            "surprise" => Ok(EmotionLabel::Surprise),
            "sad" => Ok(EmotionLabel::Sad),
            "fear" => Ok(EmotionLabel::Fear),
            other => Err(format!("invalid emotion label: '{other}'")),
        }
    }
}

/// Mapping from emotion label to intensity in `[0, 1]`.
///
/// May legitimately be empty when the classifier finds no signal.
pub type EmotionScores = BTreeMap<EmotionLabel, f64>;

/// The result of annotating one candidate turn.
///
/// `dominant` is `None` when the classifier produced no scores; the API
/// boundary renders that as the sentinel `"N/A"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    pub dominant: Option<EmotionLabel>,
    pub scores: EmotionScores,
}

impl SentimentReport {
    /// A report with no signal: dominant `N/A`, empty scores.
    pub fn not_applicable() -> Self {
        Self {
            dominant: None,
            scores: EmotionScores::new(),
        }
    }

    /// The dominant label rendered for display, `"N/A"` when absent.
    pub fn dominant_str(&self) -> String {
        match self.dominant {
            Some(label) => label.to_string(),
            None => "N/A".to_string(),
        }
    }
}

/// Errors from the emotion classifier boundary.
#[derive(Debug, thiserror::Error)]
pub enum EmotionError {
    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    #[error("classification failed: {0}")]
    Classification(String),
}
