//! Lexicon-based emotion classifier.
//!
//! Scores text against an embedded word -> emotion lexicon: tokenize to
//! lowercase alphanumeric words, count matches per label, normalize counts
//! by the total number of matches into `[0, 1]`. Texts with no lexicon
//! hits yield an empty mapping (no signal), which the annotator renders
//! as `N/A`.

use std::collections::HashMap;
use std::sync::OnceLock;

use talentscout_core::emotion::classifier::EmotionClassifier;
use talentscout_types::emotion::{EmotionError, EmotionLabel, EmotionScores};

/// Embedded word -> emotion associations.
///
/// A compact subset in the spirit of the NRC emotion lexicon, covering
/// the vocabulary a screening conversation is likely to see.
const LEXICON: &[(&str, EmotionLabel)] = &[
    // Happy
    ("happy", EmotionLabel::Happy),
    ("glad", EmotionLabel::Happy),
    ("joy", EmotionLabel::Happy),
    ("joyful", EmotionLabel::Happy),
    ("delighted", EmotionLabel::Happy),
    ("pleased", EmotionLabel::Happy),
    ("excited", EmotionLabel::Happy),
    ("exciting", EmotionLabel::Happy),
    ("great", EmotionLabel::Happy),
    ("awesome", EmotionLabel::Happy),
    ("wonderful", EmotionLabel::Happy),
    ("fantastic", EmotionLabel::Happy),
    ("love", EmotionLabel::Happy),
    ("loved", EmotionLabel::Happy),
    ("enjoy", EmotionLabel::Happy),
    ("enjoyed", EmotionLabel::Happy),
    ("thrilled", EmotionLabel::Happy),
    ("proud", EmotionLabel::Happy),
    ("grateful", EmotionLabel::Happy),
    ("thankful", EmotionLabel::Happy),
    ("thanks", EmotionLabel::Happy),
    ("passionate", EmotionLabel::Happy),
    ("confident", EmotionLabel::Happy),
    ("optimistic", EmotionLabel::Happy),
    ("fun", EmotionLabel::Happy),
    ("smile", EmotionLabel::Happy),
    ("perfect", EmotionLabel::Happy),
    // Angry
    ("angry", EmotionLabel::Angry),
    ("anger", EmotionLabel::Angry),
    ("mad", EmotionLabel::Angry),
    ("furious", EmotionLabel::Angry),
    ("annoyed", EmotionLabel::Angry),
    ("annoying", EmotionLabel::Angry),
    ("irritated", EmotionLabel::Angry),
    ("frustrated", EmotionLabel::Angry),
    ("frustrating", EmotionLabel::Angry),
    ("hate", EmotionLabel::Angry),
    ("hated", EmotionLabel::Angry),
    ("outraged", EmotionLabel::Angry),
    ("resent", EmotionLabel::Angry),
    ("hostile", EmotionLabel::Angry),
    ("unfair", EmotionLabel::Angry),
    ("insulted", EmotionLabel::Angry),
    ("disgusted", EmotionLabel::Angry),
    // Surprise
    ("surprise", EmotionLabel::Surprise),
    ("surprised", EmotionLabel::Surprise),
    ("surprising", EmotionLabel::Surprise),
    ("unexpected", EmotionLabel::Surprise),
    ("astonished", EmotionLabel::Surprise),
    ("amazed", EmotionLabel::Surprise),
    ("amazing", EmotionLabel::Surprise),
    ("shocked", EmotionLabel::Surprise),
    ("shocking", EmotionLabel::Surprise),
    ("stunned", EmotionLabel::Surprise),
    ("wow", EmotionLabel::Surprise),
    ("incredible", EmotionLabel::Surprise),
    ("unbelievable", EmotionLabel::Surprise),
    ("sudden", EmotionLabel::Surprise),
    ("suddenly", EmotionLabel::Surprise),
    // Sad
    ("sad", EmotionLabel::Sad),
    ("unhappy", EmotionLabel::Sad),
    ("depressed", EmotionLabel::Sad),
    ("depressing", EmotionLabel::Sad),
    ("miserable", EmotionLabel::Sad),
    ("heartbroken", EmotionLabel::Sad),
    ("disappointed", EmotionLabel::Sad),
    ("disappointing", EmotionLabel::Sad),
    ("upset", EmotionLabel::Sad),
    ("lonely", EmotionLabel::Sad),
    ("cry", EmotionLabel::Sad),
    ("cried", EmotionLabel::Sad),
    ("regret", EmotionLabel::Sad),
    ("sorry", EmotionLabel::Sad),
    ("lost", EmotionLabel::Sad),
    ("hopeless", EmotionLabel::Sad),
    ("grief", EmotionLabel::Sad),
    ("hurt", EmotionLabel::Sad),
    // Fear
    ("fear", EmotionLabel::Fear),
    ("afraid", EmotionLabel::Fear),
    ("scared", EmotionLabel::Fear),
    ("scary", EmotionLabel::Fear),
    ("terrified", EmotionLabel::Fear),
    ("terrifying", EmotionLabel::Fear),
    ("anxious", EmotionLabel::Fear),
    ("anxiety", EmotionLabel::Fear),
    ("nervous", EmotionLabel::Fear),
    ("worried", EmotionLabel::Fear),
    ("worry", EmotionLabel::Fear),
    ("panic", EmotionLabel::Fear),
    ("dread", EmotionLabel::Fear),
    ("frightened", EmotionLabel::Fear),
    ("threatened", EmotionLabel::Fear),
    ("intimidated", EmotionLabel::Fear),
    ("insecure", EmotionLabel::Fear),
    ("uneasy", EmotionLabel::Fear),
];

fn lexicon_index() -> &'static HashMap<&'static str, EmotionLabel> {
    static INDEX: OnceLock<HashMap<&'static str, EmotionLabel>> = OnceLock::new();
    INDEX.get_or_init(|| LEXICON.iter().copied().collect())
}

/// In-process lexicon scorer implementing the classifier port.
#[derive(Debug, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    /// Create a new lexicon classifier.
    pub fn new() -> Self {
        Self
    }
}

impl EmotionClassifier for LexiconClassifier {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn classify(&self, text: &str) -> Result<EmotionScores, EmotionError> {
        let index = lexicon_index();

        let mut counts: HashMap<EmotionLabel, u32> = HashMap::new();
        let mut total: u32 = 0;

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let token = token.to_lowercase();
            if let Some(&label) = index.get(token.as_str()) {
                *counts.entry(label).or_insert(0) += 1;
                total += 1;
            }
        }

        if total == 0 {
            return Ok(EmotionScores::new());
        }

        Ok(counts
            .into_iter()
            .map(|(label, count)| (label, f64::from(count) / f64::from(total)))
            .collect())
    }
}
