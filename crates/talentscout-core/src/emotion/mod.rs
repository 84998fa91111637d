//! Sentiment annotation over the emotion classifier port.

pub mod annotator;
pub mod classifier;

pub use annotator::SentimentAnnotator;
pub use classifier::EmotionClassifier;
