//! Emotion classifier implementations.

pub mod lexicon;

pub use lexicon::LexiconClassifier;
