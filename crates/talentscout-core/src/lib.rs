//! Business logic and port trait definitions for TalentScout.
//!
//! This crate defines the "ports" (the `LlmProvider` and `EmotionClassifier`
//! traits) that the infrastructure layer implements, plus the conversation
//! memory, prompt composer, sentiment annotator, and the screening dialogue
//! loop. It depends only on `talentscout-types` -- never on
//! `talentscout-infra` or any network/IO crate.

pub mod chat;
pub mod emotion;
pub mod llm;
