//! Infrastructure layer for TalentScout.
//!
//! Contains implementations of the port traits defined in
//! `talentscout-core`: the OpenAI-compatible LLM client (Google Gemini
//! endpoint), the lexicon-based emotion classifier, and environment
//! variable secret lookup.

pub mod emotion;
pub mod llm;
pub mod secret;
