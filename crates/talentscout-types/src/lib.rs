//! Shared domain types for the TalentScout screening assistant.
//!
//! This crate contains the core domain types used across the workspace:
//! chat turns and session state, emotion scores, LLM request/response
//! shapes, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod emotion;
pub mod error;
pub mod llm;
