//! LlmProvider trait definition.
//!
//! This is the abstraction all model backends implement. Uses RPITIT
//! (native async fn in traits, Rust 2024 edition); `BoxLlmProvider`
//! provides the object-safe wrapper for runtime provider selection.

use talentscout_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for text-completion backends (Gemini, OpenAI, stubs in tests).
///
/// Implementations live in talentscout-infra (e.g.,
/// `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini", "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// The call is synchronous from the dialogue loop's perspective: the
    /// loop does not proceed to annotation or transcript append until it
    /// returns or fails. No timeout is imposed here; a hung provider hangs
    /// the turn.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
