//! Screening conversation: memory, prompt composition, session, dialogue loop.

pub mod engine;
pub mod memory;
pub mod prompt;
pub mod session;

pub use engine::{ScreeningEngine, TurnOutcome};
pub use memory::ConversationMemory;
pub use session::ScreeningSession;
