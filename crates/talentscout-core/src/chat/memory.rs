//! Conversation memory: the ordered transcript and its history rendering.
//!
//! Memory is the serialization of the transcript fed back to the model on
//! every call. It reflects exactly the turns appended so far, in order.
//! History is never dropped or truncated; screening sessions stay short
//! enough that unbounded growth is acceptable.

use talentscout_types::chat::{Turn, TurnRole};

/// Speaker labels used in the rendered history, matching the cue lines in
/// the prompt template.
const USER_LABEL: &str = "Candidate";
const ASSISTANT_LABEL: &str = "Hiring Assistant";

/// Ordered transcript of turns with deterministic history rendering.
#[derive(Debug, Clone, Default)]
pub struct ConversationMemory {
    turns: Vec<Turn>,
}

impl ConversationMemory {
    /// Create an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn. Turns are immutable once appended.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns appended so far, in arrival order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns appended so far.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turns have been appended yet.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Serialize all turns into the `history` block consumed by the prompt
    /// composer: one `<Label>: <text>` line per turn, in append order.
    ///
    /// Deterministic and referentially transparent given the turns so far.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .turns
            .iter()
            .map(|turn| {
                let label = match turn.role {
                    TurnRole::User => USER_LABEL,
                    TurnRole::Assistant => ASSISTANT_LABEL,
                };
                format!("{label}: {}", turn.text)
            })
            .collect();
        lines.join("\n")
    }
}
