//! Screening session: one transcript plus the lifecycle state machine.
//!
//! A session owns exactly one transcript (via [`ConversationMemory`]) and
//! moves through `AwaitingGreeting` -> `Active` -> `Ended`. Sessions are
//! created on first interaction and discarded on restart; there is no
//! persistence and no cross-session sharing.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use talentscout_types::chat::{SessionState, Turn};

use super::memory::ConversationMemory;

/// State and transcript of a single screening conversation.
#[derive(Debug)]
pub struct ScreeningSession {
    id: Uuid,
    state: SessionState,
    memory: ConversationMemory,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl ScreeningSession {
    /// Create a fresh session awaiting its opening greeting.
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            state: SessionState::AwaitingGreeting,
            memory: ConversationMemory::new(),
            started_at: Utc::now(),
            ended_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// The conversation memory backing this session's transcript.
    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    /// The visible transcript: all turns appended so far, in order.
    pub fn transcript(&self) -> &[Turn] {
        self.memory.turns()
    }

    /// Whether the session has reached the `Ended` state.
    pub fn is_ended(&self) -> bool {
        self.state == SessionState::Ended
    }

    /// Mark the session active (greeting delivered).
    pub(crate) fn activate(&mut self) {
        self.state = SessionState::Active;
    }

    /// Mark the session ended and record the timestamp.
    pub(crate) fn end(&mut self) {
        self.state = SessionState::Ended;
        self.ended_at = Some(Utc::now());
    }

    /// Append a candidate turn and return a copy of it.
    pub(crate) fn push_user(&mut self, text: &str) -> Turn {
        let turn = Turn::user(text);
        self.memory.append(turn.clone());
        turn
    }

    /// Append an assistant turn and return a copy of it.
    pub(crate) fn push_assistant(&mut self, text: &str) -> Turn {
        let turn = Turn::assistant(text);
        self.memory.append(turn.clone());
        turn
    }
}

impl Default for ScreeningSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentscout_types::chat::TurnRole;

    #[test]
    fn test_new_session_awaits_greeting() {
        let session = ScreeningSession::new();
        assert_eq!(session.state(), SessionState::AwaitingGreeting);
        assert!(session.transcript().is_empty());
        assert!(session.ended_at().is_none());
        assert!(!session.is_ended());
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut session = ScreeningSession::new();
        session.activate();
        assert_eq!(session.state(), SessionState::Active);

        session.end();
        assert!(session.is_ended());
        assert!(session.ended_at().is_some());
    }

    #[test]
    fn test_push_turns_grow_transcript_in_order() {
        let mut session = ScreeningSession::new();
        session.push_assistant("Welcome!");
        session.push_user("hello");

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, TurnRole::Assistant);
        assert_eq!(transcript[1].role, TurnRole::User);
        assert_eq!(transcript[1].text, "hello");
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let a = ScreeningSession::new();
        let b = ScreeningSession::new();
        assert_ne!(a.id(), b.id());
    }
}
