//! Chat turn and session lifecycle types for TalentScout.
//!
//! These types model a screening conversation between a candidate and the
//! hiring assistant: individual turns, the transcript they form, and the
//! session state machine driving the dialogue loop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Role of a turn in the screening transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// A single message in the screening transcript.
///
/// Turns are immutable once appended: the transcript only ever grows,
/// in arrival order, for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Create a candidate (user) turn timestamped now.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a hiring-assistant turn timestamped now.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Lifecycle state of a screening session.
///
/// `AwaitingGreeting` -> `Active` fires once at session start when the
/// opening probe elicits the assistant's greeting. `Active` -> `Ended`
/// fires on the exit sentinel; there are no transitions out of `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    AwaitingGreeting,
    Active,
    Ended,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::AwaitingGreeting => write!(f, "awaiting_greeting"),
            SessionState::Active => write!(f, "active"),
            SessionState::Ended => write!(f, "ended"),
        }
    }
}

impl FromStr for SessionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "awaiting_greeting" => Ok(SessionState::AwaitingGreeting),
            "active" => Ok(SessionState::Active),
            "ended" => Ok(SessionState::Ended),
            other => Err(format!("invalid session state: '{other}'")),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::AwaitingGreeting
    }
}
