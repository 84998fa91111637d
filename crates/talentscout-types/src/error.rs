use thiserror::Error;

/// Errors from screening session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session has ended")]
    Ended,

    #[error("session already opened")]
    AlreadyOpened,

    #[error("session not yet opened")]
    NotOpened,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        assert_eq!(SessionError::Ended.to_string(), "session has ended");
        assert_eq!(
            SessionError::AlreadyOpened.to_string(),
            "session already opened"
        );
    }
}
