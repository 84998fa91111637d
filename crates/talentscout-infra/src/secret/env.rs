//! Environment variable secret lookup.
//!
//! API keys reach the process via ambient configuration (shell config,
//! container env, .env loaded by the supervisor); they are never stored
//! by this service.

use secrecy::SecretString;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Read a secret from an environment variable.
///
/// Returns `None` when the variable is unset. A variable with invalid
/// Unicode is treated as unset rather than an error, since API keys must
/// be valid strings.
pub fn secret_from_env(name: &str) -> Option<SecretString> {
    match std::env::var(name) {
        Ok(val) => Some(SecretString::from(val)),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => None,
    }
}

/// Convenience lookup for the Gemini API key.
pub fn gemini_api_key() -> Option<SecretString> {
    secret_from_env(GEMINI_API_KEY_VAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_from_env_existing() {
        // SAFETY: test-local variable name, cleaned up below.
        unsafe { std::env::set_var("TALENTSCOUT_TEST_SECRET_1", "key-123") };

        let secret = secret_from_env("TALENTSCOUT_TEST_SECRET_1").unwrap();
        assert_eq!(secret.expose_secret(), "key-123");

        // SAFETY: the var was just set above.
        unsafe { std::env::remove_var("TALENTSCOUT_TEST_SECRET_1") };
    }

    #[test]
    fn test_secret_from_env_missing() {
        assert!(secret_from_env("NONEXISTENT_VAR_XYZ_123").is_none());
    }
}
