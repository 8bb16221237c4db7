//! Username validation
//!
//! Validates credential usernames.

/// Maximum length for usernames in characters
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Validation error for usernames
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// Username is empty
    Empty,
    /// Username exceeds maximum length
    TooLong,
    /// Username contains whitespace or control characters
    InvalidCharacters,
}

/// Validate a username
///
/// Checks:
/// - Not empty
/// - Does not exceed maximum length (64 characters)
/// - Contains no whitespace or control characters
///
/// The server normalizes usernames (trim + case fold) before comparing,
/// so case is not checked here.
///
/// # Errors
///
/// Returns a `UsernameError` variant describing the validation failure.
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    if username.is_empty() {
        return Err(UsernameError::Empty);
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(UsernameError::TooLong);
    }
    if username
        .chars()
        .any(|ch| ch.is_whitespace() || ch.is_control())
    {
        return Err(UsernameError::InvalidCharacters);
    }
    Ok(())
}
