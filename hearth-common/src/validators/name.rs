//! Display name validation

/// Maximum length for display names in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Validation error for display names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty
    Empty,
    /// Name exceeds maximum length
    TooLong,
    /// Name contains control characters
    InvalidCharacters,
}

/// Validate a display name
///
/// Checks:
/// - Not empty
/// - Does not exceed maximum length (100 characters)
/// - Contains no control characters (spaces and any script are fine)
///
/// # Errors
///
/// Returns a `NameError` variant describing the validation failure.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(NameError::TooLong);
    }
    if name.chars().any(char::is_control) {
        return Err(NameError::InvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Jane Doe").is_ok());
        assert!(validate_name("J").is_ok());
        assert!(validate_name("Zoë Ångström").is_ok());
        assert!(validate_name("山田 太郎").is_ok());
        assert!(validate_name(&"a".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_name(""), Err(NameError::Empty));
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate_name(&"a".repeat(MAX_NAME_LENGTH + 1)),
            Err(NameError::TooLong)
        );
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(validate_name("Jane\nDoe"), Err(NameError::InvalidCharacters));
        assert_eq!(validate_name("Jane\0"), Err(NameError::InvalidCharacters));
    }
}
