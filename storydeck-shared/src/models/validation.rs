//! Validation logic for the login, signup, and submit-story forms.
//!
//! Kept separate from the components so the rules can be tested without a
//! browser. The submit buttons stay disabled until these accept the input,
//! so empty strings never reach the API.

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
    /// Username is too short (less than 3 characters)
    UsernameTooShort,
    /// Password is too short (less than 8 characters)
    PasswordTooShort,
    /// Story URL has no recognizable host
    InvalidUrl,
}

/// Validates a username.
///
/// # Validation rules
/// - Username must not be empty
/// - Username must be at least 3 characters long
///
/// # Errors
/// Returns a [`ValidationError`] describing the first rule violated.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    if username.trim().len() < 3 {
        return Err(ValidationError::UsernameTooShort);
    }

    Ok(())
}

/// Validates a password.
///
/// # Validation rules
/// - Password must not be empty
/// - Password must be at least 8 characters long
///
/// # Errors
/// Returns a [`ValidationError`] describing the first rule violated.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    if password.len() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Validates a free-text required field (display name, story title, author).
///
/// # Errors
/// Returns [`ValidationError::Required`] when the trimmed field is empty.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    Ok(())
}

/// Validates a story URL.
///
/// # Validation rules
/// - URL must not be empty
/// - The hostname heuristic must find a host containing a `.`
///
/// # Errors
/// Returns a [`ValidationError`] describing the first rule violated.
pub fn validate_story_url(url: &str) -> Result<(), ValidationError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    let host = super::story::host_name(trimmed);
    if host.is_empty() || !host.contains('.') {
        return Err(ValidationError::InvalidUrl);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_empty_is_required() {
        assert_eq!(validate_username(""), Err(ValidationError::Required));
        assert_eq!(validate_username("   "), Err(ValidationError::Required));
    }

    #[test]
    fn username_short_is_rejected() {
        assert_eq!(
            validate_username("ab"),
            Err(ValidationError::UsernameTooShort)
        );
    }

    #[test]
    fn username_valid_passes() {
        assert_eq!(validate_username("alice"), Ok(()));
    }

    #[test]
    fn password_empty_is_required() {
        assert_eq!(validate_password(""), Err(ValidationError::Required));
    }

    #[test]
    fn password_short_is_rejected() {
        assert_eq!(
            validate_password("short"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn password_valid_passes() {
        assert_eq!(validate_password("longenough"), Ok(()));
    }

    #[test]
    fn required_rejects_whitespace() {
        assert_eq!(validate_required(" \t"), Err(ValidationError::Required));
        assert_eq!(validate_required("A title"), Ok(()));
    }

    #[test]
    fn story_url_requires_a_host() {
        assert_eq!(validate_story_url(""), Err(ValidationError::Required));
        assert_eq!(
            validate_story_url("not-a-url"),
            Err(ValidationError::InvalidUrl)
        );
    }

    #[test]
    fn story_url_accepts_scheme_and_schemeless_forms() {
        assert_eq!(validate_story_url("https://example.com/a"), Ok(()));
        assert_eq!(validate_story_url("example.com/a"), Ok(()));
    }
}
