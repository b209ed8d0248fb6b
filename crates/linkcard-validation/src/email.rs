//! Email address checks and `mailto:` construction

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    // non-space, '@', non-space, '.', non-space
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Email validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    /// Does not look like `local@domain.tld`
    #[error("Please enter a valid email address")]
    InvalidFormat,
}

/// Validate an optional email address
///
/// Blank input is valid because the field is optional.
///
/// # Errors
/// Returns [`EmailError::InvalidFormat`] when the trimmed value does not have
/// the `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    let trimmed = email.trim();
    if trimmed.is_empty() || EMAIL_SHAPE.is_match(trimmed) {
        Ok(())
    } else {
        Err(EmailError::InvalidFormat)
    }
}

/// Build a `mailto:` link with the address percent-encoded
///
/// Callers gate on [`validate_email`] first; nothing is re-validated here.
#[must_use]
pub fn create_safe_mailto_link(email: &str) -> String {
    format!("mailto:{}", urlencoding::encode(email.trim()))
}
