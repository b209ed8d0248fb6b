//! Outbound link validation
//!
//! Only absolute `http`/`https` URLs may be followed. Script-capable and
//! local schemes are rejected on their prefix before any structural parse.

use url::Url;

/// Scheme prefixes rejected outright (compared case-insensitively)
pub const UNSAFE_SCHEMES: [&str; 4] = ["javascript:", "data:", "vbscript:", "file:"];

/// Reasons an outbound URL is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    /// Empty or whitespace-only input
    #[error("URL is required")]
    Required,

    /// Script-capable or local scheme prefix
    #[error("Unsafe URL scheme detected")]
    UnsafeScheme,

    /// Parsed, but the scheme is neither `http` nor `https`
    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedScheme,

    /// Not an absolute URL
    #[error("Invalid URL format")]
    InvalidFormat,
}

/// Validate a URL entered for a profile link
///
/// # Returns
/// - `Ok(())` for an absolute `http`/`https` URL
/// - `Err(UrlError)` whose message can be shown next to the input
///
/// # Errors
/// See [`UrlError`] variants; they are checked in declaration order.
pub fn validate_url(url: &str) -> Result<(), UrlError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Required);
    }

    if has_unsafe_scheme(trimmed) {
        return Err(UrlError::UnsafeScheme);
    }

    let parsed = Url::parse(trimmed).map_err(|_| UrlError::InvalidFormat)?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlError::UnsupportedScheme),
    }
}

/// Guard used right before following a link
///
/// Same rules as [`validate_url`], collapsed to a boolean.
#[inline]
#[must_use]
pub fn is_valid_outbound_url(url: &str) -> bool {
    validate_url(url).is_ok()
}

fn has_unsafe_scheme(trimmed: &str) -> bool {
    let lower = trimmed.to_ascii_lowercase();
    UNSAFE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert_eq!(validate_url("https://example.com"), Ok(()));
        assert_eq!(validate_url("http://example.com/path?q=1"), Ok(()));
        assert_eq!(validate_url("  https://example.com  "), Ok(()));
    }

    #[test]
    fn requires_non_blank_input() {
        assert_eq!(validate_url(""), Err(UrlError::Required));
        assert_eq!(validate_url("   \t"), Err(UrlError::Required));
    }

    #[test]
    fn rejects_unsafe_schemes_case_insensitively() {
        assert_eq!(validate_url("javascript:alert(1)"), Err(UrlError::UnsafeScheme));
        assert_eq!(validate_url("JavaScript:alert(1)"), Err(UrlError::UnsafeScheme));
        assert_eq!(
            validate_url("data:text/html;base64,PHNjcmlwdD4="),
            Err(UrlError::UnsafeScheme)
        );
        assert_eq!(validate_url("VBScript:msgbox"), Err(UrlError::UnsafeScheme));
        assert_eq!(validate_url(" file:///etc/passwd"), Err(UrlError::UnsafeScheme));
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(validate_url("ftp://x.com"), Err(UrlError::UnsupportedScheme));
        assert_eq!(validate_url("mailto:a@b.co"), Err(UrlError::UnsupportedScheme));
    }

    #[test]
    fn rejects_relative_input() {
        assert_eq!(validate_url("example.com"), Err(UrlError::InvalidFormat));
        assert_eq!(validate_url("/just/a/path"), Err(UrlError::InvalidFormat));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(UrlError::Required.to_string(), "URL is required");
        assert_eq!(UrlError::UnsafeScheme.to_string(), "Unsafe URL scheme detected");
        assert_eq!(UrlError::InvalidFormat.to_string(), "Invalid URL format");
    }

    #[test]
    fn guard_matches_validator() {
        assert!(!is_valid_outbound_url("javascript:alert(1)"));
        assert!(is_valid_outbound_url("https://example.com"));
        assert!(!is_valid_outbound_url("ftp://x.com"));
        assert!(!is_valid_outbound_url(""));
    }
}
