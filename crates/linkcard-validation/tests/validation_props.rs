use linkcard_validation::{
    create_safe_mailto_link, is_valid_outbound_url, sanitize_phone_number, validate_email,
    validate_url, UrlError,
};
use proptest::prelude::*;

#[test]
fn documented_examples() {
    assert_eq!(sanitize_phone_number("+91 96-876 266 09"), "+919687626609");
    assert_eq!(sanitize_phone_number("96+87+62+6609"), "9687626609");

    assert!(validate_email("").is_ok());
    assert!(validate_email("not-an-email").is_err());
    assert!(validate_email("a@b.co").is_ok());

    assert!(!is_valid_outbound_url("javascript:alert(1)"));
    assert!(is_valid_outbound_url("https://example.com"));
    assert!(!is_valid_outbound_url("ftp://x.com"));
}

#[test]
fn unsafe_prefix_wins_over_parse_errors() {
    // Would also fail to parse, but the scheme check comes first
    assert_eq!(validate_url("javascript:"), Err(UrlError::UnsafeScheme));
}

proptest! {
    #[test]
    fn prop_sanitized_phone_is_dialable(raw in ".{0,40}") {
        let out = sanitize_phone_number(&raw);
        for (i, c) in out.chars().enumerate() {
            prop_assert!(c.is_ascii_digit() || (c == '+' && i == 0));
        }
    }

    #[test]
    fn prop_sanitize_is_idempotent(raw in "[0-9+ ()-]{0,30}") {
        let once = sanitize_phone_number(&raw);
        prop_assert_eq!(sanitize_phone_number(&once), once.clone());
    }

    #[test]
    fn prop_sanitize_preserves_digit_order(raw in "[0-9+ .-]{0,30}") {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let kept: String = sanitize_phone_number(&raw)
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        prop_assert_eq!(kept, digits);
    }

    #[test]
    fn prop_guard_agrees_with_validator(url in "(https?|ftp|javascript|data):[a-z/.]{0,20}") {
        prop_assert_eq!(is_valid_outbound_url(&url), validate_url(&url).is_ok());
    }

    #[test]
    fn prop_mailto_has_no_raw_specials(email in "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,4}") {
        let link = create_safe_mailto_link(&email);
        prop_assert!(link.starts_with("mailto:"));
        prop_assert!(!link["mailto:".len()..].contains('@'));
    }
}
