//! Phone number cleaning for `tel:` links

/// Strip a phone number down to dialable characters
///
/// Keeps ASCII digits, plus a single `+` when it is the first surviving
/// character. Every other character is dropped, including any later `+`.
/// Length and country code are not checked.
#[must_use]
pub fn sanitize_phone_number(phone: &str) -> String {
    let mut out = String::with_capacity(phone.len());
    for c in phone.chars() {
        match c {
            '0'..='9' => out.push(c),
            '+' if out.is_empty() => out.push(c),
            _ => {}
        }
    }
    out
}

/// `tel:` link for a raw phone number, `None` if nothing dialable remains
#[must_use]
pub fn create_tel_link(phone: &str) -> Option<String> {
    let sanitized = sanitize_phone_number(phone);
    if sanitized.chars().any(|c| c.is_ascii_digit()) {
        Some(format!("tel:{sanitized}"))
    } else {
        None
    }
}
