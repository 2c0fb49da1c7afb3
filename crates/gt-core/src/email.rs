//! E-mail address checks for form submissions.
//!
//! The accepted shape is `local@domain.tld`: no whitespace anywhere, exactly
//! one `@`, and a dot inside the domain with text on both sides of it.

/// Whether `raw` (already trimmed by the caller) looks like an e-mail address.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = raw.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    // Some dot must have at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Trim and lowercase an address before forwarding it.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
