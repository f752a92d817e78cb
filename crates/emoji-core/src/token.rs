//! Emoji token normalization and formatting.
//!
//! A token is the bare shortcode name (`alphabet-white-a`); it is wrapped in
//! colons only when written to the output.

/// Strip one leading and one trailing `:` from a user-supplied shortcode.
pub fn trim_emoji(raw: &str) -> &str {
    let s = raw.strip_suffix(':').unwrap_or(raw);
    s.strip_prefix(':').unwrap_or(s)
}

/// Normalize an optional decoration token. Empty input means "not configured".
pub fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = trim_emoji(raw);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Append `:token:` to `out`. Empty tokens are skipped.
pub fn write_emoji(out: &mut String, token: &str) {
    if token.is_empty() {
        return;
    }
    out.push(':');
    out.push_str(token);
    out.push(':');
}
