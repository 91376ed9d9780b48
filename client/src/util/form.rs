//! Form input normalisation shared by page forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Parse a whole-dollar amount typed by a user.
///
/// Accepts a leading `$`, thousands separators, and surrounding whitespace.
/// Anything else (cents, letters, negatives, empty) is `None`.
pub fn parse_amount(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let digits: String = unsigned.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Loose email shape check: one `@`, a non-empty local part, and a dotted domain.
pub fn is_plausible_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// Trimmed owned copy of a text field.
pub fn field(raw: &str) -> String {
    raw.trim().to_owned()
}
