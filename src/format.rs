//! Input formatters
//!
//! Pure functions that turn raw keystrokes into the display form stored in
//! the form (currency grouping, phone grouping) plus the small string helpers
//! the submission pipeline needs.

/// Keep only ASCII digits
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a currency amount with US thousands grouping.
///
/// Every non-digit character is dropped, so decimals and signs never survive.
/// An input without digits yields an empty string.
///
/// ```ignore
/// assert_eq!(format_currency("50000"), "50,000");
/// assert_eq!(format_currency("$1,2a3"), "123");
/// ```
pub fn format_currency(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return String::new();
    }

    // Integer semantics: leading zeros collapse, but a lone zero stays.
    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() {
        "0"
    } else {
        significant
    };

    let mut grouped = String::with_capacity(significant.len() + significant.len() / 3);
    for (i, c) in significant.chars().enumerate() {
        if i > 0 && (significant.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a phone number as `(area) mid last`.
///
/// Only the last ten digits are kept. Groups are cut from the tail, so a
/// partial entry fills the `last` group first and missing groups are omitted.
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);

    let area = tail_slice(&digits, 10, 7);
    let mid = tail_slice(&digits, 7, 4);
    let last = tail_slice(&digits, 4, 0);

    let mut groups: Vec<String> = Vec::with_capacity(3);
    if !area.is_empty() {
        groups.push(format!("({area})"));
    }
    if !mid.is_empty() {
        groups.push(mid.to_string());
    }
    if !last.is_empty() {
        groups.push(last.to_string());
    }
    groups.join(" ")
}

/// Slice of an ASCII string between two offsets counted from its end,
/// clamped to the string bounds.
fn tail_slice(s: &str, from_end: usize, to_end: usize) -> &str {
    let len = s.len();
    let start = len.saturating_sub(from_end);
    let end = len.saturating_sub(to_end);
    if start >= end {
        ""
    } else {
        &s[start..end]
    }
}

/// Number suitable for a `tel:` URI: digits plus an optional leading `+`
pub fn dial_number(phone: &str) -> String {
    let trimmed = phone.trim_start();
    let digits = digits_only(trimmed);
    if trimmed.starts_with('+') {
        format!("+{digits}")
    } else {
        digits
    }
}

/// Percent-encode a URI component.
///
/// Leaves the same characters untouched as `encodeURIComponent` in browsers:
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )`. Everything else is encoded
/// byte-wise from its UTF-8 form.
pub fn encode_uri_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
