//! Input validation for the number list.
//!
//! Error strings are the user-facing messages shown by the front end.

use std::sync::LazyLock;

use regex::Regex;

pub const INVALID_COUNT: &str = "Please enter a valid count of numbers (greater than 0)";
pub const EMPTY_FIELD: &str = "Please fill in all number fields";
pub const INVALID_NUMBER: &str = "Please enter valid numbers in all fields";

/// Largest count the visualizer accepts by default.
pub const MAX_COUNT: usize = 20;

pub fn count_too_large(max_count: usize) -> String {
    format!("Please enter a count of {max_count} or less for better visualization")
}

/// Decimal literal: optional sign, digits with optional fraction, optional exponent.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("valid number regex")
});

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,;]+").expect("valid separator regex"));

/// Parse the "how many numbers" field. Accepts a plain integer in `1..=max_count`;
/// fractions and trailing text (`"1.5"`, `"5abc"`) are rejected.
pub fn parse_count(text: &str, max_count: usize) -> Result<usize, String> {
    let count: i64 = text.trim().parse().map_err(|_| INVALID_COUNT.to_string())?;
    if count <= 0 {
        return Err(INVALID_COUNT.to_string());
    }
    let count = count as usize;
    if count > max_count {
        return Err(count_too_large(max_count));
    }
    Ok(count)
}

/// Parse one number field. Blank fields and non-finite values are rejected.
pub fn parse_value(text: &str) -> Result<f64, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EMPTY_FIELD.to_string());
    }
    if !NUMBER_RE.is_match(text) {
        return Err(INVALID_NUMBER.to_string());
    }
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| INVALID_NUMBER.to_string())
}

/// Validate a full form submission: the count field plus one text per number.
pub fn validate_fields<S: AsRef<str>>(
    count: &str,
    fields: &[S],
    max_count: usize,
) -> Result<Vec<f64>, String> {
    let count = parse_count(count, max_count)?;
    if fields.len() != count {
        return Err(EMPTY_FIELD.to_string());
    }
    fields.iter().map(|f| parse_value(f.as_ref())).collect()
}

/// Parse a free-form list such as `"5, 1 4;2 8"`.
pub fn parse_list(text: &str, max_count: usize) -> Result<Vec<f64>, String> {
    let tokens: Vec<&str> = SEPARATOR_RE
        .split(text.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(INVALID_COUNT.to_string());
    }
    if tokens.len() > max_count {
        return Err(count_too_large(max_count));
    }
    tokens.into_iter().map(parse_value).collect()
}
