//! Input normalization and display formatting.
//!
//! Normalization produces the value a rule evaluates; formatting mutates the
//! displayed value of the numeric fields as a side effect, before validation.

/// Maximum digits the formatted numeric fields keep.
const MAX_DIGITS: usize = 10;

/// Deterministic cleanup applied before rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    /// Trim surrounding whitespace (text fields).
    Trim,
    /// Strip non-digit characters and truncate to ten (formatted numeric
    /// fields; re-removes the separator the formatter introduced).
    Digits,
    /// Pass through untouched (date and select controls).
    Raw,
}

impl Normalize {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::Trim => raw.trim().to_string(),
            Self::Digits => digits(raw),
            Self::Raw => raw.to_string(),
        }
    }
}

/// Display formatting applied on every input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Digits only, separator before the final digit at full length.
    NationalId,
    /// Digits only.
    Digits,
}

impl InputFormat {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::NationalId => format_national_id(raw),
            Self::Digits => format_phone(raw),
        }
    }
}

/// Keep at most the first ten digits.
fn digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect()
}

/// Format a national id for display: once exactly ten digits are present, a
/// separator is inserted before the final (check) digit.
pub fn format_national_id(raw: &str) -> String {
    let clean = digits(raw);
    if clean.len() == MAX_DIGITS {
        format!("{}-{}", &clean[..MAX_DIGITS - 1], &clean[MAX_DIGITS - 1..])
    } else {
        clean
    }
}

/// Format a phone number for display: digits only, truncated.
pub fn format_phone(raw: &str) -> String {
    digits(raw)
}
