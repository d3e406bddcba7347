//! Validation rules.
//!
//! Each rule is one of a finite set of kinds with typed parameters,
//! dispatched by `match` in [`crate::checks`]. No rule carries arbitrary
//! function state.

mod registry;

pub use registry::{Rule, RuleRegistry};

use std::sync::LazyLock;

use regex::Regex;

/// Exactly ten consecutive digits (national id, phone).
pub(crate) static TEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("invalid ten-digit regex"));

/// Email shape: local@domain.tld, no whitespace.
pub(crate) static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// The finite set of rule kinds.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Normalized length must reach the threshold.
    LengthThreshold { min: usize },
    /// Normalized value must match the pattern.
    PatternMatch { pattern: &'static Regex },
    /// Birth date: parseable, not in the future, minimum age in whole years.
    BirthDate { min_years: u32 },
    /// A selection control must carry a non-empty choice.
    NonEmptySelection,
}
