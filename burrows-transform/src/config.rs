//! Transform configuration.

use std::fmt;
use std::str::FromStr;

use burrows_core::{BurrowsError, Result};

/// Inputs at or below this length are sorted with the comparison sorter
/// when [`SortStrategy::Auto`] is selected.
pub const COMPARISON_SORT_THRESHOLD: usize = 64;

/// Algorithm used to order the cyclic rotations of a block.
///
/// All strategies produce the same permutation; they only differ in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// Pick by input length (see [`COMPARISON_SORT_THRESHOLD`]).
    #[default]
    Auto,
    /// Comparison sort over whole rotations. O(n log n) comparisons of up to
    /// n bytes each, quadratic-ish on highly repetitive input.
    Comparison,
    /// Prefix doubling with counting sorts, O(n log n) total.
    PrefixDoubling,
}

impl SortStrategy {
    /// Resolve `Auto` for an input of `len` bytes.
    pub fn resolve(self, len: usize) -> Self {
        match self {
            Self::Auto if len <= COMPARISON_SORT_THRESHOLD => Self::Comparison,
            Self::Auto => Self::PrefixDoubling,
            other => other,
        }
    }

    /// Get the strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Comparison => "comparison",
            Self::PrefixDoubling => "doubling",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortStrategy {
    type Err = BurrowsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "comparison" | "compare" => Ok(Self::Comparison),
            "doubling" | "prefix-doubling" => Ok(Self::PrefixDoubling),
            _ => Err(BurrowsError::invalid_argument(format!(
                "unknown sort strategy: {s}"
            ))),
        }
    }
}

/// Options for the forward Burrows-Wheeler transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformConfig {
    /// Suffix sorting algorithm.
    pub sort: SortStrategy,
}

impl TransformConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suffix sorting strategy.
    pub fn with_sort(mut self, sort: SortStrategy) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_auto() {
        assert_eq!(SortStrategy::Auto.resolve(0), SortStrategy::Comparison);
        assert_eq!(
            SortStrategy::Auto.resolve(COMPARISON_SORT_THRESHOLD),
            SortStrategy::Comparison
        );
        assert_eq!(
            SortStrategy::Auto.resolve(COMPARISON_SORT_THRESHOLD + 1),
            SortStrategy::PrefixDoubling
        );
        assert_eq!(
            SortStrategy::Comparison.resolve(1 << 20),
            SortStrategy::Comparison
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("auto".parse::<SortStrategy>().unwrap(), SortStrategy::Auto);
        assert_eq!(
            "Doubling".parse::<SortStrategy>().unwrap(),
            SortStrategy::PrefixDoubling
        );
        let err = "radix".parse::<SortStrategy>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_config_builder() {
        let config = TransformConfig::new().with_sort(SortStrategy::Comparison);
        assert_eq!(config.sort, SortStrategy::Comparison);
        assert_eq!(TransformConfig::default().sort, SortStrategy::Auto);
    }
}
