//! Error types for map construction.
//!
//! All failures are detected before the search begins: once a [`KMap`][crate::kmap::KMap]
//! has been built, grouping and synthesis always succeed.

use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, KMapError>;

/// Input validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KMapError {
    /// A variable name is not exactly one character long.
    #[error("variable name '{variable}' must be a single character")]
    MultiCharacterVariable { variable: String },

    /// A minterm does not fit into the truth table of the given variables.
    #[error("minterm {minterm} is out of range (valid range: 0..{limit})")]
    MintermOutOfRange { minterm: u32, limit: u64 },

    /// More minterms were supplied than the truth table has rows.
    #[error("too many minterms: {count} given, at most {limit} allowed")]
    TooManyMinterms { count: usize, limit: u64 },

    /// The number of variables is not 2, 3 or 4.
    #[error("invalid number of variables: {count} (expected 2, 3 or 4)")]
    InvalidVariableCount { count: usize },

    /// The same variable name appears twice.
    #[error("variable '{variable}' is listed more than once")]
    DuplicateVariable { variable: char },

    /// A grid was built from no cells at all.
    #[error("grid has no cells")]
    EmptyGrid,
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_display() {
        let err = KMapError::MintermOutOfRange { minterm: 8, limit: 8 };
        assert_eq!(err.to_string(), "minterm 8 is out of range (valid range: 0..8)");

        let err = KMapError::InvalidVariableCount { count: 1 };
        assert_eq!(err.to_string(), "invalid number of variables: 1 (expected 2, 3 or 4)");
    }
}
