//! Error types for puzzle loading, with error codes and helpful messages.
//!
//! Each variant has a unique code for documentation lookup:
//!
//! - P001: `EmptyGrid` (No grid lines in the input)
//! - P002: `BadGridToken` (Grid token is not a single letter)
//! - P003: `JaggedGrid` (Grid rows have unequal lengths)
//! - P004: `NoWords` (No target words after the grid)
//! - P005: `Io` (Underlying I/O failure)
//!
//! The search engines themselves never fail: invalid targets and absent
//! results are both expressed as `None`/empty outcomes. Only the loader
//! has real failure modes.

use std::io;

/// Error type for puzzle-file parsing and loading.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("puzzle input has no grid lines")]
    EmptyGrid,

    #[error("grid token \"{token}\" on line {line} is not a single letter")]
    BadGridToken { token: String, line: usize },

    #[error("grid row {row} has {actual} letters, expected {expected}")]
    JaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("no target words after the grid")]
    NoWords,

    #[error("failed to read puzzle: {0}")]
    Io(#[from] io::Error),
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::EmptyGrid => "P001",
            PuzzleError::BadGridToken { .. } => "P002",
            PuzzleError::JaggedGrid { .. } => "P003",
            PuzzleError::NoWords => "P004",
            PuzzleError::Io(_) => "P005",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::EmptyGrid => {
                Some("A puzzle starts with grid lines like 'C A T' (one letter per token)")
            }
            PuzzleError::BadGridToken { .. } => {
                Some("Grid tokens must be single letters, separated by spaces or commas")
            }
            PuzzleError::JaggedGrid { .. } => {
                Some("Every grid row must have the same number of letters")
            }
            PuzzleError::NoWords => {
                Some("List the target words after a blank line, e.g. 'CAT DOG TOGA'")
            }
            PuzzleError::Io(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_error_codes_and_help() {
        let err = PuzzleError::EmptyGrid;
        assert_eq!(err.code(), "P001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("P001"));
        assert!(detailed.contains("grid lines"));
    }

    #[test]
    fn test_jagged_grid_message_includes_values() {
        let err = PuzzleError::JaggedGrid {
            row: 2,
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.code(), "P003");
        let detailed = err.display_detailed();
        assert!(detailed.contains('2') && detailed.contains('4') && detailed.contains('3'));
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let errors: Vec<PuzzleError> = vec![
            PuzzleError::EmptyGrid,
            PuzzleError::BadGridToken {
                token: "xy".to_string(),
                line: 1,
            },
            PuzzleError::JaggedGrid {
                row: 1,
                expected: 3,
                actual: 2,
            },
            PuzzleError::NoWords,
            PuzzleError::Io(io::Error::new(io::ErrorKind::NotFound, "missing")),
        ];

        let mut codes = HashSet::new();
        for err in errors {
            let code = err.code();
            assert!(code.starts_with('P'), "code '{code}' should start with 'P'");
            assert!(codes.insert(code), "duplicate error code: {code}");
        }
        assert_eq!(codes.len(), 5);
    }
}
