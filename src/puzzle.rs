//! `puzzle` — load and preprocess a word-search puzzle for wordgrid.
//!
//! A puzzle file is plain text: leading lines of whitespace- or
//! comma-separated single letters form the grid, the first blank line ends
//! the grid, and the remaining lines list the target words (also split on
//! whitespace and commas). Everything is uppercased.
//!
//! ```text
//! C A T S
//! O X E O
//! D O G P
//! A R T A
//!
//! CAT DOG
//! TOGA
//! ```
//!
//! Rectangularity is validated here, not in [`crate::grid::Grid`]: the grid
//! constructor's contract is a well-formed matrix, and this module is what
//! upholds it. The public API provides:
//! - `parse_from_str(...)` — parse from an in-memory string.
//! - `load_from_path(...)` — convenience method to read from a file path.
//! - `sample()` — a small built-in demo puzzle.

use crate::errors::PuzzleError;

/// A parsed puzzle: the letter matrix plus the target word list.
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Rectangular uppercase letter matrix.
    pub grid: Vec<Vec<char>>,
    /// Uppercase target words, in file order.
    pub words: Vec<String>,
}

fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

impl Puzzle {
    /// Parse a puzzle from an in-memory string.
    ///
    /// # Errors
    ///
    /// - [`PuzzleError::EmptyGrid`] if there are no grid lines.
    /// - [`PuzzleError::BadGridToken`] if a grid token is not one letter.
    /// - [`PuzzleError::JaggedGrid`] if the rows have unequal lengths.
    /// - [`PuzzleError::NoWords`] if no words follow the grid.
    pub fn parse_from_str(contents: &str) -> Result<Puzzle, PuzzleError> {
        let mut lines = contents.lines().enumerate();

        // Grid section: letter rows up to the first blank line.
        let mut grid: Vec<Vec<char>> = Vec::new();
        for (line_no, raw_line) in lines.by_ref() {
            let line = raw_line.trim();
            if line.is_empty() {
                if grid.is_empty() {
                    // Skip leading blank lines.
                    continue;
                }
                break;
            }

            let mut row = Vec::new();
            for token in split_tokens(line) {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) if letter.is_alphabetic() => {
                        row.push(letter.to_ascii_uppercase());
                    }
                    _ => {
                        return Err(PuzzleError::BadGridToken {
                            token: token.to_string(),
                            line: line_no + 1,
                        });
                    }
                }
            }
            grid.push(row);
        }

        if grid.is_empty() {
            return Err(PuzzleError::EmptyGrid);
        }

        let expected = grid[0].len();
        for (row, letters) in grid.iter().enumerate() {
            if letters.len() != expected {
                return Err(PuzzleError::JaggedGrid {
                    row,
                    expected,
                    actual: letters.len(),
                });
            }
        }

        // Word section: everything after the blank line.
        let words: Vec<String> = lines
            .flat_map(|(_, line)| split_tokens(line))
            .map(str::to_uppercase)
            .collect();

        if words.is_empty() {
            return Err(PuzzleError::NoWords);
        }

        Ok(Puzzle { grid, words })
    }

    /// Read a puzzle file from disk and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Io`] if the file cannot be read, or any
    /// [`parse_from_str`](Self::parse_from_str) error.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Puzzle, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read puzzle from '{}': {}", path_ref.display(), e),
            )
        })?;
        Self::parse_from_str(&data)
    }

    /// A small built-in demo puzzle.
    pub fn sample() -> Puzzle {
        Puzzle {
            grid: vec![
                vec!['C', 'A', 'T', 'S'],
                vec!['O', 'X', 'E', 'O'],
                vec!['D', 'O', 'G', 'P'],
                vec!['A', 'R', 'T', 'A'],
            ],
            words: vec!["CAT".to_string(), "DOG".to_string(), "TOGA".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let input = "C A T\nX X X\nX X X\n\nCAT DOG";
        let puzzle = Puzzle::parse_from_str(input).unwrap();
        assert_eq!(puzzle.grid.len(), 3);
        assert_eq!(puzzle.grid[0], vec!['C', 'A', 'T']);
        assert_eq!(puzzle.words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_uppercases_everything() {
        let input = "c a t\n\ncat";
        let puzzle = Puzzle::parse_from_str(input).unwrap();
        assert_eq!(puzzle.grid[0], vec!['C', 'A', 'T']);
        assert_eq!(puzzle.words, vec!["CAT"]);
    }

    #[test]
    fn test_parse_accepts_commas_and_mixed_separators() {
        let input = "C,A,T\nX, X ,X\nX X X\n\nCAT, DOG\nTOGA";
        let puzzle = Puzzle::parse_from_str(input).unwrap();
        assert_eq!(puzzle.grid[1], vec!['X', 'X', 'X']);
        assert_eq!(puzzle.words, vec!["CAT", "DOG", "TOGA"]);
    }

    #[test]
    fn test_parse_skips_leading_blank_lines() {
        let input = "\n\nC A\nT S\n\nCATS";
        let puzzle = Puzzle::parse_from_str(input).unwrap();
        assert_eq!(puzzle.grid.len(), 2);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = Puzzle::parse_from_str("").unwrap_err();
        assert_eq!(err.code(), "P001");
        let err = Puzzle::parse_from_str("\n\n\n").unwrap_err();
        assert_eq!(err.code(), "P001");
    }

    #[test]
    fn test_multichar_token_is_rejected() {
        let err = Puzzle::parse_from_str("C AT\n\nCAT").unwrap_err();
        assert_eq!(err.code(), "P002");
        assert!(err.to_string().contains("AT"));
    }

    #[test]
    fn test_non_letter_token_is_rejected() {
        let err = Puzzle::parse_from_str("C 1 T\n\nCAT").unwrap_err();
        assert_eq!(err.code(), "P002");
    }

    #[test]
    fn test_jagged_grid_is_rejected() {
        let err = Puzzle::parse_from_str("C A T\nX X\n\nCAT").unwrap_err();
        assert_eq!(err.code(), "P003");
        match err {
            PuzzleError::JaggedGrid {
                row,
                expected,
                actual,
            } => {
                assert_eq!((row, expected, actual), (1, 3, 2));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_words_are_rejected() {
        let err = Puzzle::parse_from_str("C A T\nX X X").unwrap_err();
        assert_eq!(err.code(), "P004");
        let err = Puzzle::parse_from_str("C A T\nX X X\n\n   \n").unwrap_err();
        assert_eq!(err.code(), "P004");
    }

    #[test]
    fn test_sample_is_well_formed() {
        let puzzle = Puzzle::sample();
        let cols = puzzle.grid[0].len();
        assert!(puzzle.grid.iter().all(|row| row.len() == cols));
        assert!(!puzzle.words.is_empty());
        // The sample must round-trip through the parser's constraints.
        assert!(puzzle
            .grid
            .iter()
            .flatten()
            .all(|c| c.is_alphabetic() && c.is_uppercase()));
    }
}
