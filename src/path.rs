//! Found-word paths and their derived direction labels.
//!
//! A [`WordPath`] is a non-empty ordered sequence of distinct cells whose
//! letters concatenate to a found word. Distinctness is enforced by the
//! searches that build paths, not re-validated here. The word text and the
//! geometric [`Direction`] are derived once at construction from the steps.

use std::fmt;

use crate::grid::Pos;

/// One step of a path: the cell's position and its letter, snapshotted at
/// the time the path was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub pos: Pos,
    pub letter: char,
}

/// Geometric direction of a path, classified from its endpoints.
///
/// `NotApplicable` covers paths shorter than 2 steps. `Complex` covers
/// displacements that are neither purely axis-aligned nor purely diagonal
/// (equal row and column magnitude), i.e. the path bends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HorizontalRight,
    HorizontalLeft,
    VerticalDown,
    VerticalUp,
    DiagonalDownRight,
    DiagonalDownLeft,
    DiagonalUpRight,
    DiagonalUpLeft,
    NotApplicable,
    Complex,
}

impl Direction {
    /// Classify the endpoint displacement of a path.
    fn from_endpoints(start: Pos, end: Pos) -> Self {
        let delta_row = end.row as isize - start.row as isize;
        let delta_col = end.col as isize - start.col as isize;

        match (delta_row, delta_col) {
            (0, c) if c > 0 => Direction::HorizontalRight,
            (0, c) if c < 0 => Direction::HorizontalLeft,
            (r, 0) if r > 0 => Direction::VerticalDown,
            (r, 0) if r < 0 => Direction::VerticalUp,
            (r, c) if r.abs() == c.abs() => match (r > 0, c > 0) {
                (true, true) => Direction::DiagonalDownRight,
                (true, false) => Direction::DiagonalDownLeft,
                (false, true) => Direction::DiagonalUpRight,
                (false, false) => Direction::DiagonalUpLeft,
            },
            _ => Direction::Complex,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::HorizontalRight => "Horizontal Right",
            Direction::HorizontalLeft => "Horizontal Left",
            Direction::VerticalDown => "Vertical Down",
            Direction::VerticalUp => "Vertical Up",
            Direction::DiagonalDownRight => "Diagonal Down-Right",
            Direction::DiagonalDownLeft => "Diagonal Down-Left",
            Direction::DiagonalUpRight => "Diagonal Up-Right",
            Direction::DiagonalUpLeft => "Diagonal Up-Left",
            Direction::NotApplicable => "N/A",
            Direction::Complex => "Complex",
        };
        f.write_str(label)
    }
}

/// An ordered sequence of cells describing one occurrence of a word.
///
/// The derived `word` and `direction` are computed once at construction and
/// stay consistent with the steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPath {
    steps: Vec<PathStep>,
    word: String,
    direction: Direction,
}

impl WordPath {
    pub fn new(steps: Vec<PathStep>) -> Self {
        let word: String = steps.iter().map(|s| s.letter).collect();
        let direction = if steps.len() < 2 {
            Direction::NotApplicable
        } else {
            Direction::from_endpoints(steps[0].pos, steps[steps.len() - 1].pos)
        };
        Self {
            steps,
            word,
            direction,
        }
    }

    /// The word formed by the path's letters.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn start(&self) -> Option<Pos> {
        self.steps.first().map(|s| s.pos)
    }

    pub fn end(&self) -> Option<Pos> {
        self.steps.last().map(|s| s.pos)
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for WordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => write!(
                f,
                "Word: {}, Start: {}, End: {}, Direction: {}",
                self.word, start, end, self.direction
            ),
            _ => f.write_str("Empty path"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(coords: &[(usize, usize)], word: &str) -> WordPath {
        WordPath::new(
            coords
                .iter()
                .zip(word.chars())
                .map(|(&(row, col), letter)| PathStep {
                    pos: Pos::new(row, col),
                    letter,
                })
                .collect(),
        )
    }

    #[test]
    fn test_word_is_concatenated_letters() {
        let p = path(&[(0, 0), (0, 1), (0, 2)], "CAT");
        assert_eq!(p.word(), "CAT");
        assert_eq!(p.len(), 3);
        assert_eq!(p.start(), Some(Pos::new(0, 0)));
        assert_eq!(p.end(), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_axis_aligned_directions() {
        assert_eq!(
            path(&[(0, 0), (0, 1), (0, 2)], "CAT").direction(),
            Direction::HorizontalRight
        );
        assert_eq!(
            path(&[(0, 2), (0, 1), (0, 0)], "TAC").direction(),
            Direction::HorizontalLeft
        );
        assert_eq!(
            path(&[(0, 0), (1, 0), (2, 0)], "CAT").direction(),
            Direction::VerticalDown
        );
        assert_eq!(
            path(&[(2, 0), (1, 0), (0, 0)], "TAC").direction(),
            Direction::VerticalUp
        );
    }

    #[test]
    fn test_diagonal_directions() {
        assert_eq!(
            path(&[(0, 0), (1, 1), (2, 2)], "CAT").direction(),
            Direction::DiagonalDownRight
        );
        assert_eq!(
            path(&[(0, 2), (1, 1), (2, 0)], "CAT").direction(),
            Direction::DiagonalDownLeft
        );
        assert_eq!(
            path(&[(2, 0), (1, 1), (0, 2)], "CAT").direction(),
            Direction::DiagonalUpRight
        );
        assert_eq!(
            path(&[(2, 2), (1, 1), (0, 0)], "CAT").direction(),
            Direction::DiagonalUpLeft
        );
    }

    #[test]
    fn test_short_path_is_not_applicable() {
        assert_eq!(path(&[(0, 0)], "C").direction(), Direction::NotApplicable);
    }

    #[test]
    fn test_bent_path_is_complex() {
        // Endpoint displacement (1,2): neither axis-aligned nor diagonal.
        assert_eq!(
            path(&[(0, 0), (0, 1), (1, 2)], "CAT").direction(),
            Direction::Complex
        );
    }

    #[test]
    fn test_display_format() {
        let p = path(&[(0, 0), (0, 1), (0, 2)], "CAT");
        assert_eq!(
            p.to_string(),
            "Word: CAT, Start: (0,0), End: (0,2), Direction: Horizontal Right"
        );
    }

    #[test]
    fn test_empty_path_display() {
        let p = WordPath::new(Vec::new());
        assert!(p.is_empty());
        assert_eq!(p.to_string(), "Empty path");
        assert_eq!(p.direction(), Direction::NotApplicable);
    }
}
