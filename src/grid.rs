//! The letter grid as a graph: an arena of cells with Moore-neighborhood
//! adjacency built once at construction.
//!
//! Cells are stored in a flat row-major `Vec` and referenced by [`CellId`]
//! (a plain index), so neighbor lists are indices rather than owning
//! pointers and the structure has no reference cycles. Adjacency is
//! symmetric and immutable after construction.
//!
//! The only mutable per-cell state is the `used` flag, which marks a cell
//! as consumed by a previously accepted word across a *sequence* of
//! single-target searches. It is deliberately persistent: callers clear it
//! with [`Grid::reset`] between independent search sessions. All
//! within-search visited tracking lives in the search calls themselves,
//! never on the shared cells.

use std::fmt;

use crate::path::{PathStep, WordPath};

/// Index of a cell in the grid's flat cell vector.
pub type CellId = usize;

/// The 8 neighbor offsets of the Moore neighborhood, in the fixed
/// geometric order used everywhere: up-left, up, up-right, left, right,
/// down-left, down, down-right. Depth-first traversal breaks ties in this
/// order, so it must not change.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A grid position. Cell identity is the position, not the letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One grid cell: position, letter, neighbor indices, and the persistent
/// `used` flag.
#[derive(Debug, Clone)]
pub struct Cell {
    pos: Pos,
    letter: char,
    neighbors: Vec<CellId>,
    used: bool,
}

impl Cell {
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// Neighbor cell ids in the fixed geometric order of construction.
    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }

    /// Whether this cell was consumed by a previously accepted word.
    pub fn is_used(&self) -> bool {
        self.used
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}:{})", self.pos.row, self.pos.col, self.letter)
    }
}

/// A `rows × cols` grid of cells, immutable in shape after construction.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from a rectangular character matrix and wire up the
    /// Moore-neighborhood adjacency.
    ///
    /// The matrix must be rectangular and non-empty; that is the loader's
    /// contract (see [`crate::puzzle`]), not validated again here. Letters
    /// are stored as given — searches compare them against uppercased
    /// targets, so callers normally provide uppercase matrices.
    pub fn new(matrix: &[Vec<char>]) -> Self {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        debug_assert!(
            matrix.iter().all(|r| r.len() == cols),
            "grid matrix must be rectangular"
        );

        let mut cells = Vec::with_capacity(rows * cols);
        for (i, row) in matrix.iter().enumerate() {
            for (j, &letter) in row.iter().enumerate() {
                cells.push(Cell {
                    pos: Pos::new(i, j),
                    letter,
                    neighbors: Vec::new(),
                    used: false,
                });
            }
        }

        let mut grid = Self { rows, cols, cells };
        grid.connect_cells();
        grid
    }

    /// Populate every cell's neighbor list with the in-bounds members of
    /// its Moore neighborhood.
    fn connect_cells(&mut self) {
        for id in 0..self.cells.len() {
            let Pos { row, col } = self.cells[id].pos;
            let mut neighbors = Vec::with_capacity(8);
            for (dr, dc) in NEIGHBOR_OFFSETS {
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r >= 0 && (r as usize) < self.rows && c >= 0 && (c as usize) < self.cols {
                    neighbors.push(self.id_at(r as usize, c as usize));
                }
            }
            self.cells[id].neighbors = neighbors;
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell id for a position. Row-major: `row * cols + col`.
    pub fn id_at(&self, row: usize, col: usize) -> CellId {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    pub fn cell_at(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.id_at(row, col)]
    }

    /// All cell ids in row-major scan order. Searches iterate this order,
    /// which is what makes results reproducible.
    pub fn ids(&self) -> std::ops::Range<CellId> {
        0..self.cells.len()
    }

    /// Mark one cell as consumed by an accepted word.
    pub fn mark_used(&mut self, id: CellId) {
        self.cells[id].used = true;
    }

    /// Mark every cell on a found path as consumed, so later single-target
    /// searches in the same session cannot reuse them.
    pub fn mark_path_used(&mut self, path: &WordPath) {
        for step in path.steps() {
            let id = self.id_at(step.pos.row, step.pos.col);
            self.cells[id].used = true;
        }
    }

    /// Clear every `used` flag. Call between independent search sessions.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.used = false;
        }
    }

    /// Snapshot a sequence of cell ids into an owned [`WordPath`].
    pub(crate) fn word_path(&self, ids: &[CellId]) -> WordPath {
        WordPath::new(
            ids.iter()
                .map(|&id| {
                    let cell = &self.cells[id];
                    PathStep {
                        pos: cell.pos,
                        letter: cell.letter,
                    }
                })
                .collect(),
        )
    }
}
