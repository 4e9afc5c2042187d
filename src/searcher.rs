//! The coordinating facade: one place that owns the grid, the dictionary,
//! and both engines, for callers that drive a whole puzzle session.
//!
//! A session that accepts words one at a time marks each accepted path
//! used ([`WordSearcher::mark_path_used`]) so later single-target searches
//! cannot reuse those cells, and calls [`WordSearcher::reset`] before the
//! next independent session. Access to a shared searcher must be
//! serialized by the caller; nothing here is synchronized.

use crate::bfs::BfsEngine;
use crate::dfs::DfsEngine;
use crate::dictionary::Dictionary;
use crate::grid::Grid;
use crate::outcome::{Algorithm, SearchOutcome};
use crate::path::WordPath;
use crate::tree::ExplorationTree;

/// Coordinates grid, dictionary, and the two search engines.
#[derive(Default)]
pub struct WordSearcher {
    grid: Option<Grid>,
    dictionary: Dictionary,
    bfs: BfsEngine,
    dfs: DfsEngine,
}

impl WordSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the grid graph from a character matrix.
    pub fn set_grid(&mut self, matrix: &[Vec<char>]) {
        self.grid = Some(Grid::new(matrix));
    }

    pub fn set_dictionary(&mut self, dictionary: Dictionary) {
        self.dictionary = dictionary;
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn bfs_mut(&mut self) -> &mut BfsEngine {
        &mut self.bfs
    }

    pub fn dfs_mut(&mut self) -> &mut DfsEngine {
        &mut self.dfs
    }

    /// Whether a grid is set and at least one target word is loaded.
    pub fn is_ready(&self) -> bool {
        self.grid.is_some() && !self.dictionary.is_empty()
    }

    /// Exhaustive search for every dictionary word with the chosen
    /// algorithm. Returns an empty outcome if no grid is set.
    pub fn search(&mut self, algorithm: Algorithm) -> SearchOutcome {
        let Some(grid) = self.grid.as_ref() else {
            return SearchOutcome::new(algorithm);
        };
        match algorithm {
            Algorithm::BreadthFirst => self.bfs.search_all(grid, &mut self.dictionary),
            Algorithm::DepthFirst => self.dfs.search_all(grid, &mut self.dictionary),
        }
    }

    /// Single-target search with the chosen algorithm. Returns `None` if
    /// no grid is set, the word is shorter than 3 characters, or the word
    /// is not in the grid.
    pub fn find_word(&mut self, word: &str, algorithm: Algorithm) -> Option<WordPath> {
        let grid = self.grid.as_ref()?;
        match algorithm {
            Algorithm::BreadthFirst => self.bfs.find_word(grid, word),
            Algorithm::DepthFirst => self.dfs.find_word(grid, word),
        }
    }

    /// Single-target breadth-first search that also returns the
    /// exploration tree. Breadth-first only.
    pub fn find_word_with_tree(&mut self, word: &str) -> Option<ExplorationTree> {
        let grid = self.grid.as_ref()?;
        self.bfs.find_word_with_tree(grid, word)
    }

    /// Mark an accepted path's cells as consumed for the rest of the
    /// session.
    pub fn mark_path_used(&mut self, path: &WordPath) {
        if let Some(grid) = self.grid.as_mut() {
            grid.mark_path_used(path);
        }
    }

    /// Clear per-session state: every cell's `used` flag and every
    /// dictionary found flag.
    pub fn reset(&mut self) {
        if let Some(grid) = self.grid.as_mut() {
            grid.reset();
        }
        self.dictionary.reset_found();
    }
}
