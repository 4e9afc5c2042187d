//! Depth-first traversal with explicit backtracking: exhaustive dictionary
//! search and targeted single-word search with prefix pruning.
//!
//! The recursion mutates its path and word in place and undoes both on the
//! way out, so failed branches leave no residue. The targeted variant
//! additionally keeps a fresh per-start visited matrix; nothing is ever
//! marked on the shared grid.

use instant::Instant;

use crate::dictionary::Dictionary;
use crate::grid::{CellId, Grid};
use crate::outcome::{Algorithm, SearchOutcome};
use crate::path::WordPath;
use crate::trace::TraceSink;

/// Depth-first search engine.
#[derive(Default)]
pub struct DfsEngine {
    nodes_visited: usize,
    sink: Option<Box<dyn TraceSink>>,
}

impl DfsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a sink receiving one trace line per node visit.
    pub fn set_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.sink = Some(sink);
    }

    /// Nodes visited by the most recent targeted search.
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    fn emit(&mut self, line: String) {
        if let Some(sink) = &mut self.sink {
            sink.trace(&line);
        }
    }

    /// Exhaustive search: find every dictionary word, depth-first from
    /// every cell in row-major order.
    ///
    /// Same outer-loop behavior as the breadth-first engine: start cells
    /// keep being visited after the dictionary is complete, only expansion
    /// stops. Visited-node statistics depend on this.
    pub fn search_all(&mut self, grid: &Grid, dictionary: &mut Dictionary) -> SearchOutcome {
        let start = Instant::now();
        let mut outcome = SearchOutcome::new(Algorithm::DepthFirst);
        self.nodes_visited = 0;

        let mut path: Vec<CellId> = Vec::new();
        let mut word = String::new();
        for id in grid.ids() {
            self.dfs_from(grid, dictionary, id, &mut path, &mut word, &mut outcome);
            debug_assert!(path.is_empty() && word.is_empty(), "backtracking residue");
        }

        outcome.set_elapsed(start.elapsed());
        outcome.set_nodes_visited(self.nodes_visited);
        outcome.set_completed(true);
        outcome
    }

    fn dfs_from(
        &mut self,
        grid: &Grid,
        dictionary: &mut Dictionary,
        cell: CellId,
        path: &mut Vec<CellId>,
        word: &mut String,
        outcome: &mut SearchOutcome,
    ) {
        // Cycle avoidance: a cell appears at most once per candidate path.
        if path.contains(&cell) {
            return;
        }

        self.nodes_visited += 1;
        path.push(cell);
        let current = grid.cell(cell);
        word.push(current.letter());
        self.emit(format!(
            "DFS visiting {} letter {} word {}",
            current.pos(),
            current.letter(),
            word
        ));

        if dictionary.contains(word) && !outcome.is_word_found(word) {
            outcome.record(grid.word_path(path));
            dictionary.mark_found(word);
        }

        if outcome.found_count() < dictionary.total_count() {
            for &neighbor in grid.cell(cell).neighbors() {
                self.dfs_from(grid, dictionary, neighbor, path, word, outcome);
            }
        }

        // Mandatory backtrack so sibling branches can reuse this cell.
        path.pop();
        word.pop();
    }

    /// Targeted search: find one occurrence of `word` and return its path.
    ///
    /// Targets shorter than 3 characters are rejected by returning `None`.
    /// The target is uppercased internally. Cells flagged `used` are
    /// excluded. Neighbors are tried in the grid's fixed geometric order,
    /// and the first successful branch wins.
    pub fn find_word(&mut self, grid: &Grid, word: &str) -> Option<WordPath> {
        let target = word.trim().to_uppercase();
        if target.chars().count() < 3 {
            return None;
        }
        let first = target.chars().next()?;
        self.nodes_visited = 0;

        for id in grid.ids() {
            let cell = grid.cell(id);
            if cell.letter() == first && !cell.is_used() {
                self.emit(format!(
                    "DFS trying from {} letter {}",
                    cell.pos(),
                    cell.letter()
                ));
                let mut path: Vec<CellId> = Vec::new();
                let mut current = String::new();
                // Fresh within-search visited matrix per starting cell.
                let mut visited = vec![false; grid.len()];
                if let Some(found) =
                    self.dfs_target(grid, id, &mut path, &mut current, &target, &mut visited)
                {
                    self.emit(format!("DFS found {}", found));
                    return Some(found);
                }
            }
        }
        None
    }

    fn dfs_target(
        &mut self,
        grid: &Grid,
        cell: CellId,
        path: &mut Vec<CellId>,
        word: &mut String,
        target: &str,
        visited: &mut [bool],
    ) -> Option<WordPath> {
        let current = grid.cell(cell);
        if current.is_used() || visited[cell] {
            return None;
        }

        self.nodes_visited += 1;
        visited[cell] = true;
        path.push(cell);
        word.push(current.letter());
        self.emit(format!("DFS visiting {} -> {}", current.pos(), word));

        if word.as_str() == target {
            // Success propagates straight up; the caller unwinds without
            // further backtracking at this point.
            return Some(grid.word_path(path));
        }

        // Prefix pruning: this branch can no longer grow into the target.
        if !target.starts_with(word.as_str()) {
            path.pop();
            word.pop();
            visited[cell] = false;
            return None;
        }

        for &neighbor in grid.cell(cell).neighbors() {
            if !grid.cell(neighbor).is_used() && !visited[neighbor] {
                if let Some(found) =
                    self.dfs_target(grid, neighbor, path, word, target, visited)
                {
                    return Some(found);
                }
            }
        }

        path.pop();
        word.pop();
        visited[cell] = false;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::BfsEngine;
    use crate::path::Direction;
    use std::collections::HashSet;

    fn cat_grid() -> Grid {
        Grid::new(&[
            vec!['C', 'A', 'T'],
            vec!['X', 'X', 'X'],
            vec!['X', 'X', 'X'],
        ])
    }

    #[test]
    fn test_find_word_cat() {
        let grid = cat_grid();
        let mut engine = DfsEngine::new();
        let path = engine.find_word(&grid, "cat").expect("CAT should be found");
        assert_eq!(path.word(), "CAT");
        assert_eq!(path.direction(), Direction::HorizontalRight);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_find_missing_word_returns_none() {
        let grid = cat_grid();
        let mut engine = DfsEngine::new();
        assert!(engine.find_word(&grid, "DOG").is_none());
    }

    #[test]
    fn test_short_target_is_rejected() {
        let grid = cat_grid();
        let mut engine = DfsEngine::new();
        assert!(engine.find_word(&grid, "AB").is_none());
        assert_eq!(engine.nodes_visited(), 0);
    }

    #[test]
    fn test_used_cells_are_skipped() {
        let mut grid = cat_grid();
        grid.mark_used(grid.id_at(0, 2));
        let mut engine = DfsEngine::new();
        assert!(engine.find_word(&grid, "CAT").is_none());
    }

    #[test]
    fn test_search_all_finds_cat_and_at() {
        let grid = cat_grid();
        let mut dictionary = Dictionary::from_words(["CAT", "AT"]);
        let mut engine = DfsEngine::new();
        let outcome = engine.search_all(&grid, &mut dictionary);

        assert!(outcome.is_word_found("CAT"));
        assert!(outcome.is_word_found("AT"));
        assert_eq!(outcome.found_count(), 2);
        assert_eq!(outcome.algorithm(), Algorithm::DepthFirst);
        assert!(outcome.completed());
    }

    #[test]
    fn test_engines_agree_on_found_word_set() {
        let grid = Grid::new(&[
            vec!['C', 'A', 'T', 'S'],
            vec!['O', 'X', 'E', 'O'],
            vec!['D', 'O', 'G', 'P'],
            vec!['A', 'R', 'T', 'A'],
        ]);
        let words = ["CAT", "DOG", "TOGA", "ART", "ZEBRA"];

        let mut bfs_dict = Dictionary::from_words(words);
        let mut bfs = BfsEngine::new();
        let bfs_outcome = bfs.search_all(&grid, &mut bfs_dict);

        let mut dfs_dict = Dictionary::from_words(words);
        let mut dfs = DfsEngine::new();
        let dfs_outcome = dfs.search_all(&grid, &mut dfs_dict);

        let bfs_found: HashSet<&str> = bfs_outcome.found_words().into_iter().collect();
        let dfs_found: HashSet<&str> = dfs_outcome.found_words().into_iter().collect();
        assert_eq!(bfs_found, dfs_found);
        assert!(bfs_found.contains("CAT"));
        assert!(bfs_found.contains("DOG"));
        assert!(bfs_found.contains("TOGA"));
        assert!(!bfs_found.contains("ZEBRA"));
    }

    #[test]
    fn test_failed_search_leaves_no_residue() {
        let grid = cat_grid();
        let mut engine = DfsEngine::new();
        // "CA" exists but no Q does, so every branch backtracks to failure.
        assert!(engine.find_word(&grid, "CAQ").is_none());
        assert!(engine.nodes_visited() > 0);
        // Shared state untouched: same search still succeeds afterwards.
        assert!(grid.ids().all(|id| !grid.cell(id).is_used()));
        assert!(engine.find_word(&grid, "CAT").is_some());
    }

    #[test]
    fn test_found_path_has_distinct_mutually_adjacent_cells() {
        let grid = Grid::new(&[
            vec!['R', 'U', 'X'],
            vec!['X', 'S', 'T'],
            vec!['X', 'X', 'X'],
        ]);
        let mut engine = DfsEngine::new();
        let path = engine.find_word(&grid, "RUST").unwrap();

        let ids: Vec<_> = path
            .steps()
            .iter()
            .map(|s| grid.id_at(s.pos.row, s.pos.col))
            .collect();
        let distinct: HashSet<_> = ids.iter().collect();
        assert_eq!(distinct.len(), ids.len());
        for pair in ids.windows(2) {
            assert!(grid.cell(pair[0]).neighbors().contains(&pair[1]));
        }
    }
}
