//! Aggregated result of one exhaustive search run.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::path::WordPath;

/// Which traversal discipline produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::BreadthFirst => "BFS",
            Algorithm::DepthFirst => "DFS",
        })
    }
}

/// All word paths found in one run, plus run statistics.
///
/// Paths are keyed by word and the first recorded occurrence wins: a second
/// path for an already-recorded word is never stored. Created fresh per
/// search invocation; only the search itself mutates it.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    paths: Vec<WordPath>,
    by_word: HashMap<String, usize>,
    algorithm: Algorithm,
    elapsed: Duration,
    nodes_visited: usize,
    completed: bool,
}

impl SearchOutcome {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            paths: Vec::new(),
            by_word: HashMap::new(),
            algorithm,
            elapsed: Duration::ZERO,
            nodes_visited: 0,
            completed: false,
        }
    }

    /// Record a found path. First occurrence wins; a path for an
    /// already-recorded word is dropped.
    pub(crate) fn record(&mut self, path: WordPath) {
        let word = path.word().to_string();
        if self.by_word.contains_key(&word) {
            return;
        }
        self.by_word.insert(word, self.paths.len());
        self.paths.push(path);
    }

    pub(crate) fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub(crate) fn set_nodes_visited(&mut self, nodes_visited: usize) {
        self.nodes_visited = nodes_visited;
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn paths(&self) -> &[WordPath] {
        &self.paths
    }

    pub fn path_for(&self, word: &str) -> Option<&WordPath> {
        self.by_word
            .get(&word.trim().to_uppercase())
            .map(|&i| &self.paths[i])
    }

    pub fn is_word_found(&self, word: &str) -> bool {
        self.by_word.contains_key(&word.trim().to_uppercase())
    }

    pub fn found_words(&self) -> Vec<&str> {
        self.paths.iter().map(WordPath::word).collect()
    }

    pub fn found_count(&self) -> usize {
        self.paths.len()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Whether the run ran to completion (always true for a returned
    /// outcome; false only for the empty placeholder of an unconfigured
    /// facade).
    pub fn completed(&self) -> bool {
        self.completed
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Results:")?;
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Words found: {}", self.found_count())?;
        writeln!(f, "Search time: {} ms", self.elapsed.as_millis())?;
        writeln!(f, "Nodes visited: {}", self.nodes_visited)?;
        writeln!(f, "Completed: {}", self.completed)?;

        if !self.paths.is_empty() {
            writeln!(f, "\nFound words:")?;
            for path in &self.paths {
                writeln!(f, "- {path}")?;
            }
        }
        Ok(())
    }
}
