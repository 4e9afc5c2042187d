//! Breadth-first traversal: exhaustive dictionary search, targeted
//! single-word search with prefix pruning and duplicate-state elimination,
//! and the tree-building variant used for diagnostics.
//!
//! Every traversal state is a value (cell id + path + word-so-far) owned by
//! the search call; nothing is marked on the shared grid except the
//! persistent `used` flags that targeted searches *read* but never write.

use std::collections::{HashSet, VecDeque};

use instant::Instant;

use crate::dictionary::Dictionary;
use crate::grid::{CellId, Grid};
use crate::outcome::{Algorithm, SearchOutcome};
use crate::path::WordPath;
use crate::trace::TraceSink;
use crate::tree::{ExplorationTree, TreeNodeId};

/// One queued breadth-first state: the frontier cell, the ordered path
/// taken to reach it, and the word accumulated along that path.
struct State {
    cell: CellId,
    path: Vec<CellId>,
    word: String,
}

/// Key identifying a targeted-search state: the visited cell sequence plus
/// the word-so-far. A state whose key was already enqueued is never
/// re-enqueued, which prevents exponential blow-up from multiple paths
/// reaching the same configuration.
type StateKey = (Vec<CellId>, String);

/// Queued state for the tree-building variant, carrying a link back into
/// the exploration tree.
struct TreeState {
    cell: CellId,
    depth: usize,
    word: String,
    node: TreeNodeId,
}

/// Breadth-first search engine.
#[derive(Default)]
pub struct BfsEngine {
    nodes_visited: usize,
    sink: Option<Box<dyn TraceSink>>,
}

impl BfsEngine {
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

    /// Exhaustive search: find every dictionary word, breadth-first from
    /// every cell in row-major order.
    ///
    /// Each starting cell gets an independent exploration. The outer loop
    /// deliberately keeps visiting start cells even once the dictionary is
    /// complete; the per-state completion check stops expansion, and the
    /// visited-node statistics depend on the remaining seed visits.
    pub fn search_all(&mut self, grid: &Grid, dictionary: &mut Dictionary) -> SearchOutcome {
        let start = Instant::now();
        let mut outcome = SearchOutcome::new(Algorithm::BreadthFirst);
        self.nodes_visited = 0;

        for id in grid.ids() {
            self.bfs_from(grid, dictionary, id, &mut outcome);
        }

        outcome.set_elapsed(start.elapsed());
        outcome.set_nodes_visited(self.nodes_visited);
        outcome.set_completed(true);
        outcome
    }

    fn bfs_from(
        &mut self,
        grid: &Grid,
        dictionary: &mut Dictionary,
        start: CellId,
        outcome: &mut SearchOutcome,
    ) {
        let mut queue = VecDeque::new();
        queue.push_back(State {
            cell: start,
            path: vec![start],
            word: grid.cell(start).letter().to_string(),
        });

        while let Some(state) = queue.pop_front() {
            self.nodes_visited += 1;
            let cell = grid.cell(state.cell);
            self.emit(format!(
                "BFS visiting {} letter {} word {}",
                cell.pos(),
                cell.letter(),
                state.word
            ));

            if dictionary.contains(&state.word) && !outcome.is_word_found(&state.word) {
                outcome.record(grid.word_path(&state.path));
                dictionary.mark_found(&state.word);
            }

            // Expand only while some dictionary word is still missing.
            if outcome.found_count() < dictionary.total_count() {
                for &neighbor in grid.cell(state.cell).neighbors() {
                    // Cycle avoidance is per path: the same cell may be
                    // revisited via a different path.
                    if !state.path.contains(&neighbor) {
                        let mut path = state.path.clone();
                        path.push(neighbor);
                        let mut word = state.word.clone();
                        word.push(grid.cell(neighbor).letter());
                        queue.push_back(State {
                            cell: neighbor,
                            path,
                            word,
                        });
                    }
                }
            }
        }
    }

    /// Targeted search: find one occurrence of `word` and return its path.
    ///
    /// Targets shorter than 3 characters are rejected by returning `None`.
    /// The target is uppercased internally. Cells flagged `used` are
    /// excluded both as starts and as expansion steps. The first match in
    /// breadth order wins, which by construction is a shortest path.
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
                    "BFS trying from {} letter {}",
                    cell.pos(),
                    cell.letter()
                ));
                if let Some(found) = self.bfs_target(grid, id, &target) {
                    self.emit(format!("BFS found {}", found));
                    return Some(found);
                }
            }
        }
        None
    }

    fn bfs_target(&mut self, grid: &Grid, start: CellId, target: &str) -> Option<WordPath> {
        let mut queue = VecDeque::new();
        let mut seen: HashSet<StateKey> = HashSet::new();

        let seed = State {
            cell: start,
            path: vec![start],
            word: grid.cell(start).letter().to_string(),
        };
        seen.insert((seed.path.clone(), seed.word.clone()));
        queue.push_back(seed);

        while let Some(state) = queue.pop_front() {
            self.nodes_visited += 1;
            self.emit(format!(
                "BFS visiting {} -> {}",
                grid.cell(state.cell).pos(),
                state.word
            ));

            if state.word == target {
                return Some(grid.word_path(&state.path));
            }

            // Prefix pruning: a state is expanded only while its word can
            // still grow into the target.
            if target.starts_with(&state.word) {
                for &neighbor in grid.cell(state.cell).neighbors() {
                    let ncell = grid.cell(neighbor);
                    if !ncell.is_used() && !state.path.contains(&neighbor) {
                        let mut path = state.path.clone();
                        path.push(neighbor);
                        let mut word = state.word.clone();
                        word.push(ncell.letter());

                        let key = (path.clone(), word.clone());
                        if seen.insert(key) {
                            queue.push_back(State {
                                cell: neighbor,
                                path,
                                word,
                            });
                        }
                    }
                }
            }
        }
        None
    }

    /// Targeted search that also records the visitation order as an
    /// [`ExplorationTree`].
    ///
    /// Unlike [`find_word`](Self::find_word) this ignores `used` flags,
    /// deduplicates on cells (not states), and keeps exploring until the
    /// queue is exhausted so the tree reflects the complete relevant
    /// exploration rather than just the winning path. The tree is returned
    /// only if the target word was seen somewhere during the walk.
    pub fn find_word_with_tree(&mut self, grid: &Grid, word: &str) -> Option<ExplorationTree> {
        let target = word.trim().to_uppercase();
        let first = target.chars().next()?;

        for id in grid.ids() {
            if grid.cell(id).letter() == first {
                if let Some(tree) = self.bfs_tree(grid, id, &target) {
                    return Some(tree);
                }
            }
        }
        None
    }

    fn bfs_tree(&mut self, grid: &Grid, start: CellId, target: &str) -> Option<ExplorationTree> {
        let start_cell = grid.cell(start);
        let seed_word = start_cell.letter().to_string();
        let mut tree = ExplorationTree::new(start_cell.letter(), seed_word.clone(), start_cell.pos());

        let mut visited: HashSet<CellId> = HashSet::new();
        visited.insert(start);

        let mut queue = VecDeque::new();
        queue.push_back(TreeState {
            cell: start,
            depth: 1,
            word: seed_word,
            node: tree.root(),
        });

        let mut word_found = false;

        while let Some(state) = queue.pop_front() {
            if state.word == target {
                word_found = true;
            }

            if target.starts_with(&state.word) {
                for &neighbor in grid.cell(state.cell).neighbors() {
                    if visited.insert(neighbor) {
                        let ncell = grid.cell(neighbor);
                        let mut word = state.word.clone();
                        word.push(ncell.letter());
                        let child = tree.add_child(
                            state.node,
                            ncell.letter(),
                            word.clone(),
                            state.depth,
                            ncell.pos(),
                        );
                        queue.push_back(TreeState {
                            cell: neighbor,
                            depth: state.depth + 1,
                            word,
                            node: child,
                        });
                    }
                }
            }
        }

        word_found.then_some(tree)
    }
}
