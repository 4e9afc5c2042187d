// Library API for the wordgrid word-search engine.
pub mod bfs;
pub mod dfs;
pub mod dictionary;
pub mod errors;
pub mod grid;
pub mod log;
pub mod outcome;
pub mod path;
pub mod puzzle;
pub mod searcher;
pub mod trace;
pub mod tree;

pub use bfs::BfsEngine;
pub use dfs::DfsEngine;
pub use dictionary::Dictionary;
pub use grid::{Grid, Pos};
pub use outcome::{Algorithm, SearchOutcome};
pub use path::{Direction, WordPath};
pub use searcher::WordSearcher;
pub use tree::ExplorationTree;
