use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use wordgrid::errors::PuzzleError;
use wordgrid::puzzle::Puzzle;
use wordgrid::trace::LogSink;
use wordgrid::{Algorithm, Dictionary, WordSearcher};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Bfs,
    Dfs,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bfs => Algorithm::BreadthFirst,
            AlgorithmArg::Dfs => Algorithm::DepthFirst,
        }
    }
}

/// Wordgrid puzzle solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the puzzle file (grid lines, a blank line, then target words)
    puzzle: Option<String>,

    /// Use the built-in sample puzzle instead of a file
    #[arg(long)]
    sample: bool,

    /// Traversal algorithm to run
    #[arg(short, long, value_enum, default_value = "bfs")]
    algorithm: AlgorithmArg,

    /// Search for one word instead of the whole dictionary
    #[arg(short, long)]
    find: Option<String>,

    /// Print the breadth-first exploration tree for --find
    #[arg(long, requires = "find")]
    tree: bool,

    /// Emit the exploration tree as Graphviz DOT instead of ASCII
    #[arg(long, requires = "tree")]
    dot: bool,
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them in a
/// user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    log::info!("Starting wordgrid solver");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a PuzzleError
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordgrid CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the puzzle (file or built-in sample).
/// 3. Run the exhaustive search, or a single-target search with `--find`.
/// 4. Print results on stdout and diagnostics (timings, counts) on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Load the puzzle
    let t_load = Instant::now();
    let puzzle = if cli.sample {
        Puzzle::sample()
    } else if let Some(path) = &cli.puzzle {
        Puzzle::load_from_path(path)?
    } else {
        return Err("no puzzle given (pass a file path or --sample)".into());
    };
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Build the searcher
    let mut searcher = WordSearcher::new();
    searcher.set_grid(&puzzle.grid);
    searcher.set_dictionary(Dictionary::from_words(&puzzle.words));
    searcher.bfs_mut().set_sink(Box::new(LogSink));
    searcher.dfs_mut().set_sink(Box::new(LogSink));

    let algorithm = Algorithm::from(cli.algorithm);

    if let Some(word) = &cli.find {
        // 3a. Single-target search
        match searcher.find_word(word, algorithm) {
            Some(path) => println!("{path}"),
            None => println!("\"{}\" not found", word.trim().to_uppercase()),
        }

        if cli.tree {
            match searcher.find_word_with_tree(word) {
                Some(tree) => {
                    if cli.dot {
                        print!("{}", tree.to_dot());
                    } else {
                        print!("{}", tree.render_ascii());
                    }
                }
                None => eprintln!("no exploration tree: word not found"),
            }
        }
    } else {
        // 3b. Exhaustive search over the whole dictionary
        let outcome = searcher.search(algorithm);
        print!("{outcome}");

        let remaining = searcher.dictionary().remaining_words();
        if !remaining.is_empty() {
            println!("\nMissing words:");
            for word in remaining {
                println!("- {word}");
            }
        }
    }

    // 4. Diagnostics to stderr
    eprintln!(
        "Loaded {}x{} grid with {} words in {:.3}s.",
        puzzle.grid.len(),
        puzzle.grid.first().map_or(0, Vec::len),
        puzzle.words.len(),
        load_secs
    );

    Ok(())
}
