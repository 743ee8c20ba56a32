//! Snake Cube Solver
//!
//! Folds a snake cube: a chain of straight segments joined by elastic that
//! has to be bent into a solid cube. The solver finds one valid fold by
//! depth-first search, prints it as `3F/2D/...` plus a layer-by-layer grid,
//! and can show it in an interactive 3D viewer.

mod visualization;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snake_cube::snake::{find_preset, PUZZLES};
use snake_cube::{decode, encode, grid, validity, Solution, SolveError, Solver, Step};

const DEFAULT_PRESET: &str = "classic";

/// Solves snake cube puzzles.
#[derive(Parser)]
#[command(name = "snake-cube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle and print the answer.
    Solve {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        /// Print only the encoded answer.
        #[arg(long)]
        no_grid: bool,
    },
    /// Solve a puzzle and show the fold in an interactive 3D viewer.
    Display {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },
    /// Check whether an encoded answer folds into a cube.
    Check {
        /// Encoded answer, e.g. 3F/2D/2B.
        answer: String,
        /// Target cube size.
        #[arg(long)]
        size: u32,
        /// Expected segment lengths in solving order, comma-separated.
        #[arg(long, value_delimiter = ',')]
        lengths: Option<Vec<u32>>,
    },
    /// List the built-in puzzles.
    List,
}

/// Which puzzle to solve and how hard to try.
#[derive(Args)]
struct PuzzleArgs {
    /// Built-in puzzle to solve (see `list`).
    #[arg(long, default_value = DEFAULT_PRESET)]
    preset: String,
    /// Custom segment lengths, comma-separated. Overrides --preset.
    #[arg(long, value_delimiter = ',', requires = "size")]
    lengths: Option<Vec<u32>>,
    /// Target cube size. Required with --lengths, overrides the preset's size otherwise.
    #[arg(long)]
    size: Option<u32>,
    /// Reverse the lengths first, for chains listed from the other end.
    #[arg(long)]
    reverse: bool,
    /// Give up after this many search iterations.
    #[arg(long)]
    max_iterations: Option<usize>,
}

impl Default for PuzzleArgs {
    fn default() -> Self {
        Self {
            preset: DEFAULT_PRESET.to_string(),
            lengths: None,
            size: None,
            reverse: false,
            max_iterations: None,
        }
    }
}

/// A puzzle ready for the solver, either a preset or user supplied.
#[derive(Debug, PartialEq)]
struct ResolvedPuzzle {
    name: String,
    lengths: Vec<u32>,
    size: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Command::Solve {
        puzzle: PuzzleArgs::default(),
        no_grid: false,
    });

    match command {
        Command::Solve { puzzle, no_grid } => {
            let resolved = resolve_puzzle(&puzzle)?;
            let solution = run_solver(&resolved, puzzle.max_iterations)?;
            print!("{}", format_report(solution.as_deref(), !no_grid));
        }
        Command::Display { puzzle } => {
            let resolved = resolve_puzzle(&puzzle)?;
            match run_solver(&resolved, puzzle.max_iterations)? {
                Some(solution) => {
                    println!("{}", encode(&solution));
                    println!("Controls: Left/Right fold, Up/Down explode, R reset");
                    visualization::display(&resolved.name, solution);
                }
                None => println!("{}", format_report(None, false).trim_end()),
            }
        }
        Command::Check {
            answer,
            size,
            lengths,
        } => run_check(&answer, size, lengths.as_deref())?,
        Command::List => print!("{}", format_presets()),
    }

    Ok(())
}

/// Installs a stderr subscriber. `-v` flags win over `RUST_LOG`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Turns command-line arguments into lengths and a size.
fn resolve_puzzle(args: &PuzzleArgs) -> Result<ResolvedPuzzle> {
    let mut resolved = match &args.lengths {
        Some(lengths) => ResolvedPuzzle {
            name: "custom".to_string(),
            lengths: lengths.clone(),
            size: args.size.context("--size is required with --lengths")?,
        },
        None => {
            let preset = find_preset(&args.preset).with_context(|| {
                format!(
                    "unknown preset {:?}; run `snake-cube list` for the built-in puzzles",
                    args.preset
                )
            })?;
            ResolvedPuzzle {
                name: preset.name.to_string(),
                lengths: preset.lengths.to_vec(),
                size: args.size.unwrap_or(preset.size),
            }
        }
    };

    if args.reverse {
        resolved.lengths.reverse();
    }
    Ok(resolved)
}

/// Runs the search. An exhausted search is `Ok(None)`; bad input and the
/// iteration cap are errors.
fn run_solver(puzzle: &ResolvedPuzzle, max_iterations: Option<usize>) -> Result<Option<Solution>> {
    let mut solver = Solver::new(&puzzle.lengths, puzzle.size);
    if let Some(limit) = max_iterations {
        solver = solver.with_max_iterations(limit);
    }

    let result = solver.solve();
    let stats = solver.stats();
    info!(
        puzzle = %puzzle.name,
        explored = stats.explored,
        pruned = stats.pruned,
        max_frontier = stats.max_frontier,
        "search finished"
    );

    match result {
        Ok(solution) => Ok(Some(solution)),
        Err(SolveError::Exhausted { .. }) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to solve {}", puzzle.name)),
    }
}

/// Formats the answer line, optionally followed by the layer grid.
fn format_report(solution: Option<&[Step]>, show_grid: bool) -> String {
    let Some(solution) = solution else {
        return "no solution found\n".to_string();
    };

    let mut output = encode(solution);
    output.push('\n');
    if show_grid {
        output.push_str(&grid::format_solution(solution));
    }
    output
}

/// Validates an encoded answer, printing the grid if it folds correctly.
fn run_check(answer: &str, size: u32, lengths: Option<&[u32]>) -> Result<()> {
    let solution = decode(answer).context("could not parse answer")?;

    if let Some(expected) = lengths {
        let actual: Vec<u32> = solution.iter().map(|step| step.length).collect();
        if actual != expected {
            bail!("answer lengths {actual:?} do not match expected {expected:?}");
        }
    }

    if let Err(violation) = validity::check(&solution, size) {
        bail!("invalid fold: {violation}");
    }

    println!("valid: {} segments fit a {size}x{size}x{size} cube", solution.len());
    print!("{}", grid::format_solution(&solution));
    Ok(())
}

/// One line per built-in puzzle.
fn format_presets() -> String {
    PUZZLES
        .iter()
        .map(|puzzle| {
            format!(
                "{:<8} {size}x{size}x{size}  {} segments, {} cubes\n",
                puzzle.name,
                puzzle.lengths.len(),
                puzzle.cell_count(),
                size = puzzle.size
            )
        })
        .collect()
}
