//! # Beeline Main Entry Point
//!
//! Parses a planning request from a file, standard input, or the random
//! scenario generator, runs the direction planner, and renders the result
//! as text or JSON.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, LevelFilter};

use beeline::generation::{self, GenerationConfig};
use beeline::{
    config, input, rendering, BeelineError, BeelineResult, DirectionPlanner, Grid, PathReport,
    Position, StepReport,
};

/// Command line arguments for the beeline planner.
#[derive(Parser, Debug)]
#[command(name = "beeline")]
#[command(about = "Plans cardinal moves from an origin marker to a target marker on a grid")]
#[command(version)]
struct Args {
    /// Read the request from a file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Emit only the single next move instead of the full path
    #[arg(long)]
    step: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: String,

    /// Generate a random grid of the given size instead of reading input
    #[arg(long, value_name = "SIZE")]
    random: Option<usize>,

    /// Random seed for --random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> BeelineResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting beeline v{}", beeline::VERSION);

    let format = parse_format(&args.format)?;
    let planner = DirectionPlanner::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.step {
        let (origin, grid) = acquire_step_request(&args, &planner)?;
        run_step(&planner, &grid, origin, format, &mut out)
    } else {
        let grid = acquire_grid(&args)?;
        run_full_path(&planner, &grid, format, &mut out)
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

fn parse_format(format: &str) -> BeelineResult<OutputFormat> {
    match format.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(BeelineError::InvalidInput(format!(
            "unknown output format '{}'",
            other
        ))),
    }
}

/// Opens the request source chosen by the arguments.
fn open_reader(args: &Args) -> BeelineResult<Box<dyn BufRead>> {
    match &args.input {
        Some(path) => {
            info!("Reading request from {}", path.display());
            Ok(Box::new(BufReader::new(File::open(path)?)))
        }
        None => {
            info!("Reading request from standard input");
            Ok(Box::new(BufReader::new(io::stdin())))
        }
    }
}

/// Produces the grid for a full-path run, either generated or read.
fn acquire_grid(args: &Args) -> BeelineResult<Grid> {
    if let Some(size) = args.random {
        let seed = args.seed.unwrap_or(config::DEFAULT_DEMO_SEED);
        info!("Generating random {}x{} grid with seed {}", size, size, seed);
        return generation::generate_grid(&GenerationConfig::new(size, seed));
    }
    input::read_path_request(open_reader(args)?)
}

/// Produces the origin and grid for a step run.
///
/// A generated grid carries the origin marker, so in random mode the
/// origin is read back off the grid instead of from an input line.
fn acquire_step_request(
    args: &Args,
    planner: &DirectionPlanner,
) -> BeelineResult<(Position, Grid)> {
    if let Some(size) = args.random {
        let seed = args.seed.unwrap_or(config::DEFAULT_DEMO_SEED);
        info!("Generating random {}x{} grid with seed {}", size, size, seed);
        let grid = generation::generate_grid(&GenerationConfig::new(size, seed))?;
        let origin = grid.locate(planner.markers().origin)?;
        return Ok((origin, grid));
    }
    input::read_step_request(open_reader(args)?)
}

fn run_full_path<W: Write>(
    planner: &DirectionPlanner,
    grid: &Grid,
    format: OutputFormat,
    out: &mut W,
) -> BeelineResult<()> {
    debug!("Planning full path over grid:\n{}", grid);

    let moves = planner.plan_full_path(grid)?;
    info!("Planned {} moves", moves.len());

    match format {
        OutputFormat::Text => rendering::write_moves(&moves, out),
        OutputFormat::Json => {
            let origin = grid.locate(planner.markers().origin)?;
            let target = grid.locate(planner.markers().target)?;
            let report = PathReport::new(origin, target, moves);
            writeln!(out, "{}", report.to_json()?)?;
            Ok(())
        }
    }
}

fn run_step<W: Write>(
    planner: &DirectionPlanner,
    grid: &Grid,
    origin: Position,
    format: OutputFormat,
    out: &mut W,
) -> BeelineResult<()> {
    debug!("Planning next move from {} over grid:\n{}", origin, grid);

    let next = planner.plan_next_move(grid, origin)?;
    match next {
        Some(mv) => info!("Next move is {}", mv),
        None => info!("Origin is already on the target"),
    }

    match format {
        OutputFormat::Text => rendering::write_next_move(next, out),
        OutputFormat::Json => {
            let target = grid.locate(planner.markers().target)?;
            let report = StepReport::new(origin, target, next);
            writeln!(out, "{}", report.to_json()?)?;
            Ok(())
        }
    }
}
