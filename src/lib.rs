//! # Beeline
//!
//! A grid navigation planner: given a square character grid holding one
//! origin marker and one target marker, beeline computes the cardinal moves
//! that walk the origin onto the target.
//!
//! ## Architecture Overview
//!
//! The crate is split along the same seams a caller sees:
//!
//! - **Grid**: validated square board plus the `Position`/`Move` vocabulary
//! - **Planner**: the pure planning operations (full path, single next move)
//! - **Input**: the line-oriented request protocol (size, optional origin, rows)
//! - **Rendering**: text and JSON output for planned moves
//! - **Generation**: seeded random scenarios for demos and tests
//!
//! Planning is a pure function of its inputs: no shared state, no I/O, no
//! side effects. Callers may invoke the planner from any number of threads
//! without coordination.

pub mod generation;
pub mod grid;
pub mod input;
pub mod planner;
pub mod rendering;

pub use generation::GenerationConfig;
pub use grid::{Grid, Move, Position};
pub use input::{read_path_request, read_step_request};
pub use planner::{DirectionPlanner, Markers};
pub use rendering::{PathReport, StepReport};

/// Core error type for the beeline crate.
#[derive(thiserror::Error, Debug)]
pub enum BeelineError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Grid geometry is unusable: empty, non-square, or ragged rows
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// A required marker is missing from the grid or appears more than once
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),

    /// Request input could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used throughout the beeline codebase.
pub type BeelineResult<T> = Result<T, BeelineError>;

/// Version information for the planner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default marker characters shared by the CLI, generation, and tests.
pub mod config {
    /// Marker for the cell the walk starts from
    pub const ORIGIN_MARKER: char = 'm';

    /// Marker for the cell the walk ends on
    pub const TARGET_MARKER: char = 'p';

    /// Character filling every non-marker cell
    pub const FILLER: char = '-';

    /// Seed used by the CLI when `--random` is given without `--seed`
    pub const DEFAULT_DEMO_SEED: u64 = 12345;
}
