//! # Generation Module
//!
//! Seeded random scenario generation for demos and tests: a filler-filled
//! square grid with the origin and target markers dropped on two distinct
//! cells. The same seed always produces the same grid.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::{config, BeelineError, BeelineResult};

/// Configuration for random scenario generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Side length of the generated grid
    pub size: usize,
    /// Random seed for reproducible generation
    pub seed: u64,
}

impl GenerationConfig {
    /// Creates a generation configuration.
    pub fn new(size: usize, seed: u64) -> Self {
        Self { size, seed }
    }

    /// Creates a small configuration for tests.
    pub fn for_testing(seed: u64) -> Self {
        Self { size: 5, seed }
    }
}

/// Creates the RNG for a generation run.
pub fn create_rng(config: &GenerationConfig) -> StdRng {
    StdRng::seed_from_u64(config.seed)
}

/// Generates a random scenario grid.
///
/// The grid is filled with the default filler character, with the origin
/// and target markers on two distinct uniformly-random cells. Sizes below
/// 2 cannot host two distinct markers and fail with `InvalidGrid`.
pub fn generate_grid(gen_config: &GenerationConfig) -> BeelineResult<Grid> {
    let n = gen_config.size;
    if n < 2 {
        return Err(BeelineError::InvalidGrid(format!(
            "cannot place two markers on a {}x{} grid",
            n, n
        )));
    }

    let mut rng = create_rng(gen_config);
    let cells = n * n;
    let origin = rng.gen_range(0..cells);
    // Sample the target from the remaining cells so the two never collide.
    let mut target = rng.gen_range(0..cells - 1);
    if target >= origin {
        target += 1;
    }

    let mut rows = vec![vec![config::FILLER; n]; n];
    rows[origin / n][origin % n] = config::ORIGIN_MARKER;
    rows[target / n][target % n] = config::TARGET_MARKER;

    let rows: Vec<String> = rows.into_iter().map(|row| row.into_iter().collect()).collect();
    Grid::from_rows(&rows)
}
