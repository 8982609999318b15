//! # Planner Module
//!
//! The planning operations themselves. Both are pure single-pass functions:
//! locate the marker cells, take the origin−target delta per axis, and turn
//! each axis into repeated unit moves. Horizontal (column) travel always
//! comes first; the single-step variant likewise gives the column axis
//! priority, so repeatedly asking for the next move retraces the full path.

use crate::grid::{Grid, Move, Position};
use crate::{config, BeelineResult};

/// The pair of marker characters a planner looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    /// Cell the walk starts from
    pub origin: char,
    /// Cell the walk ends on
    pub target: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            origin: config::ORIGIN_MARKER,
            target: config::TARGET_MARKER,
        }
    }
}

/// Plans cardinal-move walks from an origin marker to a target marker.
///
/// The planner carries no state beyond its marker configuration; every
/// operation is a pure function of the grid it is handed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionPlanner {
    markers: Markers,
}

impl DirectionPlanner {
    /// Creates a planner using the default `'m'`/`'p'` markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner looking for custom marker characters.
    pub fn with_markers(markers: Markers) -> Self {
        Self { markers }
    }

    /// The markers this planner scans for.
    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Plans the complete move sequence from the origin marker to the
    /// target marker.
    ///
    /// All horizontal moves are emitted before all vertical moves. The
    /// sequence is empty when the two markers resolve to the same cell.
    ///
    /// Fails with `MalformedGrid` when either marker is absent or
    /// duplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use beeline::{DirectionPlanner, Grid, Move};
    ///
    /// let grid = Grid::from_text("---\n-m-\n--p").unwrap();
    /// let path = DirectionPlanner::new().plan_full_path(&grid).unwrap();
    /// assert_eq!(path, vec![Move::Right, Move::Down]);
    /// ```
    pub fn plan_full_path(&self, grid: &Grid) -> BeelineResult<Vec<Move>> {
        let origin = grid.locate(self.markers.origin)?;
        let target = grid.locate(self.markers.target)?;
        Ok(moves_for_delta(origin - target))
    }

    /// Plans the single next move from a caller-supplied origin toward the
    /// target marker.
    ///
    /// The column axis has priority: as long as the origin is on a
    /// different column than the target, the move is `Left` or `Right`;
    /// only once the columns agree does the row axis produce `Up` or
    /// `Down`. Returns `None` when the origin already sits on the target.
    ///
    /// The origin is taken as given and not checked against the grid. Only
    /// the target marker is validated (`MalformedGrid` on absence or
    /// duplication).
    pub fn plan_next_move(&self, grid: &Grid, origin: Position) -> BeelineResult<Option<Move>> {
        let target = grid.locate(self.markers.target)?;
        let delta = origin - target;
        if delta.col != 0 {
            return Ok(Some(if delta.col > 0 { Move::Left } else { Move::Right }));
        }
        if delta.row != 0 {
            return Ok(Some(if delta.row > 0 { Move::Up } else { Move::Down }));
        }
        Ok(None)
    }
}

/// Expands an origin−target delta into unit moves, column axis first.
fn moves_for_delta(delta: Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity((delta.row.abs() + delta.col.abs()) as usize);
    let horizontal = if delta.col > 0 { Move::Left } else { Move::Right };
    for _ in 0..delta.col.abs() {
        moves.push(horizontal);
    }
    let vertical = if delta.row > 0 { Move::Up } else { Move::Down };
    for _ in 0..delta.row.abs() {
        moves.push(vertical);
    }
    moves
}

/// Applies a move sequence to a position and returns where it ends up.
pub fn walk(origin: Position, moves: &[Move]) -> Position {
    moves.iter().fold(origin, |pos, &mv| pos.step(mv))
}
