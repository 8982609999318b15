//! # Board Representation
//!
//! Square character grids with geometry validated at construction time and
//! single-pass marker lookup.

use crate::grid::Position;
use crate::{BeelineError, BeelineResult};

/// A validated n×n character grid.
///
/// Construction is the only place geometry is checked: a `Grid` value is
/// always non-empty and square, so downstream code never revalidates.
///
/// # Examples
///
/// ```
/// use beeline::Grid;
///
/// let grid = Grid::from_text("---\n-m-\n--p").unwrap();
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid.locate('p').unwrap().row, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Builds a grid from its rows, validating the geometry.
    ///
    /// Fails with `InvalidGrid` when the row list is empty, the rows have
    /// inconsistent lengths, or the cell matrix is not square.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> BeelineResult<Self> {
        if rows.is_empty() {
            return Err(BeelineError::InvalidGrid("grid is empty".to_string()));
        }

        let cells: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        let width = cells[0].len();
        if let Some(bad) = cells.iter().position(|row| row.len() != width) {
            return Err(BeelineError::InvalidGrid(format!(
                "row {} has length {} but row 0 has length {}",
                bad,
                cells[bad].len(),
                width
            )));
        }
        if width != cells.len() {
            return Err(BeelineError::InvalidGrid(format!(
                "grid is {}x{}, expected a square",
                cells.len(),
                width
            )));
        }

        Ok(Self { cells })
    }

    /// Builds a grid from newline-separated rows.
    ///
    /// A single trailing newline is tolerated; carriage returns are trimmed
    /// so CRLF input parses the same as LF input.
    pub fn from_text(text: &str) -> BeelineResult<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        Self::from_rows(&rows)
    }

    /// The side length of the grid.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Whether a position falls inside the grid bounds.
    pub fn contains(&self, pos: Position) -> bool {
        let n = self.size() as i32;
        (0..n).contains(&pos.row) && (0..n).contains(&pos.col)
    }

    /// Returns the cell at a position, or None when out of bounds.
    pub fn get(&self, pos: Position) -> Option<char> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.cells[pos.row as usize][pos.col as usize])
    }

    /// Locates the unique cell holding `marker` with one row-major scan.
    ///
    /// Fails with `MalformedGrid` when the marker is absent or occurs more
    /// than once.
    pub fn locate(&self, marker: char) -> BeelineResult<Position> {
        let mut found: Option<Position> = None;
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell != marker {
                    continue;
                }
                let pos = Position::new(row as i32, col as i32);
                if let Some(first) = found {
                    return Err(BeelineError::MalformedGrid(format!(
                        "marker '{}' appears more than once (at {} and {})",
                        marker, first, pos
                    )));
                }
                found = Some(pos);
            }
        }
        found.ok_or_else(|| {
            BeelineError::MalformedGrid(format!("marker '{}' is missing from the grid", marker))
        })
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
