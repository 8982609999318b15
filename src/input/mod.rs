//! # Input Module
//!
//! The line-oriented request protocol. Both request shapes start with the
//! grid size on its own line; the step request carries the origin as a
//! `row col` line before the grid rows.
//!
//! The reader only parses structure. Grid geometry (squareness, row
//! lengths) is enforced by `Grid::from_rows`, so a size line that
//! disagrees with the rows surfaces as `InvalidGrid` rather than being
//! re-checked here.

use std::io::BufRead;

use crate::grid::{Grid, Position};
use crate::{BeelineError, BeelineResult};

/// Reads a full-path request: the grid size followed by that many rows.
pub fn read_path_request<R: BufRead>(reader: R) -> BeelineResult<Grid> {
    let mut lines = reader.lines();
    let size = parse_size(&next_line(&mut lines)?)?;
    read_grid_rows(&mut lines, size)
}

/// Reads a next-move request: the grid size, the origin position as
/// `row col`, and then the grid rows.
pub fn read_step_request<R: BufRead>(reader: R) -> BeelineResult<(Position, Grid)> {
    let mut lines = reader.lines();
    let size = parse_size(&next_line(&mut lines)?)?;
    let origin = parse_position(&next_line(&mut lines)?)?;
    let grid = read_grid_rows(&mut lines, size)?;
    Ok((origin, grid))
}

fn next_line<R: BufRead>(lines: &mut std::io::Lines<R>) -> BeelineResult<String> {
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(BeelineError::InvalidInput(
            "unexpected end of input".to_string(),
        )),
    }
}

fn parse_size(line: &str) -> BeelineResult<usize> {
    line.trim().parse().map_err(|_| {
        BeelineError::InvalidInput(format!("expected a grid size, got '{}'", line.trim()))
    })
}

fn parse_position(line: &str) -> BeelineResult<Position> {
    let mut fields = line.split_whitespace();
    let row = parse_coordinate(fields.next(), line)?;
    let col = parse_coordinate(fields.next(), line)?;
    if fields.next().is_some() {
        return Err(BeelineError::InvalidInput(format!(
            "expected 'row col', got '{}'",
            line.trim()
        )));
    }
    Ok(Position::new(row, col))
}

fn parse_coordinate(field: Option<&str>, line: &str) -> BeelineResult<i32> {
    field
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| BeelineError::InvalidInput(format!("expected 'row col', got '{}'", line.trim())))
}

fn read_grid_rows<R: BufRead>(lines: &mut std::io::Lines<R>, size: usize) -> BeelineResult<Grid> {
    let mut rows = Vec::with_capacity(size);
    for _ in 0..size {
        let line = next_line(lines)?;
        rows.push(line.trim_end_matches('\r').to_string());
    }
    Grid::from_rows(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BeelineError;

    #[test]
    fn test_read_path_request() {
        let input = "3\n---\n-m-\n--p\n";
        let grid = read_path_request(input.as_bytes()).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.locate('m').unwrap(), Position::new(1, 1));
    }

    #[test]
    fn test_read_step_request() {
        let input = "5\n1 1\n-----\n-----\n-----\n-----\n----p\n";
        let (origin, grid) = read_step_request(input.as_bytes()).unwrap();
        assert_eq!(origin, Position::new(1, 1));
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.locate('p').unwrap(), Position::new(4, 4));
    }

    #[test]
    fn test_size_line_not_a_number() {
        let err = read_path_request("three\n---\n".as_bytes()).unwrap_err();
        assert!(matches!(err, BeelineError::InvalidInput(_)));
    }

    #[test]
    fn test_truncated_grid() {
        let err = read_path_request("3\n---\n-m-\n".as_bytes()).unwrap_err();
        assert!(matches!(err, BeelineError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_origin_line() {
        let err = read_step_request("2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, BeelineError::InvalidInput(_)));
    }

    #[test]
    fn test_bad_origin_line() {
        let err = read_step_request("2\n1\n-p\n--\n".as_bytes()).unwrap_err();
        assert!(matches!(err, BeelineError::InvalidInput(_)));
        let err = read_step_request("2\n1 2 3\n-p\n--\n".as_bytes()).unwrap_err();
        assert!(matches!(err, BeelineError::InvalidInput(_)));
    }

    #[test]
    fn test_size_disagreeing_with_rows() {
        // Three rows of width four: structural parse succeeds, geometry fails.
        let err = read_path_request("3\n----\n-m--\n---p\n".as_bytes()).unwrap_err();
        assert!(matches!(err, BeelineError::InvalidGrid(_)));
    }

    #[test]
    fn test_size_line_with_surrounding_space() {
        let grid = read_path_request(" 2 \n-m\np-\n".as_bytes()).unwrap();
        assert_eq!(grid.size(), 2);
    }
}
