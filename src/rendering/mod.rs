//! # Rendering Module
//!
//! Output formatting for planned moves. Text output is the wire form the
//! protocol expects: one upper-case move word per line, and nothing at all
//! for a step request that is already at its target. JSON output wraps the
//! same data in a self-describing report.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::grid::{Move, Position};
use crate::BeelineResult;

/// Writes a full move sequence as one upper-case word per line.
pub fn write_moves<W: Write>(moves: &[Move], out: &mut W) -> BeelineResult<()> {
    for mv in moves {
        writeln!(out, "{}", mv)?;
    }
    Ok(())
}

/// Writes a single next move, or nothing when there is no move left.
pub fn write_next_move<W: Write>(next: Option<Move>, out: &mut W) -> BeelineResult<()> {
    if let Some(mv) = next {
        writeln!(out, "{}", mv)?;
    }
    Ok(())
}

/// JSON-serializable result of a full-path request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathReport {
    pub origin: Position,
    pub target: Position,
    pub moves: Vec<Move>,
}

impl PathReport {
    pub fn new(origin: Position, target: Position, moves: Vec<Move>) -> Self {
        Self {
            origin,
            target,
            moves,
        }
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> BeelineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// JSON-serializable result of a next-move request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub origin: Position,
    pub target: Position,
    pub next: Option<Move>,
}

impl StepReport {
    pub fn new(origin: Position, target: Position, next: Option<Move>) -> Self {
        Self {
            origin,
            target,
            next,
        }
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> BeelineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_moves_one_word_per_line() {
        let mut out = Vec::new();
        write_moves(&[Move::Right, Move::Down], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "RIGHT\nDOWN\n");
    }

    #[test]
    fn test_write_empty_sequence() {
        let mut out = Vec::new();
        write_moves(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_next_move() {
        let mut out = Vec::new();
        write_next_move(Some(Move::Left), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "LEFT\n");

        let mut out = Vec::new();
        write_next_move(None, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_path_report_json() {
        let report = PathReport::new(
            Position::new(1, 1),
            Position::new(2, 2),
            vec![Move::Right, Move::Down],
        );
        let json = report.to_json().unwrap();
        assert!(json.contains("\"RIGHT\""));
        let back: PathReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_step_report_json_null_next() {
        let report = StepReport::new(Position::new(1, 1), Position::new(1, 1), None);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"next\": null"));
    }
}
