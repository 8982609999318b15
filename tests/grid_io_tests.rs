//! Integration tests for reading planning requests from files.

use std::fs::File;
use std::io::{BufReader, Write};

use beeline::{read_path_request, read_step_request, BeelineError, DirectionPlanner, Move, Position};
use tempfile::NamedTempFile;

fn request_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(contents.as_bytes())
        .expect("temp file should be writable");
    file
}

#[test]
fn test_path_request_from_file() {
    let file = request_file("3\n---\n-m-\n--p\n");
    let reader = BufReader::new(File::open(file.path()).unwrap());

    let grid = read_path_request(reader).expect("file request should parse");
    let moves = DirectionPlanner::new().plan_full_path(&grid).unwrap();
    assert_eq!(moves, vec![Move::Right, Move::Down]);
}

#[test]
fn test_step_request_from_file() {
    let file = request_file("5\n1 1\n-----\n-----\n-----\n-----\n----p\n");
    let reader = BufReader::new(File::open(file.path()).unwrap());

    let (origin, grid) = read_step_request(reader).expect("file request should parse");
    assert_eq!(origin, Position::new(1, 1));

    let next = DirectionPlanner::new().plan_next_move(&grid, origin).unwrap();
    assert_eq!(next, Some(Move::Right));
}

#[test]
fn test_crlf_file_parses() {
    let file = request_file("2\r\n-m\r\np-\r\n");
    let reader = BufReader::new(File::open(file.path()).unwrap());

    let grid = read_path_request(reader).expect("CRLF request should parse");
    assert_eq!(grid.size(), 2);
}

#[test]
fn test_truncated_file_is_invalid_input() {
    let file = request_file("4\n----\n-m--\n");
    let reader = BufReader::new(File::open(file.path()).unwrap());

    let err = read_path_request(reader).unwrap_err();
    assert!(matches!(err, BeelineError::InvalidInput(_)));
}
