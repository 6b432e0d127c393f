//! Tests for the `score` command's input handling and output.

use std::{
    io::{Cursor, Write},
    path::{Path, PathBuf},
    time::SystemTime,
};

use fkgrade::{cli, constants::TOO_SHORT_MESSAGE};
use pretty_assertions::assert_eq;

fn graded_text() -> String {
    vec!["The cat sat on the mat and the dog ran to the big red box by the old oak tree."; 5]
        .join(" ")
}

fn temp_text_file(contents: &str) -> PathBuf {
    let nonce = SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("fkgrade_cli_{nonce}.txt"));
    let mut f = std::fs::File::create(&path).expect("create file");
    f.write_all(contents.as_bytes()).expect("write text");
    path
}

#[test]
fn dash_reads_stdin() {
    let stdin = Cursor::new(graded_text());
    let out = cli::run_score(Some(Path::new("-")), stdin, false).expect("score stdin");

    assert!(out.contains("Grade level:"));
    assert!(out.contains("4.01"));
}

#[test]
fn missing_file_argument_reads_stdin() {
    let text = cli::read_input(None, Cursor::new("from stdin")).expect("read stdin");
    assert_eq!(text, "from stdin");
}

#[test]
fn file_argument_ignores_stdin() {
    let path = temp_text_file(&graded_text());
    let text = cli::read_input(Some(path.as_path()), Cursor::new("unused")).expect("read file");
    assert_eq!(text, graded_text());
    let _ = std::fs::remove_file(path);
}

#[test]
fn json_output_has_counts_and_result() {
    let out = cli::run_score(None, Cursor::new(graded_text()), true).expect("score stdin");
    let json: serde_json::Value = serde_json::from_str(&out).expect("parse json");

    assert_eq!(json["words"], 100);
    assert_eq!(json["sentences"], 5);
    assert_eq!(json["rounded_grade"], 4);
    assert_eq!(json["result"], "4.01");
}

#[test]
fn short_input_prints_fixed_message() {
    let out = cli::run_score(None, Cursor::new("Just a few words."), false).expect("score stdin");
    assert!(out.contains(TOO_SHORT_MESSAGE));
    assert!(!out.contains("Grade level:"));
}

#[test]
fn unreadable_file_is_an_error() {
    let path = std::env::temp_dir().join("fkgrade_cli_does_not_exist.txt");
    let err = cli::run_score(Some(path.as_path()), Cursor::new(graded_text()), false).unwrap_err();
    assert!(err.to_string().starts_with("Could not read"), "{err}");
}
