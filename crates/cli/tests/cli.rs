//! Integration tests for the `apigen` command line.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use apigen_cli::{run_cli, EXIT_FAILURE, EXIT_USAGE};
use serde_json::json;
use tempfile::TempDir;

fn write_schema(dir: &Path, version: i64) -> String {
    let schema = json!({
        "Name": "Example",
        "Docs": "Example API.",
        "Functions": [{
            "Name": "get",
            "Docs": "Get an item.",
            "Params": [{ "Name": "id", "Docs": "", "Typewords": ["int64s"] }],
            "Returns": [{ "Name": "", "Docs": "", "Typewords": ["Item"] }]
        }],
        "Sections": [],
        "Structs": [{
            "Name": "Item",
            "Docs": "",
            "Fields": [{ "Name": "id", "Docs": "", "Typewords": ["int64s"] }]
        }],
        "Ints": [],
        "Strings": [],
        "Version": "1.0.0",
        "SherpaVersion": 0,
        "SherpadocVersion": version
    });
    let path = dir.join("example.json");
    fs::write(&path, serde_json::to_string_pretty(&schema).unwrap()).unwrap();
    path.display().to_string()
}

fn args(rest: &[&str]) -> Vec<String> {
    std::iter::once("apigen")
        .chain(rest.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn test_generates_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_schema(dir.path(), 1);
    let output = dir.path().join("example.go");

    let code = run_cli(args(&[
        "Example",
        "https://example.com/example/",
        "-i",
        &input,
        "-o",
        output.to_str().unwrap(),
    ]));
    assert_eq!(code, 0);

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.starts_with("// Code generated by apigen. DO NOT EDIT.\n"));
    assert!(generated.contains("package Example\n"));
    assert!(generated.contains("\tID int64 `json:\"id,string\"`\n"));
    assert!(generated.contains("func (c *Client) Get(ctx context.Context, id int64) (Item, error) {"));

    let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 2, "temporary file left behind");
}

#[test]
fn test_failed_generation_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_schema(dir.path(), 2);
    let output = dir.path().join("example.go");

    let code = run_cli(args(&[
        "Example",
        "https://example.com/example/",
        "--input",
        &input,
        "--output",
        output.to_str().unwrap(),
    ]));
    assert_eq!(code, EXIT_FAILURE);
    assert!(!output.exists());
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.json");
    let code = run_cli(args(&[
        "Example",
        "https://example.com/example/",
        "-i",
        input.to_str().unwrap(),
    ]));
    assert_eq!(code, EXIT_FAILURE);
}

#[test]
fn test_invalid_options_are_usage_errors() {
    let dir = TempDir::new().unwrap();
    let input = write_schema(dir.path(), 1);
    let output = dir.path().join("example.go");
    let out = output.to_str().unwrap();

    let code = run_cli(args(&["example", "https://example.com/", "-i", &input, "-o", out]));
    assert_eq!(code, EXIT_USAGE);

    let code = run_cli(args(&["Example", "https://example.com", "-i", &input, "-o", out]));
    assert_eq!(code, EXIT_USAGE);

    assert!(!output.exists());
}

#[test]
fn test_missing_arguments_are_usage_errors() {
    assert_eq!(run_cli(args(&["Example"])), EXIT_USAGE);
    assert_eq!(run_cli(args(&[])), EXIT_USAGE);
}
