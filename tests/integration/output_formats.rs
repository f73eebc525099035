use predicates::prelude::*;

use crate::common::Tree;

#[test]
fn long_lines_have_ls_columns() {
    let tree = Tree::new().file("a.pdf", 1536);
    let stdout = tree.stdout(&[]);
    let fields: Vec<_> = stdout.trim_end().split_whitespace().collect();

    // mode links owner group size month day time|year path
    assert_eq!(fields.len(), 9, "unexpected line: {stdout}");
    assert!(fields[0].starts_with('-'));
    assert_eq!(fields[0].len(), 10);
    assert!(fields[1].parse::<u64>().is_ok());
    assert_eq!(fields[4], "1.5K");
    assert_eq!(fields[8], "./a.pdf");
}

#[test]
fn bytes_flag_prints_exact_size() {
    let tree = Tree::new().file("a.pdf", 1536);
    let stdout = tree.stdout(&["--bytes"]);
    assert_eq!(stdout.split_whitespace().nth(4), Some("1536"));
}

#[test]
fn tsv_rows() {
    let tree = Tree::new().file("b.pdf", 2048).file("a.pdf", 10);
    assert_eq!(tree.stdout(&["--format", "tsv"]), "10\t10\t./a.pdf\n2048\t2.0K\t./b.pdf\n");
}

#[test]
fn json_array() {
    let tree = Tree::new().file("b.pdf", 2048).file("sub/c.pdf", 100);
    let stdout = tree.stdout(&["--format", "json"]);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    let records = value.as_array().expect("array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["path"], "./sub/c.pdf");
    assert_eq!(records[0]["size_bytes"], 100);
    assert_eq!(records[1]["size_human"], "2.0K");
    assert!(records[1]["modified"].is_string());
}

#[test]
fn json_empty_tree() {
    let tree = Tree::new();
    tree.command().args(["--format", "json"]).assert().success().stdout("[]\n");
}

#[test]
fn shows_help() {
    let tree = Tree::new();
    tree.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pdf_sizes"));
}

#[cfg(unix)]
#[test]
fn newline_in_file_name_stays_on_one_line() {
    let tree = Tree::new().file("new\nline.pdf", 3).file("a.pdf", 10);
    let stdout = tree.stdout(&[]);

    assert_eq!(stdout.lines().count(), 2, "unexpected output: {stdout}");
    assert_eq!(crate::common::paths(&stdout), vec!["./new\\nline.pdf", "./a.pdf"]);
}
