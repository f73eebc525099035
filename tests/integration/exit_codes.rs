use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::Tree;

#[test]
fn missing_root_is_fatal_without_output() {
    let tree = Tree::new();
    Command::cargo_bin("pdf_sizes")
        .unwrap()
        .arg("--root")
        .arg(tree.path().join("does-not-exist"))
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("cannot resolve scan root"));
}

#[test]
fn file_as_root_is_fatal() {
    let tree = Tree::new().file("a.pdf", 1);
    Command::cargo_bin("pdf_sizes")
        .unwrap()
        .arg("--root")
        .arg(tree.path().join("a.pdf"))
        .assert()
        .code(2)
        .stdout("");
}

#[test]
fn invalid_pattern_is_fatal() {
    let tree = Tree::new().file("a.pdf", 1);
    tree.command()
        .args(["--pattern", "[oops"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    Tree::new().command().arg("--no-such-flag").assert().code(2);
}

#[test]
fn no_arguments_uses_the_program_directory() {
    // The test binary directory holds no PDFs of ours; only the exit status matters.
    Command::cargo_bin("pdf_sizes").unwrap().assert().code(predicate::in_iter([0, 1]));
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_is_reported_and_skipped() {
    use std::{fs, os::unix::fs::PermissionsExt};

    let tree = Tree::new().file("ok.pdf", 5).file("locked/secret.pdf", 5);
    let locked = tree.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not restrict root; check readability before asserting.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = tree.command().assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert
        .code(1)
        .stdout(predicate::str::contains("./ok.pdf"))
        .stdout(predicate::str::contains("secret.pdf").not())
        .stderr(predicate::str::contains("cannot access './locked'"));
}
