use crate::common::{Tree, paths};

#[test]
fn sorts_pdfs_by_size_and_ignores_other_files() {
    let tree = Tree::new()
        .file("a.pdf", 10)
        .file("b.pdf", 2048)
        .file("sub/c.pdf", 100)
        .file("d.txt", 500);

    let stdout = tree.stdout(&[]);

    assert_eq!(paths(&stdout), vec!["./a.pdf", "./sub/c.pdf", "./b.pdf"]);
    assert!(!stdout.contains("d.txt"));
    let sizes: Vec<_> = stdout.lines().map(|l| l.split_whitespace().nth(4).unwrap().to_string()).collect();
    assert_eq!(sizes, vec!["10", "100", "2.0K"]);
}

#[test]
fn empty_tree_prints_nothing() {
    let tree = Tree::new().file("notes.txt", 3);
    tree.command().assert().success().stdout("");
}

#[test]
fn zero_byte_file_comes_first() {
    let tree = Tree::new().file("big.pdf", 5000).file("empty.pdf", 0).file("x/one.pdf", 1);
    assert_eq!(paths(&tree.stdout(&[])), vec!["./empty.pdf", "./x/one.pdf", "./big.pdf"]);
}

#[test]
fn upper_case_extension_is_excluded_by_default() {
    let tree = Tree::new().file("LOUD.PDF", 7).file("quiet.pdf", 8);

    assert_eq!(paths(&tree.stdout(&[])), vec!["./quiet.pdf"]);
    assert_eq!(paths(&tree.stdout(&["--ignore-case"])), vec!["./LOUD.PDF", "./quiet.pdf"]);
}

#[test]
fn reruns_are_byte_identical() {
    let tree = Tree::new()
        .file("same1.pdf", 42)
        .file("nested/same2.pdf", 42)
        .file("z.pdf", 1)
        .file("m/n/o.pdf", 4096);

    let first = tree.stdout(&[]);
    let second = tree.stdout(&[]);
    assert_eq!(first, second);
}

#[test]
fn every_line_is_at_least_as_large_as_the_previous() {
    let tree = Tree::new()
        .file("p1.pdf", 3000)
        .file("p2.pdf", 17)
        .file("deep/p3.pdf", 1_200_000)
        .file("deep/er/p4.pdf", 999)
        .file("p5.pdf", 17);

    let stdout = tree.stdout(&["--format", "tsv"]);
    let bytes: Vec<u64> = stdout.lines().map(|l| l.split('\t').next().unwrap().parse().unwrap()).collect();
    assert_eq!(bytes.len(), 5);
    assert!(bytes.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn reverse_puts_largest_first() {
    let tree = Tree::new().file("a.pdf", 10).file("b.pdf", 2048).file("sub/c.pdf", 100);
    assert_eq!(paths(&tree.stdout(&["--reverse"])), vec!["./b.pdf", "./sub/c.pdf", "./a.pdf"]);
}

#[test]
fn custom_pattern_replaces_pdf() {
    let tree = Tree::new().file("a.pdf", 1).file("b.epub", 2);
    assert_eq!(paths(&tree.stdout(&["--pattern", "*.epub"])), vec!["./b.epub"]);
}
