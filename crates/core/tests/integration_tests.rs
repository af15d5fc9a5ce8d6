//! Integration tests for shelf-core
//!
//! These tests verify that the store, matcher and template engine work
//! together correctly by running complete workflows against real files.

use shelf_core::{
    error::{Error, Result},
    matcher::find,
    prompt::Prompter,
    record::{Line, Record},
    selection::{pick, Pick},
    store::Store,
    template::resolve,
};
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

struct Scripted(VecDeque<&'static str>);

impl Prompter for Scripted {
    fn read_line(&mut self, _prompt: &str, _initial: Option<&str>) -> Result<String> {
        Ok(self.0.pop_front().expect("unexpected prompt").to_string())
    }
}

fn store_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("commands.csv");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

fn comments(store: &Store) -> Vec<String> {
    store
        .lines()
        .iter()
        .filter_map(|line| match line {
            Line::Comment(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn records(store: &Store) -> Vec<Record> {
    store.records().map(|(_, record)| record.clone()).collect()
}

/// Search, select and resolve the documented example entry
#[test]
fn test_search_and_resolve_workflow() {
    let (_dir, path) = store_file("Echo test;echo \"Hello\" # {\"Name\":\"World\"}\n# a note\n");
    let store = Store::load(&path).unwrap();

    let matches = find(&store, "echo");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].description, "Echo test");
    assert_eq!(pick(matches.len(), None).unwrap(), Pick::Only);

    let mut prompter = Scripted(VecDeque::from([""]));
    let resolved = resolve(&matches[0].command, &mut prompter).unwrap();
    assert_eq!(resolved, "echo \"Hello\" # World");
}

/// Comments keep their text and order through appends and deletes
#[test]
fn test_comment_preservation_workflow() {
    let (_dir, path) = store_file("# top\nA;a\n   # indented note\nB;b\n#tail;with delimiter\nC;c\n");
    let expected_comments = vec![
        "# top".to_string(),
        "   # indented note".to_string(),
        "#tail;with delimiter".to_string(),
    ];

    let mut store = Store::load(&path).unwrap();
    store.append(Record::new("D", "d")).unwrap();
    assert_eq!(comments(&Store::load(&path).unwrap()), expected_comments);

    let b_position = find(&store, "b")[0].position;
    store.delete(b_position).unwrap();

    let reloaded = Store::load(&path).unwrap();
    assert_eq!(comments(&reloaded), expected_comments);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# top\nA;a\n   # indented note\n#tail;with delimiter\nC;c\nD;d\n"
    );
}

/// Deleting one position and appending leaves every other record in place
#[test]
fn test_deletion_position_workflow() {
    let (_dir, path) = store_file("R0;c0\nR1;c1\nR2;c2\nR3;c3\nR4;c4\n");
    let mut store = Store::load(&path).unwrap();

    let removed = store.delete(2).unwrap();
    assert_eq!(removed, Record::new("R2", "c2"));
    store.append(Record::new("New", "new")).unwrap();

    let reloaded = Store::load(&path).unwrap();
    let descriptions: Vec<String> = records(&reloaded).into_iter().map(|r| r.description).collect();
    assert_eq!(descriptions, vec!["R0", "R1", "R3", "R4", "New"]);
}

/// Positions come from the current store state, so they shift after a delete
#[test]
fn test_positions_are_recomputed_after_delete() {
    let (_dir, path) = store_file("# c\nssh a;ssh a\nssh b;ssh b\nssh c;ssh c\n");
    let mut store = Store::load(&path).unwrap();

    let first = find(&store, "ssh");
    store.delete(first[0].position).unwrap();

    let second = find(&store, "ssh");
    assert_eq!(second[0].description, "ssh b");
    store.delete(second[0].position).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "# c\nssh c;ssh c\n");
}

/// Deleting a record and adding it again keeps the same set of records
#[test]
fn test_reload_rewrite_workflow() {
    let original = "# notes\nList;ls -la\nbroken line\nGrep;grep -rn \"x\" .\nPing;ping -c 3 {\"Host\":\"example.com\"}\n";
    let (_dir, path) = store_file(original);

    let mut store = Store::load(&path).unwrap();
    let before = records(&store);

    let removed = store.delete(1).unwrap();
    store.append(removed).unwrap();

    let reloaded = Store::load(&path).unwrap();
    let mut after = records(&reloaded);
    let mut expected = before.clone();
    after.sort_by(|a, b| a.description.cmp(&b.description));
    expected.sort_by(|a, b| a.description.cmp(&b.description));
    assert_eq!(after, expected);

    // the re-added record moved to the end, everything else is untouched
    assert_eq!(records(&reloaded).last(), Some(&before[0]));
    assert!(reloaded.lines().contains(&Line::Malformed("broken line".to_string())));
}

/// A record is found exactly when the term is in its description or command
#[test]
fn test_search_correctness_workflow() {
    let (_dir, path) = store_file(
        "# docker comment\nDocker PS;docker ps\nDisk usage;du -sh *\nLogs;journalctl -u DOCKER\n",
    );
    let store = Store::load(&path).unwrap();

    for term in ["", "docker", "DU", "journal", "ps", "zzz", "#"] {
        let found: Vec<String> = find(&store, term).into_iter().map(|m| m.description).collect();
        let expected: Vec<String> = store
            .records()
            .filter(|(_, r)| {
                let term = term.to_lowercase();
                term.is_empty()
                    || r.description.to_lowercase().contains(&term)
                    || r.command.to_lowercase().contains(&term)
            })
            .map(|(_, r)| r.description.clone())
            .collect();
        assert_eq!(found, expected, "term `{term}`");
    }

    assert!(find(&store, "#").is_empty());
}

/// Records written through the store read back identically
#[test]
fn test_append_round_trip_workflow() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("commands.csv");

    let written = vec![
        Record::new("Quotes", r#"echo "it's" "quoted""#),
        Record::new("Chained", "cd /tmp; ls; cd -"),
        Record::new("Template", r#"scp {"File":"a.txt"} {"Host":"h"}:~"#),
    ];

    let mut store = Store::open(&path).unwrap();
    for record in &written {
        store.append(record.clone()).unwrap();
    }

    assert_eq!(records(&Store::load(&path).unwrap()), written);
}

/// A missing store only matters when something has to be read
#[test]
fn test_missing_store_workflow() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("commands.csv");

    assert!(matches!(Store::load(&path), Err(Error::StoreNotFound { .. })));

    let mut store = Store::open(&path).unwrap();
    store.append(Record::new("First", "echo first")).unwrap();
    assert_eq!(find(&Store::load(&path).unwrap(), "").len(), 1);
}
