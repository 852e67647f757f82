//! Smoke tests to verify command wiring

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn blogctl() -> Command {
    Command::cargo_bin("blogctl").unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

// === Help Tests ===

#[test]
fn test_top_level_help() {
    blogctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("import"));
}

#[test]
fn test_serve_help() {
    blogctl()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--db-path"));
}

#[test]
fn test_import_help() {
    blogctl()
        .arg("import")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON file containing a list of articles"));
}

// === Import Tests ===

#[test]
fn test_import_valid_file() {
    let dir = TempDir::new().unwrap();
    let file = write(
        dir.path(),
        "articles.json",
        r#"[{"title":"T","content":"C","tags":"x,y"},{"title":"U","content":"D","tags":"z"}]"#,
    );
    let db = dir.path().join("blog.db");

    blogctl()
        .arg("import")
        .arg(&file)
        .arg("--db-path")
        .arg(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 articles"));

    assert!(db.exists());
}

#[test]
fn test_import_rejects_wrong_extension() {
    let dir = TempDir::new().unwrap();
    let file = write(
        dir.path(),
        "notes.txt",
        r#"[{"title":"T","content":"C","tags":"x"}]"#,
    );

    blogctl()
        .arg("import")
        .arg(&file)
        .arg("--db-path")
        .arg(dir.path().join("blog.db"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file type"));
}

#[test]
fn test_import_reports_first_bad_article() {
    let dir = TempDir::new().unwrap();
    let file = write(
        dir.path(),
        "articles.json",
        r#"[{"title":"A","content":"a","tags":"t"},{"title":"B","content":"b"}]"#,
    );

    blogctl()
        .arg("import")
        .arg(&file)
        .arg("--db-path")
        .arg(dir.path().join("blog.db"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Article #1 rejected at field `tags`"))
        .stderr(predicate::str::contains("Missing fields in some articles."));
}

#[test]
fn test_import_rejects_non_list() {
    let dir = TempDir::new().unwrap();
    let file = write(dir.path(), "article.json", r#"{"title":"T"}"#);

    blogctl()
        .arg("import")
        .arg(&file)
        .arg("--db-path")
        .arg(dir.path().join("blog.db"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a list of articles"));
}
