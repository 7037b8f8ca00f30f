use predicates::prelude::*;
use tempfile::TempDir;

use crate::md2html_cmd;
use crate::write_default_config;
use crate::DOC;

#[test]
fn test_end_to_end_with_default_config() {
    let home = TempDir::new().unwrap();
    write_default_config(&home, "inline_styles:\n  table: \"border: 1px solid black\"\n");

    let output = md2html_cmd(&home).write_stdin(DOC).output().unwrap();

    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.contains("<h1>Hi</h1>"), "got: {}", html);
    assert!(html.contains(r#"<table style="border: 1px solid black">"#));
    assert!(html.contains("<td>1</td>"));
    assert!(html.contains("<td>2</td>"));
    assert!(!html.contains("---"));
    assert!(!html.contains("title: x"));
    assert!(!html.contains("<html"));
}

#[test]
fn test_missing_config_gives_unstyled_output() {
    let home = TempDir::new().unwrap();

    let output = md2html_cmd(&home)
        .write_stdin(DOC)
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .get_output()
        .stdout
        .clone();

    let html = String::from_utf8(output).unwrap();
    assert!(html.contains("<table>"));
    assert!(!html.contains("style="));
}

#[test]
fn test_arguments_are_ignored() {
    let home = TempDir::new().unwrap();
    write_default_config(&home, "inline_styles:\n  h1: \"color: red\"\n");

    for args in [vec!["x.md"], vec!["--config", "other.yaml"], vec!["-x", "a", "b"]] {
        md2html_cmd(&home)
            .args(&args)
            .write_stdin("# Hi\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"<h1 style="color: red">Hi</h1>"#));
    }
}

#[test]
fn test_malformed_config_is_not_fatal() {
    let home = TempDir::new().unwrap();
    write_default_config(&home, "inline_styles: [oops");

    let unstyled = md2html_cmd(&TempDir::new().unwrap())
        .write_stdin(DOC)
        .output()
        .unwrap();

    md2html_cmd(&home)
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout(String::from_utf8(unstyled.stdout).unwrap())
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn test_void_element_is_styled() {
    let home = TempDir::new().unwrap();
    write_default_config(&home, "inline_styles:\n  input: \"margin: 0\"\n");

    md2html_cmd(&home)
        .write_stdin("- [x] done\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"style="margin: 0""#));
}

#[test]
fn test_unterminated_frontmatter_is_kept() {
    let home = TempDir::new().unwrap();

    md2html_cmd(&home)
        .write_stdin("---\ntitle: x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("title: x"));
}

#[test]
fn test_empty_input() {
    let home = TempDir::new().unwrap();

    md2html_cmd(&home)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_utf8_fails_without_output() {
    let home = TempDir::new().unwrap();

    md2html_cmd(&home)
        .write_stdin(vec![0xffu8, 0xfe, b'\n'])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_fatal_error_is_one_line() {
    let home = TempDir::new().unwrap();

    let output = md2html_cmd(&home)
        .env("RUST_BACKTRACE", "1")
        .write_stdin(vec![0xffu8, 0xfe, b'\n'])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "stderr: {}", stderr);
    assert!(stderr.starts_with("md2html: input is not valid UTF-8: "));
}
