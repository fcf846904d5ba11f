use std::fs;
use std::path::PathBuf;

use cli::commands::{check, tokens, Outcome};
use tempfile::TempDir;

fn write_source(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("decls.mod");
    fs::write(&path, content).unwrap();
    path
}

fn transcript(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("decls.out")).unwrap()
}

// ======================================================================
// check_file
// ======================================================================

#[test]
fn check_valid_source() {
    let dir = tempfile::tempdir().unwrap();
    let src = "TYPE T = RECORD a, b: [1..10]; END;\nVAR x: POINTER TO T;\n";
    let path = write_source(&dir, src);

    let mut out = Vec::new();
    let outcome = check::check_file(&path, &mut out).unwrap();
    assert!(matches!(outcome, Outcome::Accepted));
    assert_eq!(String::from_utf8(out).unwrap(), "Parsed correctly\n");
    assert_eq!(transcript(&dir), src);
}

#[test]
fn check_empty_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "");
    let outcome = check::check_file(&path, &mut Vec::new()).unwrap();
    assert!(matches!(outcome, Outcome::Accepted));
    assert_eq!(transcript(&dir), "");
}

#[test]
fn check_missing_colon_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "VAR x y;\n");

    let mut out = Vec::new();
    let outcome = check::check_file(&path, &mut out).unwrap();
    match &outcome {
        Outcome::Rejected(err) => assert_eq!(err.message(), ": expected"),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(out.is_empty());
    assert_eq!(
        transcript(&dir),
        "VAR x y;\nsyntax error at line 1, col 7: : expected\n"
    );
}

#[test]
fn check_unterminated_comment_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "TYPE T = X;\n(* unterminated");

    let outcome = check::check_file(&path, &mut Vec::new()).unwrap();
    assert!(matches!(outcome, Outcome::Rejected(_)));
    let text = transcript(&dir);
    assert!(text.starts_with("TYPE T = X;\n(* unterminated\n"), "got: {text}");
    assert!(text.ends_with("unterminated comment\n"), "got: {text}");
}

#[test]
fn check_nonexistent_file_returns_error() {
    let result = check::check_file(
        std::path::Path::new("/tmp/nonexistent_m2decl_test.mod"),
        &mut Vec::new(),
    );
    assert!(result.is_err());
}

#[test]
fn check_refuses_source_named_like_its_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("decls.out");
    let src = "VAR x y;\nTYPE A = B; C = D; E = F;\n";
    fs::write(&path, src).unwrap();

    let err = check::check_file(&path, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("Refusing to overwrite"), "got: {err}");
    assert_eq!(fs::read_to_string(&path).unwrap(), src);
}

#[test]
fn dump_tokens_refuses_source_named_like_its_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("decls.out");
    fs::write(&path, "TYPE T = X;").unwrap();

    assert!(tokens::dump_tokens(&path, &mut Vec::new()).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "TYPE T = X;");
}

// ======================================================================
// dump_tokens
// ======================================================================

#[test]
fn dump_tokens_lists_codes_and_lexemes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "TYPE T = [1..2]; (* done *)");

    let mut out = Vec::new();
    let outcome = tokens::dump_tokens(&path, &mut out).unwrap();
    assert!(matches!(outcome, Outcome::Accepted));
    let lines: Vec<String> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(
        lines,
        [
            "  4 TYPE", "  2 T", " 13 =", " 18 [", "  3 1", " 23 ..", "  3 2", " 19 ]", " 15 ;",
            "  1 ",
        ]
    );
    assert_eq!(transcript(&dir), "TYPE T = [1..2]; (* done *)");
}

#[test]
fn dump_tokens_stops_at_invalid_character() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "VAR $");

    let mut out = Vec::new();
    let outcome = tokens::dump_tokens(&path, &mut out).unwrap();
    match &outcome {
        Outcome::Rejected(err) => assert_eq!(err.message(), "invalid character '$'"),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(String::from_utf8(out).unwrap(), "  5 VAR\n");
}
