//! Exit status and file writes of the `annotate` binary

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn scratch_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "hex-pathmaps-annotate-{}-{}.txt",
        std::process::id(),
        name
    ));
    let _ = fs::remove_file(&path);
    path
}

/// Run annotator with `args`, feeding `input` on stdin
fn annotate(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_annotate"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    if let Some(mut stdin) = child.stdin.take() {
        // The process may exit before reading, e.g. on bad options
        let _ = stdin.write_all(input.as_bytes());
    }
    child.wait_with_output().unwrap()
}

#[test]
fn default_endpoint_is_appended() {
    let path = scratch_file("default");
    let file = path.to_str().unwrap();

    let output = annotate(&["-f", file], "[0,1,0,0,-1,0,0]\n\n");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(" 0 S T"));
    assert!(stdout.contains("T = (1, 0)"));
    assert!(stdout.contains("P = (1, 0)"));

    let output = annotate(&["--file", file], "[0,1,0,0,-1,0,0]\n1, -1\n");
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "0 1 0 0 -1 0 0 0 0 0 0 1 0 0\n0 1 0 0 -1 0 0 0 1 0 0 0 0 0\n"
    );
    fs::remove_file(&path).unwrap();
}

#[test]
fn unterminated_map_writes_nothing() {
    let path = scratch_file("unterminated");
    let output = annotate(&["-f", path.to_str().unwrap()], "[1,2,3\n\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());
}

#[test]
fn map_without_target_writes_nothing() {
    let path = scratch_file("no-target");
    let output = annotate(&["-f", path.to_str().unwrap()], "[0,0,0,0,0,0,0]\n\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());
}

#[test]
fn off_grid_endpoint_writes_nothing() {
    let path = scratch_file("off-grid");
    let output = annotate(&["-f", path.to_str().unwrap()], "[0,0,0,0,-1,0,0]\n1, 1\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());
}

#[test]
fn endpoint_without_comma_writes_nothing() {
    let path = scratch_file("no-comma");
    let output = annotate(&["-f", path.to_str().unwrap()], "[0,0,0,0,-1,0,0]\n1 0\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());
}

#[test]
fn unknown_option_fails() {
    let path = scratch_file("bogus");
    let output = annotate(&["-f", path.to_str().unwrap(), "--bogus"], "[0,0,0,0,-1,0,0]\n\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
    assert!(!path.exists());
}

#[test]
fn help_succeeds() {
    let output = annotate(&["--help"], "");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout).unwrap().contains("--file"));
}
