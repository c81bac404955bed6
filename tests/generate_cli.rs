//! Exit status and output of the `generate-map` binary
#![cfg(feature = "mapgen")]

use std::process::{Command, Output};

fn generate_map(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-map"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn smallest_map_on_stdout() {
    let output = generate_map(&["-n", "1", "-r", "0", "--seed", "3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[0, 0, 0, 0, -1, 0, 0]\n"
    );
}

#[test]
fn seeded_runs_agree() {
    let args = ["--size", "4", "--ratio", "0.3", "--seed", "99"];
    let a = generate_map(&args);
    let b = generate_map(&args);
    assert_eq!(a.status.code(), Some(0));
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn both_shapes_generate_hexagonal() {
    let output = generate_map(&["-x", "-s", "-n", "2", "--seed", "1"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim().split(", ").count(), 19);
}

#[test]
fn square_shape_fails() {
    let output = generate_map(&["-s"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("not yet supported"));
}

#[test]
fn invalid_options_fail() {
    for args in [&["--bogus"][..], &["--size", "0"], &["--ratio", "1.5"], &["--seed", "x"]] {
        let output = generate_map(args);
        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn help_succeeds() {
    let output = generate_map(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout).unwrap().contains("--ratio"));
}
