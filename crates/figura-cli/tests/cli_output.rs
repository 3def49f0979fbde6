//! Output verification tests for the figura binary
//!
//! These tests run the built CLI on temporary descriptor files and check
//! what it prints and how it exits.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_figura"))
        .current_dir(dir)
        .args(args)
        .env("FIGURA_LOG_LEVEL", "off")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .output()
        .expect("failed to run figura")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_plots_figures_in_ascii() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("shapes.txt"),
        "# demo\n<Circulo-Aa10-(0,0)-400>\n\n<Triangulo-Ii99-(-800,-800)-(-200,-800)-(-500,-300)>\n",
    )
    .unwrap();

    let output = run_cli(dir.path(), &["shapes.txt", "--style", "ascii", "--color", "never"]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Processing file: shapes.txt"));
    assert!(stdout.contains("Drawing circle: Aa10 @ (0,0), R=400"));
    assert!(stdout.contains("Drawing triangle: Ii99"));
    assert!(stdout.contains("Geometric Figures"));
    assert!(stdout.contains("X axis"));
    assert!(stdout.contains("Aa10"));
    assert!(!stdout.contains("\x1b["));
    assert!(stdout.is_ascii());
}

#[test]
fn test_defaults_to_fich_txt() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fich.txt"), "<Retangulo-Ee100-(0,0)-(300,200)>\n").unwrap();

    let output = run_cli(dir.path(), &["--color", "never"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Processing file: fich.txt"));
    assert!(stdout.contains("Drawing rectangle: Ee100 [(0,0) to (300,200)]"));
}

#[test]
fn test_missing_file_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_cli(dir.path(), &["missing.txt"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Error: File not found: 'missing.txt'"));
    assert!(!stdout.contains("Geometric Figures"));
}

#[test]
fn test_no_figures_message() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("empty.txt"), "# only a comment\n\n   \n").unwrap();

    let output = run_cli(dir.path(), &["empty.txt"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("No valid figures were found or drawn."));
    assert!(!stdout.contains("Geometric Figures"));
}

#[test]
fn test_bad_lines_are_reported_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("mixed.txt"),
        "<Quadrado-Aa10-(0,0)-5>\n<Circulo-Ab11-(10,10)-50>\n<Circulo-Xx10-(0,0)-5>\n",
    )
    .unwrap();

    let output = run_cli(dir.path(), &["mixed.txt", "--color", "never"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Line 1 ignored (invalid format): <Quadrado-Aa10-(0,0)-5>"));
    assert!(stdout.contains("Line 3 ignored (invalid format): <Circulo-Xx10-(0,0)-5>"));
    assert!(stdout.contains("Drawing circle: Ab11"));
}

#[test]
fn test_color_always_emits_ansi() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("c.txt"), "<Circulo-Aa10-(0,0)-500>\n").unwrap();

    let output = run_cli(dir.path(), &["c.txt", "--color", "always"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("\x1b["));
}

#[test]
fn test_custom_title_and_width() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("c.txt"), "<Circulo-Aa10-(0,0)-500>\n").unwrap();

    let output = run_cli(
        dir.path(),
        &["c.txt", "--color", "never", "--width", "40", "--title", "Tiny"],
    );
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Tiny"));
    assert!(!stdout.contains("Geometric Figures"));
    let widest = stdout
        .lines()
        .skip_while(|l| !l.contains("Tiny"))
        .map(|l| l.chars().count())
        .max()
        .unwrap();
    assert!(widest < 60, "plot is {} columns wide", widest);
}

#[test]
fn test_invalid_flag_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["--style", "fancy"]);
    assert!(!output.status.success());
}
