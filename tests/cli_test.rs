use std::path::Path;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jlite"))
        .args(args)
        .output()
        .expect("failed to launch jlite")
}

#[test]
fn successful_program_exits_zero() {
    let out = run_cli(&["./jl_tests/01_if_else.jl"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "3\n");
}

#[test]
fn missing_file_exits_one() {
    let file_path = "./jl_tests/does_not_exist.jl";
    assert!(!Path::new(file_path).exists());
    let out = run_cli(&[file_path]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not found"));
}

#[test]
fn syntax_error_exits_one_without_output() {
    let out = run_cli(&["./jl_tests/06_missing_end.jl"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Syntax error"));
}

#[test]
fn runtime_error_exits_one_after_earlier_output() {
    let out = run_cli(&["./jl_tests/05_div_zero.jl"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("division by zero"));
}

#[test]
fn trace_mode_dumps_symbol_table() {
    let out = run_cli(&["./jl_tests/01_if_else.jl", "--mode", "trace"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FINAL SYMBOL TABLE"));
    assert!(stdout.contains("VARIABLE"));
}
