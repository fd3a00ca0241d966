use std::fs;
use std::path::Path;
use jlite::backend::interpreter::error::ErrorKind;
use jlite::frontend::lexer::tokenize;
use jlite::frontend::parser::{ParserErrorType, parse};
use jlite::{Error, run_source};

fn load(name: &str) -> String {
    let file_path = format!("./jl_tests/{}", name);
    assert!(Path::new(&file_path).exists(), "missing test program: {}", file_path);
    fs::read_to_string(&file_path).unwrap()
}

#[test]
fn sample_programs_print_expected_values() {
    let cases: [(&str, Vec<i64>); 4] = [
        ("01_if_else.jl", vec![3]),
        ("02_factorial.jl", vec![3628800]),
        ("03_gcd.jl", vec![21]),
        ("04_collatz.jl", vec![111]),
    ];
    for (name, expected) in cases {
        let exec = run_source(&load(name)).unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert_eq!(exec.output, expected, "{}", name);
    }
}

#[test]
fn division_by_zero_program_keeps_earlier_output() {
    match run_source(&load("05_div_zero.jl")) {
        Err(Error::Runtime(e)) => {
            assert_eq!(e.kind, ErrorKind::DivisionByZero);
            assert_eq!(e.printed, vec![1]);
        }
        other => panic!("expected a runtime error, got {:?}", other),
    }
}

#[test]
fn missing_end_program_is_rejected() {
    let err = parse(&tokenize(&load("06_missing_end.jl"))).unwrap_err();
    assert_eq!(err.err_type, ParserErrorType::UnexpectedEof);
}

#[test]
fn printed_programs_reparse_identically() {
    for name in ["01_if_else.jl", "02_factorial.jl", "03_gcd.jl", "04_collatz.jl"] {
        let program = parse(&tokenize(&load(name))).unwrap();
        let reparsed = parse(&tokenize(&program.to_string())).unwrap();
        assert_eq!(reparsed, program, "{}", name);
    }
}
