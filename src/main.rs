use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use jlite::backend::interpreter::{Execution, Interpreter, LogLevel};
use jlite::frontend::lexer::token::Token;
use jlite::frontend::lexer::tokenize;
use jlite::frontend::parser::ast::Program;

#[derive(Parser)]
#[command(name = "jlite")]
#[command(version = "0.1.0")]
#[command(about = "jlite: an interpreter for a tiny prefix-notation imperative language", long_about = None)]
struct Cli {
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = LogLevel::Release)]
    mode: LogLevel,
}

// Dumps whatever the pipeline produced when it goes out of scope, so a
// trace is printed on both the success and the error path.
struct TraceGuard {
    mode: LogLevel,
    tokens: Vec<Token>,
    program: Option<Program>,
    execution: Option<Execution>,
}

impl Drop for TraceGuard {
    fn drop(&mut self) {
        if self.mode == LogLevel::Trace {
            println!("\n{:^80}", "****************************************************************");
            println!("{:^80}", "JLITE DIAGNOSTIC TRACE (AUTO-DUMP)");
            println!("{:^80}", "****************************************************************");

            print_token_report(&self.tokens);
            if let Some(program) = &self.program {
                print_ast_report(program);
            }
            if let Some(execution) = &self.execution {
                print_symbol_report(execution);
            }

            println!("\n{:^80}\n", "--- END OF TRACE DATA ---");
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let file_path = &cli.input;

    if !file_path.exists() {
        eprintln!("[Error] Source file not found: {}", file_path.display());
        std::process::exit(1);
    }

    let source = match fs::read_to_string(file_path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("[Error] Failed to read source file at {}: {}", file_path.display(), e);
            std::process::exit(1);
        }
    };

    if cli.mode != LogLevel::Release {
        println!("[jlite] Running: {}", file_path.display());
    }

    let mut guard = TraceGuard {
        mode: cli.mode,
        tokens: tokenize(&source),
        program: None,
        execution: None,
    };

    if cli.mode != LogLevel::Release {
        println!("[jlite] Lexed {} tokens.", guard.tokens.len());
    }

    let parsed = jlite::frontend::parser::parse(&guard.tokens);
    let program = match parsed {
        Ok(program) => program,
        Err(e) => {
            eprintln!("[Error] {}", e);
            drop(guard);
            std::process::exit(1);
        }
    };

    if cli.mode != LogLevel::Release {
        println!("--- [Execution Start] ---");
    }

    let mut interp = Interpreter::with_writer(io::stdout(), cli.mode);
    let result = interp.interpret(&program);
    guard.program = Some(program);

    match result {
        Ok(execution) => {
            guard.execution = Some(execution);
            if cli.mode != LogLevel::Release {
                println!("--- [Execution Finished] ---");
            }
        }
        Err(e) => {
            eprintln!("[Error] {}", e);
            eprintln!("  {}", e.get_message());
            eprintln!("  Values printed before the error: {}", e.printed.len());
            drop(guard);
            std::process::exit(1);
        }
    }
}

fn print_token_report(tokens: &[Token]) {
    println!("\n{:20} {:^40} {:20}", "==================", "TOKEN STREAM", "==================");
    for (i, tok) in tokens.iter().enumerate() {
        let note = if let Token::Unknown(_) = tok { "  <- unrecognized" } else { "" };
        println!("{:>5} | {:<12}{}", i, tok.to_string(), note);
    }
}

fn print_ast_report(program: &Program) {
    println!("\n{:20} {:^40} {:20}", "==================", "PROGRAM (AST)", "==================");
    println!("{}", program);
}

fn print_symbol_report(execution: &Execution) {
    println!("\n{:20} {:^40} {:20}", "==================", "FINAL SYMBOL TABLE", "==================");
    print!("{}", execution.symbols);
    println!("\n  Printed values: {:?}", execution.output);
}
