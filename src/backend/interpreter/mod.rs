// jlite tree-walking interpreter
//
// Changelog:
//      26-10-13: Initial evaluator over the AST
//      26-10-14: Runtime traps are returned as RuntimeError; output before a trap is kept
//      26-10-15: Streaming writer; LogLevel shared with the CLI
//      26-10-19: Expression depth bounded like the parser's

pub mod error;
pub mod symbol;

use std::io::{self, Write};

use clap::ValueEnum;

use crate::backend::interpreter::error::{ErrorKind, RuntimeError};
use crate::backend::interpreter::symbol::{Symbol, SymbolTable};
use crate::frontend::parser::MAX_NESTING_DEPTH;
use crate::frontend::parser::ast::{BinOp, Block, BooleanExpression, Expression, Program, Statement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Release,
    Debug,
    Trace,
}

/// Everything a finished run leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub output: Vec<i64>,
    pub symbols: SymbolTable,
}

// per-run state; created at the top of `interpret` and never outlives it
struct RunState {
    symbols: SymbolTable,
    output: Vec<i64>,
}

pub struct Interpreter<W: Write> {
    writer: W,
    mode: LogLevel,
}

impl Interpreter<io::Sink> {
    pub fn new() -> Self {
        Self {
            writer: io::sink(),
            mode: LogLevel::Release,
        }
    }
}

impl Default for Interpreter<io::Sink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Every printed value is also written to `writer`, one per line, as soon
    /// as the print statement runs.
    pub fn with_writer(writer: W, mode: LogLevel) -> Self {
        Self { writer, mode }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn interpret(&mut self, program: &Program) -> Result<Execution, RuntimeError> {
        let mut state = RunState {
            symbols: SymbolTable::new(),
            output: Vec::new(),
        };
        state.symbols.bind(program.name, Symbol::Function);

        if self.mode != LogLevel::Release {
            println!(
                "[Interp] Starting program '{}' ({} top-level statements).",
                program.name,
                program.body.len()
            );
        }

        if let Err(kind) = self.exec_block(&mut state, &program.body) {
            if self.mode != LogLevel::Release {
                println!("[Interp] Execution trapped: {}", kind);
            }
            return Err(RuntimeError {
                kind,
                printed: state.output,
            });
        }

        if self.mode != LogLevel::Release {
            println!(
                "[Interp] Execution completed: {} values printed, {} symbols bound.",
                state.output.len(),
                state.symbols.len()
            );
        }

        Ok(Execution {
            output: state.output,
            symbols: state.symbols,
        })
    }

    fn exec_block(&mut self, state: &mut RunState, block: &Block) -> Result<(), ErrorKind> {
        for stmt in block {
            self.exec_statement(state, stmt)?;
        }
        Ok(())
    }

    fn exec_statement(&mut self, state: &mut RunState, stmt: &Statement) -> Result<(), ErrorKind> {
        match stmt {
            Statement::IfStmt {
                condition,
                then_branch,
                else_branch,
            } => {
                if eval_condition(&state.symbols, condition)? {
                    self.exec_block(state, then_branch)
                } else {
                    self.exec_block(state, else_branch)
                }
            }
            Statement::AssignStmt { target, value } => {
                let v = eval_expression(&state.symbols, value)?;
                if self.mode == LogLevel::Trace {
                    println!("[Interp] {} <- {}", target, v);
                }
                state.symbols.bind(*target, Symbol::Variable(v));
                Ok(())
            }
            Statement::WhileStmt { condition, body } => {
                while eval_condition(&state.symbols, condition)? {
                    self.exec_block(state, body)?;
                }
                Ok(())
            }
            Statement::PrintStmt { value } => {
                let v = eval_expression(&state.symbols, value)?;
                state.output.push(v);
                writeln!(self.writer, "{}", v).map_err(|e| ErrorKind::OutputError(e.to_string()))
            }
            Statement::RepeatStmt { body, condition } => {
                loop {
                    self.exec_block(state, body)?;
                    if eval_condition(&state.symbols, condition)? {
                        break;
                    }
                }
                Ok(())
            }
        }
    }
}

fn eval_condition(symbols: &SymbolTable, cond: &BooleanExpression) -> Result<bool, ErrorKind> {
    let lhs = eval_expression(symbols, &cond.left)?;
    let rhs = eval_expression(symbols, &cond.right)?;
    Ok(cond.operator.apply(lhs, rhs))
}

fn eval_expression(symbols: &SymbolTable, expr: &Expression) -> Result<i64, ErrorKind> {
    eval_nested(symbols, expr, 0)
}

// parsed programs never exceed the bound; hand-built trees can
fn eval_nested(symbols: &SymbolTable, expr: &Expression, depth: usize) -> Result<i64, ErrorKind> {
    match expr {
        Expression::Identifier(name) => match symbols.get(*name) {
            None => Ok(0),
            Some(Symbol::Variable(v)) => Ok(v),
            Some(Symbol::Function) => Err(ErrorKind::FunctionAsValue(*name)),
        },
        Expression::Literal(v) => Ok(*v),
        Expression::BinOp {
            operator,
            left,
            right,
        } => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(ErrorKind::NestingTooDeep(MAX_NESTING_DEPTH));
            }
            let lhs = eval_nested(symbols, left, depth + 1)?;
            let rhs = eval_nested(symbols, right, depth + 1)?;
            apply_binop(*operator, lhs, rhs)
        }
    }
}

// + - * wrap like machine integers; / truncates toward zero
fn apply_binop(op: BinOp, lhs: i64, rhs: i64) -> Result<i64, ErrorKind> {
    match op {
        BinOp::Add => Ok(lhs.wrapping_add(rhs)),
        BinOp::Sub => Ok(lhs.wrapping_sub(rhs)),
        BinOp::Mul => Ok(lhs.wrapping_mul(rhs)),
        BinOp::Div => {
            if rhs == 0 {
                return Err(ErrorKind::DivisionByZero);
            }
            lhs.checked_div(rhs)
                .ok_or(ErrorKind::ArithmeticOverflow("division"))
        }
    }
}

/// Runs `program` on a fresh symbol table, collecting printed values.
pub fn interpret(program: &Program) -> Result<Execution, RuntimeError> {
    Interpreter::new().interpret(program)
}
