//! jlite: an interpreter for a small prefix-notation imperative language.
//!
//! Source text goes through [`frontend::lexer`], [`frontend::parser`] and
//! finally the tree-walking [`backend::interpreter`].

pub mod backend;
pub mod frontend;

use thiserror::Error;

use crate::backend::interpreter::Execution;
use crate::backend::interpreter::error::RuntimeError;
use crate::frontend::parser::ParserError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] ParserError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Lexes, parses and runs `source`.
pub fn run_source(source: &str) -> Result<Execution, Error> {
    let tokens = frontend::lexer::tokenize(source);
    let program = frontend::parser::parse(&tokens)?;
    Ok(backend::interpreter::interpret(&program)?)
}
