use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // a name bound to the program itself was read as an integer
    #[error("[Type Error] '{0}' names the program and has no value")]
    FunctionAsValue(char),
    #[error("[Arithmetic Error] division by zero")]
    DivisionByZero,
    // i64::MIN / -1
    #[error("[Arithmetic Error] integer overflow in {0}")]
    ArithmeticOverflow(&'static str),
    #[error("[Nesting Error] expression nested deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error("[Output Error] {0}")]
    OutputError(String),
}

/// A runtime trap. Execution stops at the trap; `printed` holds everything the
/// program printed before it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Runtime Error: {kind}")]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub printed: Vec<i64>,
}

impl RuntimeError {
    pub fn get_message(&self) -> String {
        match &self.kind {
            ErrorKind::FunctionAsValue(name) => {
                format!("symbol '{}' is bound to the program, not a variable", name)
            }
            ErrorKind::DivisionByZero => "ArithmeticException: division by zero".to_string(),
            ErrorKind::ArithmeticOverflow(op) => format!("ArithmeticException: {} overflowed", op),
            ErrorKind::NestingTooDeep(limit) => {
                format!("expression nested deeper than {} levels", limit)
            }
            ErrorKind::OutputError(m) => m.clone(),
        }
    }
}
