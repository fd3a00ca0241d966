// jlite interpreter token definitions
//
// Changelog:
//      26-10-12: Initial version
//      26-10-14: Display impl for diagnostics and error messages

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Ident(char),
    IntLit(i64),

    // any word the lexer could not classify, rejected later by the parser
    Unknown(String),

    Assign,

    Plus,
    Minus,
    Asterisk,
    Slash,

    Eq,
    Neq,
    Lt,
    Gt,
    Leq,
    Geq,

    KwFunction,
    KwEnd,
    KwIf,
    KwThen,
    KwElse,
    KwWhile,
    KwDo,
    KwRepeat,
    KwUntil,
    KwPrint,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "{}", name),
            Token::IntLit(value) => write!(f, "{}", value),
            Token::Unknown(text) => write!(f, "{}", text),
            Token::Assign => write!(f, "="),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Eq => write!(f, "=="),
            Token::Neq => write!(f, "~="),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::Leq => write!(f, "<="),
            Token::Geq => write!(f, ">="),
            Token::KwFunction => write!(f, "function"),
            Token::KwEnd => write!(f, "end"),
            Token::KwIf => write!(f, "if"),
            Token::KwThen => write!(f, "then"),
            Token::KwElse => write!(f, "else"),
            Token::KwWhile => write!(f, "while"),
            Token::KwDo => write!(f, "do"),
            Token::KwRepeat => write!(f, "repeat"),
            Token::KwUntil => write!(f, "until"),
            Token::KwPrint => write!(f, "print"),
        }
    }
}
