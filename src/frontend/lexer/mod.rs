// jlite interpreter lexical analyzer
//
// Changelog:
//      26-10-12: Initial version
//      26-10-13: Parentheses are word separators, not tokens

pub mod token;

use crate::frontend::lexer::token::Token;

const COMMENT_PREFIX: &str = "//";

pub struct Lexer<'a> {
    input: &'a str,
}

impl Lexer<'_> {
    pub fn new(input: &'_ str) -> Lexer<'_> {
        return Lexer { input: input };
    }

    /// Source text with every `//` comment line removed.
    fn strip_comments(&self) -> String {
        return self
            .input
            .lines()
            .filter(|line| !line.starts_with(COMMENT_PREFIX))
            .collect::<Vec<_>>()
            .join("\n");
    }

    fn is_separator(c: char) -> bool {
        return c.is_whitespace() || c == '(' || c == ')';
    }

    fn is_keyword(s: &str) -> Option<Token> {
        match s {
            "function" => Some(Token::KwFunction),
            "end" => Some(Token::KwEnd),
            "if" => Some(Token::KwIf),
            "then" => Some(Token::KwThen),
            "else" => Some(Token::KwElse),
            "while" => Some(Token::KwWhile),
            "do" => Some(Token::KwDo),
            "repeat" => Some(Token::KwRepeat),
            "until" => Some(Token::KwUntil),
            "print" => Some(Token::KwPrint),
            _ => None,
        }
    }

    fn is_operator(s: &str) -> Option<Token> {
        match s {
            "=" => Some(Token::Assign),
            "<=" => Some(Token::Leq),
            "<" => Some(Token::Lt),
            ">=" => Some(Token::Geq),
            ">" => Some(Token::Gt),
            "==" => Some(Token::Eq),
            "~=" => Some(Token::Neq),
            "+" => Some(Token::Plus),
            "-" => Some(Token::Minus),
            "*" => Some(Token::Asterisk),
            "/" => Some(Token::Slash),
            _ => None,
        }
    }

    fn classify(word: &str) -> Token {
        if let Some(tok) = Lexer::is_keyword(word).or_else(|| Lexer::is_operator(word)) {
            return tok;
        }

        if let Ok(value) = word.parse::<i64>() {
            return Token::IntLit(value);
        }

        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (Some(name), None) => Token::Ident(name),
            _ => Token::Unknown(word.to_string()),
        }
    }

    pub fn tokenize(&self) -> Vec<Token> {
        let source = self.strip_comments();
        return source
            .split(Lexer::is_separator)
            .filter(|word| !word.is_empty())
            .map(Lexer::classify)
            .collect();
    }
}

/// Splits `source` into tokens. Never fails: words that are not part of the
/// vocabulary come back as [`Token::Unknown`].
pub fn tokenize(source: &str) -> Vec<Token> {
    return Lexer::new(source).tokenize();
}
