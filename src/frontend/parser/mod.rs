// jlite interpreter parser
//
// Changelog:
//      26-10-12: Initial version
//      26-10-13: Cursor over a borrowed token buffer instead of popping tokens
//      26-10-13: Parse errors abort the whole parse
//      26-10-15: Trailing tokens before the closing 'end' are rejected
//      26-10-19: Nesting depth is bounded so deep input fails instead of overflowing the stack

pub mod ast;

use std::fmt;

use thiserror::Error;

use crate::frontend::lexer::token::Token;

/// Deepest combined nesting of operators and compound statements the parser
/// accepts. Anything deeper is rejected with `NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErrorType {
    UnexpectedToken,
    UnexpectedEof,
    TrailingTokens,
    NestingTooDeep,
}

impl fmt::Display for ParserErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserErrorType::UnexpectedToken => write!(f, "unexpected token"),
            ParserErrorType::UnexpectedEof => write!(f, "unexpected end of input"),
            ParserErrorType::TrailingTokens => write!(f, "trailing tokens"),
            ParserErrorType::NestingTooDeep => write!(f, "nesting too deep"),
        }
    }
}

/// A syntax error. `pos` is the index of the offending token in the token
/// stream (the stream length for a premature end of input).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Syntax error ({err_type}) at token {pos}: {message}")]
pub struct ParserError {
    pub err_type: ParserErrorType,
    pub message: String,
    pub pos: usize,
}

pub type ParseResult<T> = Result<T, ParserError>;

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    // exclusive upper bound of the tokens still owned by the parse; the
    // program's closing 'end' is taken off the back before the body is parsed
    end: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Parser<'a> {
        return Parser {
            tokens: tokens,
            pos: 0,
            end: tokens.len(),
            depth: 0,
        };
    }

    fn remaining(&self) -> usize {
        return self.end - self.pos;
    }

    fn peek_token(&self) -> Option<&'a Token> {
        return self.peek_nth(0);
    }

    fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        let tokens: &'a [Token] = self.tokens;
        if self.pos + n < self.end {
            Some(&tokens[self.pos + n])
        } else {
            None
        }
    }

    fn advance_tokens(&mut self) -> Option<&'a Token> {
        let tok = self.peek_token()?;
        self.pos += 1;
        Some(tok)
    }

    fn emit_err(&self, err_type: ParserErrorType, message: String, pos: usize) -> ParserError {
        return ParserError {
            err_type: err_type,
            message: message,
            pos: pos,
        };
    }

    /// Error for the token at `pos`, or for running out of input when the
    /// current range is exhausted.
    fn unexpected(&self, found: Option<&Token>, expected: &str, pos: usize) -> ParserError {
        match found {
            Some(tok) => self.emit_err(
                ParserErrorType::UnexpectedToken,
                format!("Expected {}, but found '{}'", expected, tok),
                pos,
            ),
            None => self.emit_err(
                ParserErrorType::UnexpectedEof,
                format!("Expected {}, but reached the end of input", expected),
                pos,
            ),
        }
    }

    fn enter_nesting(&mut self, pos: usize) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.emit_err(
                ParserErrorType::NestingTooDeep,
                format!("Nesting exceeds the limit of {} levels", MAX_NESTING_DEPTH),
                pos,
            ));
        }
        Ok(())
    }

    fn leave_nesting(&mut self) {
        self.depth -= 1;
    }

    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        let pos = self.pos;
        match self.advance_tokens() {
            Some(tok) if tok == &expected => Ok(()),
            found => Err(self.unexpected(found, &format!("'{}'", expected), pos)),
        }
    }

    fn parse_identifier(&mut self, what: &str) -> ParseResult<char> {
        let pos = self.pos;
        match self.advance_tokens() {
            Some(Token::Ident(name)) => Ok(*name),
            found => Err(self.unexpected(found, what, pos)),
        }
    }

    fn token_to_ast_binop(token: &Token) -> Option<ast::BinOp> {
        match token {
            Token::Plus => Some(ast::BinOp::Add),
            Token::Minus => Some(ast::BinOp::Sub),
            Token::Asterisk => Some(ast::BinOp::Mul),
            Token::Slash => Some(ast::BinOp::Div),
            _ => None,
        }
    }

    fn token_to_ast_relop(token: &Token) -> Option<ast::RelOp> {
        match token {
            Token::Leq => Some(ast::RelOp::Leq),
            Token::Lt => Some(ast::RelOp::Lt),
            Token::Geq => Some(ast::RelOp::Geq),
            Token::Gt => Some(ast::RelOp::Gt),
            Token::Eq => Some(ast::RelOp::Eq),
            Token::Neq => Some(ast::RelOp::Neq),
            _ => None,
        }
    }

    // ArithExpr := id | int | ArithOp ArithExpr ArithExpr
    fn parse_expression(&mut self) -> ParseResult<ast::Expression> {
        let pos = self.pos;
        match self.advance_tokens() {
            Some(Token::Ident(name)) => Ok(ast::Expression::Identifier(*name)),
            Some(Token::IntLit(value)) => Ok(ast::Expression::Literal(*value)),
            Some(tok) => match Parser::token_to_ast_binop(tok) {
                Some(operator) => {
                    self.enter_nesting(pos)?;
                    let left = self.parse_expression()?;
                    let right = self.parse_expression()?;
                    self.leave_nesting();
                    Ok(ast::Expression::BinOp {
                        operator,
                        left: Box::new(left),
                        right: Box::new(right),
                    })
                }
                None => Err(self.unexpected(Some(tok), "an arithmetic expression", pos)),
            },
            None => Err(self.unexpected(None, "an arithmetic expression", pos)),
        }
    }

    // BoolExpr := RelOp ArithExpr ArithExpr
    fn parse_boolean_expression(&mut self) -> ParseResult<ast::BooleanExpression> {
        let pos = self.pos;
        let found = self.advance_tokens();
        let operator = match found.and_then(Parser::token_to_ast_relop) {
            Some(op) => op,
            None => return Err(self.unexpected(found, "a relational operator", pos)),
        };
        let left = self.parse_expression()?;
        let right = self.parse_expression()?;
        Ok(ast::BooleanExpression {
            operator,
            left,
            right,
        })
    }

    fn parse_block(&mut self) -> ParseResult<ast::Block> {
        let mut block: ast::Block = vec![];
        while let Some(stmt) = self.parse_statement()? {
            block.push(stmt);
        }
        Ok(block)
    }

    fn parse_if_statement(&mut self) -> ParseResult<ast::Statement> {
        self.enter_nesting(self.pos)?;
        self.expect(Token::KwIf)?;
        let condition = self.parse_boolean_expression()?;
        self.expect(Token::KwThen)?;
        let then_branch = self.parse_block()?;
        self.expect(Token::KwElse)?;
        let else_branch = self.parse_block()?;
        self.expect(Token::KwEnd)?;
        self.leave_nesting();
        Ok(ast::Statement::IfStmt {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_assign_statement(&mut self) -> ParseResult<ast::Statement> {
        let target = self.parse_identifier("an identifier before '='")?;
        self.expect(Token::Assign)?;
        let value = self.parse_expression()?;
        Ok(ast::Statement::AssignStmt { target, value })
    }

    fn parse_while_statement(&mut self) -> ParseResult<ast::Statement> {
        self.enter_nesting(self.pos)?;
        self.expect(Token::KwWhile)?;
        let condition = self.parse_boolean_expression()?;
        self.expect(Token::KwDo)?;
        let body = self.parse_block()?;
        self.expect(Token::KwEnd)?;
        self.leave_nesting();
        Ok(ast::Statement::WhileStmt { condition, body })
    }

    fn parse_print_statement(&mut self) -> ParseResult<ast::Statement> {
        self.expect(Token::KwPrint)?;
        let value = self.parse_expression()?;
        Ok(ast::Statement::PrintStmt { value })
    }

    fn parse_repeat_statement(&mut self) -> ParseResult<ast::Statement> {
        self.enter_nesting(self.pos)?;
        self.expect(Token::KwRepeat)?;
        let body = self.parse_block()?;
        self.expect(Token::KwUntil)?;
        let condition = self.parse_boolean_expression()?;
        self.leave_nesting();
        Ok(ast::Statement::RepeatStmt { body, condition })
    }

    fn is_assign_start(&self) -> bool {
        return self.remaining() >= 3 && self.peek_nth(1) == Some(&Token::Assign);
    }

    /// Returns `Ok(None)` when the next token cannot start a statement, which
    /// is how the enclosing block detects its end.
    fn parse_statement(&mut self) -> ParseResult<Option<ast::Statement>> {
        // alternatives are tried in a fixed order: if, assign, while, print, repeat
        if self.peek_token() == Some(&Token::KwIf) {
            return self.parse_if_statement().map(Some);
        }
        if self.is_assign_start() {
            return self.parse_assign_statement().map(Some);
        }
        match self.peek_token() {
            Some(Token::KwWhile) => self.parse_while_statement().map(Some),
            Some(Token::KwPrint) => self.parse_print_statement().map(Some),
            Some(Token::KwRepeat) => self.parse_repeat_statement().map(Some),
            _ => Ok(None),
        }
    }

    // Program := "function" id Block "end"
    fn parse_program(&mut self) -> ParseResult<ast::Program> {
        self.expect(Token::KwFunction)?;
        let name = self.parse_identifier("a program name after 'function'")?;

        if self.remaining() == 0 {
            return Err(self.unexpected(None, "'end'", self.end));
        }
        let last = self.end - 1;
        if self.tokens[last] != Token::KwEnd {
            return Err(self.unexpected(Some(&self.tokens[last]), "'end'", last));
        }
        self.end = last;

        let body = self.parse_block()?;

        if let Some(tok) = self.peek_token() {
            return Err(self.emit_err(
                ParserErrorType::TrailingTokens,
                format!("Expected a statement or the closing 'end', but found '{}'", tok),
                self.pos,
            ));
        }

        Ok(ast::Program { name, body })
    }

    pub fn parse(&mut self) -> ParseResult<ast::Program> {
        return self.parse_program();
    }
}

/// Parses a whole program. Any deviation from the grammar fails the parse;
/// there is no partial result.
pub fn parse(tokens: &[Token]) -> ParseResult<ast::Program> {
    return Parser::new(tokens).parse();
}

#[cfg(test)]
mod tests {
    use super::ast::{BinOp, BooleanExpression, Expression, RelOp, Statement};
    use super::*;
    use crate::frontend::lexer::tokenize;

    fn parse_src(src: &str) -> ParseResult<ast::Program> {
        parse(&tokenize(src))
    }

    #[test]
    fn parses_nested_prefix_expression() {
        let program = parse_src("function f x = * + 1 2 - y 3 end").unwrap();
        assert_eq!(program.name, 'f');
        assert_eq!(
            program.body,
            vec![Statement::AssignStmt {
                target: 'x',
                value: Expression::BinOp {
                    operator: BinOp::Mul,
                    left: Box::new(Expression::BinOp {
                        operator: BinOp::Add,
                        left: Box::new(Expression::Literal(1)),
                        right: Box::new(Expression::Literal(2)),
                    }),
                    right: Box::new(Expression::BinOp {
                        operator: BinOp::Sub,
                        left: Box::new(Expression::Identifier('y')),
                        right: Box::new(Expression::Literal(3)),
                    }),
                },
            }]
        );
    }

    #[test]
    fn parses_repeat_with_condition() {
        let program = parse_src("function f repeat print 7 until ~= x 0 end").unwrap();
        assert_eq!(
            program.body,
            vec![Statement::RepeatStmt {
                body: vec![Statement::PrintStmt {
                    value: Expression::Literal(7)
                }],
                condition: BooleanExpression {
                    operator: RelOp::Neq,
                    left: Expression::Identifier('x'),
                    right: Expression::Literal(0),
                },
            }]
        );
    }

    #[test]
    fn empty_program_body() {
        let program = parse_src("function m end").unwrap();
        assert_eq!(program.name, 'm');
        assert!(program.body.is_empty());
    }

    #[test]
    fn if_requires_else_branch() {
        let err = parse_src("function f if < 1 2 then print 1 end end").unwrap_err();
        assert_eq!(err.err_type, ParserErrorType::UnexpectedToken);
        assert!(err.message.contains("'else'"));
    }

    #[test]
    fn missing_terminator_is_eof() {
        let err = parse_src("function f while < 1 2 do print 1 end").unwrap_err();
        assert_eq!(err.err_type, ParserErrorType::UnexpectedEof);
    }

    #[test]
    fn unknown_token_stops_block_and_is_reported() {
        let err = parse_src("function f print 1 foo end").unwrap_err();
        assert_eq!(err.err_type, ParserErrorType::TrailingTokens);
        assert_eq!(err.pos, 4);
        assert!(err.message.contains("foo"));
    }

    #[test]
    fn assignment_lookahead_precedes_while() {
        // `while = 1` looks like an assignment and is rejected as one
        let err = parse_src("function f while = 1 end").unwrap_err();
        assert_eq!(err.err_type, ParserErrorType::UnexpectedToken);
        assert_eq!(err.pos, 2);
    }

    #[test]
    fn program_must_start_with_function() {
        let err = parse_src("print 1").unwrap_err();
        assert_eq!(err.pos, 0);
        assert!(parse(&[]).is_err());
        assert!(parse_src("function f").is_err());
        assert!(parse_src("function f print 1").is_err());
    }

    #[test]
    fn deep_expression_is_rejected_not_overflowed() {
        let src = format!("function f print {}1 end", "+ 1 ".repeat(5000));
        let err = parse_src(&src).unwrap_err();
        assert_eq!(err.err_type, ParserErrorType::NestingTooDeep);
        // the operator that crosses the limit
        assert_eq!(err.pos, 3 + 2 * MAX_NESTING_DEPTH);
    }

    #[test]
    fn expression_at_the_limit_parses() {
        let src = format!("function f print {}1 end", "+ 1 ".repeat(MAX_NESTING_DEPTH));
        assert!(parse_src(&src).is_ok());
    }

    #[test]
    fn deep_statement_nesting_is_rejected() {
        let src = format!(
            "function f {}print 1 {} end",
            "while < 1 0 do ".repeat(3000),
            "end ".repeat(3000)
        );
        let err = parse_src(&src).unwrap_err();
        assert_eq!(err.err_type, ParserErrorType::NestingTooDeep);
    }

    #[test]
    fn nesting_depth_is_released_between_siblings() {
        // many shallow expressions in sequence never add up to the limit
        let src = format!("function f {}end", "print + 1 + 2 3 ".repeat(2 * MAX_NESTING_DEPTH));
        let program = parse_src(&src).unwrap();
        assert_eq!(program.body.len(), 2 * MAX_NESTING_DEPTH);
    }

    #[test]
    fn infix_expressions_are_rejected() {
        assert!(parse_src("function f x = 1 + 2 end").is_err());
        assert!(parse_src("function f if x <= 5 then else end end").is_err());
    }
}
