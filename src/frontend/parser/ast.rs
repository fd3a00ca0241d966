// jlite interpreter AST definitions
//
// Changelog:
//      26-10-12: Initial version
//      26-10-14: Source printer used by the trace dump

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: char,
    pub body: Block,
}

pub type Block = Vec<Statement>;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    IfStmt {
        condition: BooleanExpression,
        then_branch: Block,
        else_branch: Block,
    },
    AssignStmt {
        target: char,
        value: Expression,
    },
    WhileStmt {
        condition: BooleanExpression,
        body: Block,
    },
    PrintStmt {
        value: Expression,
    },
    RepeatStmt {
        body: Block,
        condition: BooleanExpression,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpression {
    pub operator: RelOp,
    pub left: Expression,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(char),
    Literal(i64),
    BinOp {
        operator: BinOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Leq,
    Lt,
    Geq,
    Gt,
    Eq,
    Neq,
}

impl RelOp {
    pub fn apply(self, lhs: i64, rhs: i64) -> bool {
        match self {
            RelOp::Leq => lhs <= rhs,
            RelOp::Lt => lhs < rhs,
            RelOp::Geq => lhs >= rhs,
            RelOp::Gt => lhs > rhs,
            RelOp::Eq => lhs == rhs,
            RelOp::Neq => lhs != rhs,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        };
        write!(f, "{}", op)
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            RelOp::Leq => "<=",
            RelOp::Lt => "<",
            RelOp::Geq => ">=",
            RelOp::Gt => ">",
            RelOp::Eq => "==",
            RelOp::Neq => "~=",
        };
        write!(f, "{}", op)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::BinOp {
                operator,
                left,
                right,
            } => write!(f, "{} {} {}", operator, left, right),
        }
    }
}

impl fmt::Display for BooleanExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.operator, self.left, self.right)
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, block: &Block, depth: usize) -> fmt::Result {
    for stmt in block {
        write_statement(f, stmt, depth)?;
    }
    Ok(())
}

fn write_statement(f: &mut fmt::Formatter<'_>, stmt: &Statement, depth: usize) -> fmt::Result {
    let indent = "    ".repeat(depth);
    match stmt {
        Statement::IfStmt {
            condition,
            then_branch,
            else_branch,
        } => {
            writeln!(f, "{}if {} then", indent, condition)?;
            write_block(f, then_branch, depth + 1)?;
            writeln!(f, "{}else", indent)?;
            write_block(f, else_branch, depth + 1)?;
            writeln!(f, "{}end", indent)
        }
        Statement::AssignStmt { target, value } => writeln!(f, "{}{} = {}", indent, target, value),
        Statement::WhileStmt { condition, body } => {
            writeln!(f, "{}while {} do", indent, condition)?;
            write_block(f, body, depth + 1)?;
            writeln!(f, "{}end", indent)
        }
        Statement::PrintStmt { value } => writeln!(f, "{}print {}", indent, value),
        Statement::RepeatStmt { body, condition } => {
            writeln!(f, "{}repeat", indent)?;
            write_block(f, body, depth + 1)?;
            writeln!(f, "{}until {}", indent, condition)
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "function {}", self.name)?;
        write_block(f, &self.body, 1)?;
        write!(f, "end")
    }
}
