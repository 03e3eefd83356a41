use std::fmt::{Display, Formatter, Result};

use crate::core::token::Token;

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    // let ident = expr
    Let {
        token: Token,
        name: Identifier,
        value: Expression,
    },
    // return expr
    Return {
        token: Token,
        return_value: Expression,
    },
    // expr;  token是表达式自身的token
    Expression {
        token: Token,
        expression: Expression,
    },
}

#[derive(Debug, PartialEq, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

/// 每个节点都带着开始它的token; 中缀表达式带的是操作符token
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    // 标识符
    Identifier(Identifier),
    // 整数字面量
    IntegerLiteral { token: Token, value: i64 },
    // 布尔值字面量
    BooleanLiteral { token: Token, value: bool },
    // 前缀表达式
    Prefix {
        token: Token,
        operator: PrefixOperator,
        right: Box<Expression>,
    },
    // 中缀表达式
    Infix {
        token: Token,
        left: Box<Expression>,
        operator: InfixOperator,
        right: Box<Expression>,
    },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrefixOperator {
    Not,
    Neg,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InfixOperator {
    Plus,
    Minus,
    Mul,
    Div,

    Gt,
    Lt,
    Eq,
    NotEq,
}

impl Statement {
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. } => token,
        }
    }
}

impl Expression {
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(ident) => &ident.token,
            Expression::IntegerLiteral { token, .. }
            | Expression::BooleanLiteral { token, .. }
            | Expression::Prefix { token, .. }
            | Expression::Infix { token, .. } => token,
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Statement::Let { name, value, .. } => write!(f, "let {} = {};", name, value),
            Statement::Return { return_value, .. } => write!(f, "return {};", return_value),
            Statement::Expression { expression, .. } => write!(f, "{}", expression),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expression::Identifier(id) => write!(f, "{}", id),
            Expression::IntegerLiteral { value, .. } => write!(f, "{}", value),
            Expression::BooleanLiteral { value, .. } => write!(f, "{}", value),
            Expression::Prefix {
                operator, right, ..
            } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PrefixOperator::Not => write!(f, "!"),
            PrefixOperator::Neg => write!(f, "-"),
        }
    }
}

impl Display for InfixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            InfixOperator::Plus => write!(f, "+"),
            InfixOperator::Minus => write!(f, "-"),
            InfixOperator::Mul => write!(f, "*"),
            InfixOperator::Div => write!(f, "/"),
            InfixOperator::Gt => write!(f, ">"),
            InfixOperator::Lt => write!(f, "<"),
            InfixOperator::Eq => write!(f, "=="),
            InfixOperator::NotEq => write!(f, "!="),
        }
    }
}
