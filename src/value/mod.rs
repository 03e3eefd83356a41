use std::fmt::{Display, Formatter, Result};

use thiserror::Error;

use crate::core::ast::{InfixOperator, PrefixOperator};

/// 运行时的值
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Value::Integer(int) => write!(f, "{}", int),
            Value::Boolean(bool) => write!(f, "{}", bool),
        }
    }
}

/// 求值错误, 遇到就立即终止
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum RuntimeError {
    #[error("unknown operator: {operator}{}", .right.type_name())]
    TypeMismatch {
        operator: PrefixOperator,
        right: Value,
    },
    #[error("type mismatch: {} {operator} {}", .left.type_name(), .right.type_name())]
    OperandMismatch {
        operator: InfixOperator,
        left: Value,
        right: Value,
    },
    #[error("unknown operator: {} {operator} {}", .left.type_name(), .right.type_name())]
    UnsupportedOperator {
        operator: InfixOperator,
        left: Value,
        right: Value,
    },
    #[error("division by zero: {0} / 0")]
    DivisionByZero(i64),
    #[error("integer overflow: {0}")]
    IntegerOverflow(String),
    #[error("identifier not found: {0}")]
    UnboundIdentifier(String),
    #[error("unsupported statement: {0}")]
    UnsupportedStatement(String),
}
