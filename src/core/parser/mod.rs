mod r#impl;
mod test;

use thiserror::Error;

use crate::core::{
    ast::{Expression, InfixOperator},
    token::{Token, TokenKind},
};

pub type ParseResult<T = Expression> = std::result::Result<T, ParserError>;
type PrefixParseFn = fn(&mut Parser) -> ParseResult<Expression>;
type InfixParseFn =
    fn(&mut Parser, Expression, Precedence, InfixOperator) -> ParseResult<Expression>;

/// 在固定的Token缓冲区上移动的游标, 出错时记录并继续
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    errors: Vec<ParserError>,
}

/// 优先级
#[derive(PartialOrd, PartialEq, Ord, Eq, Debug, Clone, Copy)]
enum Precedence {
    Lowest,
    /// == or !=
    Equals,
    /// \> or <
    LessGreater,
    /// `+` or `-`
    Sum,
    /// `*` or `/`
    Product,
    /// -x or !x
    Prefix,
}

/// 解析错误类
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error("Expected at least 2 tokens, got {0}")]
    TooFewTokens(usize),
    #[error("Token stream must end with eof, got {0}")]
    MissingEof(Token),
    #[error("Expected token :{expected}, got {actual}")]
    Expected { expected: TokenKind, actual: Token },
    #[error("No prefix function for token: {0}")]
    NoPrefixFn(Token),
    #[error("Could not parse {0} as integer")]
    ParseInt(String),
}
