//! alian语言的前端和求值核心: Token流 -> 语法树 -> 值

use crate::core::ast::Program;
use crate::core::parser::{Parser, ParserError};
use crate::core::token::Token;
use crate::value::Value;

pub mod core;
mod error;
pub mod eval;
pub mod value;

pub use crate::error::Error;
pub use crate::eval::evaluator::{eval, EvalResult};

/// 解析Token序列, 程序总会返回, 错误需要调用方检查
///
/// 只有Token序列本身不合法(少于两个Token或者不以Eof结尾)时才返回Err
pub fn parse(tokens: Vec<Token>) -> Result<(Program, Vec<ParserError>), ParserError> {
    let mut parser = Parser::new(tokens)?;
    let program = parser.parse_program();
    Ok((program, parser.into_errors()))
}

/// 先词法分析再解析
pub fn parse_source(input: &str) -> Result<(Program, Vec<ParserError>), ParserError> {
    let mut parser = Parser::from_source(input)?;
    let program = parser.parse_program();
    Ok((program, parser.into_errors()))
}

/// 解析并求值, 有解析错误时不求值
pub fn eval_source(input: &str) -> Result<Option<Value>, Error> {
    let (program, errors) = parse_source(input)?;
    if !errors.is_empty() {
        return Err(Error::Parse(errors));
    }
    Ok(eval(&program)?)
}
