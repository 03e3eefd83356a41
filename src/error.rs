use thiserror::Error;

use crate::core::parser::ParserError;
use crate::value::RuntimeError;

/// 从源码一路求值时可能遇到的错误
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("parser errors:{}", .0.iter().map(|err| format!("\n\t{}", err)).collect::<String>())]
    Parse(Vec<ParserError>),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<ParserError> for Error {
    fn from(err: ParserError) -> Self {
        Error::Parse(vec![err])
    }
}
