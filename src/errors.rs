use thiserror::Error;

use crate::value::Operator;

/// Failures of the evaluation pipeline.
///
/// Only the tree builder failures are reachable from user input: the lexer
/// accepts every string and the converter never rejects a token sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// An operator was met while fewer than two operands were pending
    #[error("Not enough operands for operator '{0}'")]
    InsufficientOperands(Operator),

    /// The postfix sequence did not collapse to exactly one tree
    #[error("Invalid expression: {0} values left after reduction")]
    MalformedExpression(usize),

    #[error("Failed to convert '{0}' to float")]
    StrToFloat(String),

    #[error("Failed to parse expression: {0}")]
    ParseFailed(String),
}
