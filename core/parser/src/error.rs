//! FILENAME: core/parser/src/error.rs

use thiserror::Error;

/// The uniform error value returned by the evaluator and the function
/// applicator. Every variant carries the 0-based character offset of the
/// offending character, or the input length when input ran out.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { position: usize, found: char },

    #[error("Unexpected end of input at position {position}")]
    UnexpectedEndOfInput { position: usize },

    #[error("Unexpected trailing character '{found}' at position {position}")]
    TrailingInput { position: usize, found: char },

    #[error("Malformed number '{text}' at position {position}")]
    MalformedNumber { position: usize, text: String },

    #[error("Expression nested deeper than {limit} levels at position {position}")]
    NestingTooDeep { position: usize, limit: usize },
}

impl EvalError {
    pub fn position(&self) -> usize {
        match self {
            EvalError::UnexpectedCharacter { position, .. }
            | EvalError::UnexpectedEndOfInput { position }
            | EvalError::TrailingInput { position, .. }
            | EvalError::MalformedNumber { position, .. }
            | EvalError::NestingTooDeep { position, .. } => *position,
        }
    }

    /// Human-readable message, as shown in diagnostics.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
