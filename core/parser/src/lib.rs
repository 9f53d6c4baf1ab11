//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the SmartCalc expression evaluator.
//! CONTEXT: Converts the text typed into the calculator display into a
//! double-precision result in a single recursive descent pass.
//!
//! PIPELINE: Expression String --> Cursor --> Parser (evaluates as it parses) --> f64
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /
//! - Right-associative power: 2^3^2 = 512
//! - Unary signs: -5, +5, --5
//! - Parentheses for grouping
//! - Decimal literals: 3, 3.5, 3., .5

pub mod cursor;
pub mod error;
pub mod parser;


// Re-export commonly used types for convenience
pub use cursor::Cursor;
pub use error::EvalError;
pub use parser::{
    evaluate, evaluate_with, EvalOptions, EvalResult, Parser, DEFAULT_MAX_DEPTH,
    MAX_CONFIGURABLE_DEPTH,
};
