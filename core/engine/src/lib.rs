//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator engine.
//! CONTEXT: Re-exports the display functions and the result formatter used
//! by front ends on top of the expression parser.

pub mod functions;
pub mod number_format;

// Re-export commonly used types at the crate root
pub use functions::{apply_unary, parse_display, TrigFn, UnknownFunction};
pub use number_format::format_result;
pub use smartcalc_parser::{evaluate, evaluate_with, EvalError, EvalOptions};

/// Evaluates `input` and formats the result for the display.
pub fn evaluate_to_display(input: &str, options: &EvalOptions) -> Result<String, EvalError> {
    evaluate_with(input, options).map(format_result)
}
