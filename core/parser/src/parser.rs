//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Single-pass recursive descent parser that evaluates an arithmetic
//! expression while it reads it.
//! CONTEXT: There is no AST. Each grammar production is one method on
//! `Parser` that returns the numeric value of the text it consumed, so the
//! whole evaluation is one left-to-right pass over a `Cursor`.
//!
//! GRAMMAR:
//!   expression --> term ( ("+" | "-") term )*
//!   term       --> factor ( ("*" | "/") factor )*
//!   factor     --> ("+" | "-") factor | primary ( "^" factor )?
//!   primary    --> "(" expression ")" | NUMBER
//!   NUMBER     --> digit+ ( "." digit* )? | "." digit+
//!
//! `factor` resolves the exponent before an enclosing unary sign is applied,
//! so `-2^2` is `-(2^2)` and `2^3^2` is `2^(3^2)`.
//!
//! Arithmetic is plain IEEE-754 double precision: `1/0` is infinity and
//! `0/0` is NaN, neither is an error.

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::error::EvalError;

/// Default cap on nested parentheses, unary signs and exponents.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Largest cap a front end may configure.
pub const MAX_CONFIGURABLE_DEPTH: usize = 10_000;

/// Stack reserved per nesting level, generous enough for debug builds.
const STACK_BYTES_PER_LEVEL: usize = 16 * 1024;

/// Stack for everything around the recursion.
const BASE_STACK_BYTES: usize = 1024 * 1024;

pub type EvalResult<T> = Result<T, EvalError>;

/// Tunables for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalOptions {
    /// Maximum recursion depth before the parse fails with
    /// `EvalError::NestingTooDeep`.
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EvalOptions {
    /// Thread stack size that lets an evaluation reach `max_depth` and fail
    /// with `NestingTooDeep` instead of overflowing.
    pub fn required_stack_size(&self) -> usize {
        BASE_STACK_BYTES + self.max_depth.saturating_mul(STACK_BYTES_PER_LEVEL)
    }
}

/// The Parser owns the cursor and the current nesting depth for exactly
/// one evaluation.
pub struct Parser {
    cursor: Cursor,
    options: EvalOptions,
    depth: usize,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self::with_options(input, EvalOptions::default())
    }

    pub fn with_options(input: &str, options: EvalOptions) -> Self {
        Parser {
            cursor: Cursor::new(input),
            options,
            depth: 0,
        }
    }

    /// Parses and evaluates the entire input.
    /// Trailing characters after a complete expression are an error.
    pub fn evaluate(&mut self) -> EvalResult<f64> {
        let value = self.parse_expression()?;

        self.cursor.skip_whitespace();
        if let Some(found) = self.cursor.peek() {
            return Err(EvalError::TrailingInput {
                position: self.cursor.position(),
                found,
            });
        }

        Ok(value)
    }

    /// Parses additive expressions (+ and -).
    fn parse_expression(&mut self) -> EvalResult<f64> {
        let mut value = self.parse_term()?;

        loop {
            if self.cursor.eat('+') {
                value += self.parse_term()?;
            } else if self.cursor.eat('-') {
                value -= self.parse_term()?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Parses multiplicative expressions (* and /).
    fn parse_term(&mut self) -> EvalResult<f64> {
        let mut value = self.parse_factor()?;

        loop {
            if self.cursor.eat('*') {
                value *= self.parse_factor()?;
            } else if self.cursor.eat('/') {
                value /= self.parse_factor()?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Parses unary signs and exponentiation.
    fn parse_factor(&mut self) -> EvalResult<f64> {
        if self.cursor.eat('+') {
            return self.nested(Self::parse_factor);
        }
        if self.cursor.eat('-') {
            return self.nested(Self::parse_factor).map(|value| -value);
        }

        let base = self.parse_primary()?;

        if self.cursor.eat('^') {
            let exponent = self.nested(Self::parse_factor)?;
            return Ok(base.powf(exponent));
        }

        Ok(base)
    }

    /// Parses a parenthesised expression or a number literal.
    fn parse_primary(&mut self) -> EvalResult<f64> {
        self.cursor.skip_whitespace();
        let position = self.cursor.position();

        match self.cursor.peek() {
            Some('(') => {
                self.cursor.bump();
                let value = self.nested(Self::parse_expression)?;
                self.expect(')')?;
                Ok(value)
            }
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.parse_number(),
            Some(found) => Err(EvalError::UnexpectedCharacter { position, found }),
            None => Err(EvalError::UnexpectedEndOfInput { position }),
        }
    }

    fn parse_number(&mut self) -> EvalResult<f64> {
        let position = self.cursor.position();
        let text = self.cursor.take_number_text();

        // "3." and ".5" are fine, a lone "." is not
        text.parse::<f64>()
            .map_err(|_| EvalError::MalformedNumber { position, text })
    }

    /// Consumes `expected` or reports what was found instead.
    fn expect(&mut self, expected: char) -> EvalResult<()> {
        if self.cursor.eat(expected) {
            return Ok(());
        }

        let position = self.cursor.position();
        match self.cursor.peek() {
            Some(found) => Err(EvalError::UnexpectedCharacter { position, found }),
            None => Err(EvalError::UnexpectedEndOfInput { position }),
        }
    }

    /// Runs `parse` one nesting level deeper, failing once the configured
    /// depth is reached.
    fn nested(&mut self, parse: fn(&mut Self) -> EvalResult<f64>) -> EvalResult<f64> {
        if self.depth >= self.options.max_depth {
            return Err(EvalError::NestingTooDeep {
                position: self.cursor.position(),
                limit: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

/// Evaluates an arithmetic expression with the default options.
pub fn evaluate(input: &str) -> EvalResult<f64> {
    Parser::new(input).evaluate()
}

/// Evaluates an arithmetic expression with explicit options.
pub fn evaluate_with(input: &str, options: &EvalOptions) -> EvalResult<f64> {
    Parser::with_options(input, *options).evaluate()
}
