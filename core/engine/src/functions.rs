//! FILENAME: core/engine/src/functions.rs
//! PURPOSE: Post-hoc unary functions applied to the displayed value.
//! CONTEXT: The scientific buttons (sin, cos, tan, log, sqrt) are not part of
//! the expression grammar. They read the display as one number, apply a
//! single function and write the formatted result back.
//!
//! Trigonometric functions take degrees. log10 and sqrt take the value as is
//! and follow IEEE-754 for out-of-domain input (NaN, -Infinity), they never
//! raise an error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smartcalc_parser::EvalError;
use thiserror::Error;

use crate::number_format::format_result;

/// The closed set of display functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
    Log10,
    Sqrt,
}

impl TrigFn {
    pub const ALL: [TrigFn; 5] = [
        TrigFn::Sin,
        TrigFn::Cos,
        TrigFn::Tan,
        TrigFn::Log10,
        TrigFn::Sqrt,
    ];

    /// The button label.
    pub fn label(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
            TrigFn::Log10 => "log",
            TrigFn::Sqrt => "sqrt",
        }
    }

    /// Whether the input is an angle in degrees.
    pub fn takes_degrees(self) -> bool {
        matches!(self, TrigFn::Sin | TrigFn::Cos | TrigFn::Tan)
    }

    pub fn apply(self, value: f64) -> f64 {
        let x = if self.takes_degrees() {
            value.to_radians()
        } else {
            value
        };
        match self {
            TrigFn::Sin => x.sin(),
            TrigFn::Cos => x.cos(),
            TrigFn::Tan => x.tan(),
            TrigFn::Log10 => x.log10(),
            TrigFn::Sqrt => x.sqrt(),
        }
    }
}

impl fmt::Display for TrigFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown function: {0}")]
pub struct UnknownFunction(pub String);

impl FromStr for TrigFn {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sin" => Ok(TrigFn::Sin),
            "cos" => Ok(TrigFn::Cos),
            "tan" => Ok(TrigFn::Tan),
            "log" | "log10" => Ok(TrigFn::Log10),
            "sqrt" | "√" => Ok(TrigFn::Sqrt),
            _ => Err(UnknownFunction(s.to_string())),
        }
    }
}

/// Reads the display as a single number. Operators, parentheses and
/// sub-expressions are not accepted here.
pub fn parse_display(display: &str) -> Result<f64, EvalError> {
    display
        .trim()
        .parse::<f64>()
        .map_err(|_| EvalError::MalformedNumber {
            position: 0,
            text: display.to_string(),
        })
}

/// Applies `func` to the displayed number and returns the new display text.
pub fn apply_unary(display: &str, func: TrigFn) -> Result<String, EvalError> {
    let value = parse_display(display)?;
    Ok(format_result(func.apply(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn applied(display: &str, func: TrigFn) -> f64 {
        apply_unary(display, func).unwrap().parse().unwrap()
    }

    #[test]
    fn sine_takes_degrees() {
        assert!((applied("90", TrigFn::Sin) - 1.0).abs() < TOLERANCE);
        assert!((applied("30", TrigFn::Sin) - 0.5).abs() < TOLERANCE);
        assert!(applied("0", TrigFn::Sin).abs() < TOLERANCE);
    }

    #[test]
    fn cosine_and_tangent_take_degrees() {
        assert!((applied("60", TrigFn::Cos) - 0.5).abs() < TOLERANCE);
        assert!(applied("90", TrigFn::Cos).abs() < TOLERANCE);
        assert!((applied("45", TrigFn::Tan) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn log_and_sqrt_take_plain_values() {
        assert!((applied("1000", TrigFn::Log10) - 3.0).abs() < TOLERANCE);
        assert_eq!(apply_unary("16", TrigFn::Sqrt).unwrap(), "4.0");
        assert_eq!(apply_unary("2.25", TrigFn::Sqrt).unwrap(), "1.5");
    }

    #[test]
    fn out_of_domain_input_is_not_an_error() {
        assert_eq!(apply_unary("-4", TrigFn::Sqrt).unwrap(), "NaN");
        assert_eq!(apply_unary("-10", TrigFn::Log10).unwrap(), "NaN");
        assert_eq!(apply_unary("0", TrigFn::Log10).unwrap(), "-Infinity");
    }

    #[test]
    fn display_accepts_surrounding_whitespace_and_formatter_output() {
        assert_eq!(apply_unary("  9  ", TrigFn::Sqrt).unwrap(), "3.0");
        assert!((applied("1.0E10", TrigFn::Log10) - 10.0).abs() < TOLERANCE);
        assert_eq!(apply_unary("NaN", TrigFn::Sqrt).unwrap(), "NaN");
        assert_eq!(apply_unary("Infinity", TrigFn::Sqrt).unwrap(), "Infinity");
    }

    #[test]
    fn expressions_are_not_numbers() {
        let err = apply_unary("2+2", TrigFn::Sqrt).unwrap_err();
        assert_eq!(
            err,
            EvalError::MalformedNumber {
                position: 0,
                text: "2+2".to_string()
            }
        );
    }

    #[test]
    fn empty_and_error_displays_are_malformed() {
        assert!(matches!(
            apply_unary("", TrigFn::Sin),
            Err(EvalError::MalformedNumber { .. })
        ));
        assert!(matches!(
            apply_unary("Error", TrigFn::Cos),
            Err(EvalError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for func in TrigFn::ALL {
            assert_eq!(func.label().parse::<TrigFn>().unwrap(), func);
            assert_eq!(func.to_string(), func.label());
        }
        assert_eq!("LOG10".parse::<TrigFn>().unwrap(), TrigFn::Log10);
        assert_eq!(
            "asin".parse::<TrigFn>().unwrap_err(),
            UnknownFunction("asin".to_string())
        );
    }

    #[test]
    fn only_trig_functions_take_degrees() {
        let degree_fns: Vec<_> = TrigFn::ALL.iter().filter(|f| f.takes_degrees()).collect();
        assert_eq!(degree_fns, vec![&TrigFn::Sin, &TrigFn::Cos, &TrigFn::Tan]);
    }

    #[test]
    fn apply_converts_only_angles() {
        assert!((TrigFn::Sin.apply(180.0)).abs() < TOLERANCE);
        assert_eq!(TrigFn::Sqrt.apply(90.0), 90.0_f64.sqrt());
        assert!((TrigFn::Log10.apply(1000.0) - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn serializes_as_lowercase_names() {
        assert_eq!(serde_json::to_string(&TrigFn::Log10).unwrap(), "\"log10\"");
        let func: TrigFn = serde_json::from_str("\"sqrt\"").unwrap();
        assert_eq!(func, TrigFn::Sqrt);
    }
}
