//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Turns a computed double into the text shown on the display.
//! CONTEXT: Both `=` results and function results go through the same
//! formatter, and `apply_unary` must be able to read its own output back.
//!
//! Convention:
//! - magnitudes in [1e-3, 1e7) and zero print as plain decimals with at
//!   least one fractional digit: 14.0, 0.5, -0.0
//! - everything else finite prints in scientific form: 1.0E10, 1.5E-5
//! - non-finite values print as NaN, Infinity, -Infinity

const DECIMAL_MIN: f64 = 1e-3;
const DECIMAL_MAX: f64 = 1e7;

/// Format a result for the calculator display.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs_value = value.abs();
    if abs_value == 0.0 || (DECIMAL_MIN..DECIMAL_MAX).contains(&abs_value) {
        format_decimal(value)
    } else {
        format_scientific(value)
    }
}

/// Shortest round-trip digits, forced to carry a fractional part.
fn format_decimal(value: f64) -> String {
    let formatted = format!("{}", value);
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}

/// Rust's `{:e}` gives "1.5e-5"; the display wants "1.5E-5" and "1.0E10".
fn format_scientific(value: f64) -> String {
    let formatted = format!("{:e}", value);
    let (mantissa, exponent) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));

    if mantissa.contains('.') {
        format!("{}E{}", mantissa, exponent)
    } else {
        format!("{}.0E{}", mantissa, exponent)
    }
}
