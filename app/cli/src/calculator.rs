//! FILENAME: app/cli/src/calculator.rs
// PURPOSE: The display session: the text buffer the user types into and the
// scientific-mode flag.
// CONTEXT: The evaluator and the function applicator never touch this
// buffer. The session hands them its text and writes back either the
// formatted result or `Error`.

use smartcalc_engine::{apply_unary, format_result, TrigFn};
use smartcalc_parser::{evaluate_with, EvalOptions};

use crate::error::CalcError;
use crate::{log_debug, log_warn};

/// Text shown after any failed evaluation or function application.
pub const ERROR_DISPLAY: &str = "Error";

/// Characters accepted from the keyboard.
pub const KEYBOARD_KEYS: &str = "0123456789+-*/.^()";

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    scientific: bool,
    options: EvalOptions,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new(EvalOptions::default(), false)
    }
}

impl Calculator {
    pub fn new(options: EvalOptions, scientific: bool) -> Self {
        Calculator {
            display: String::new(),
            scientific,
            options,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Appends a typed character. Anything outside `KEYBOARD_KEYS` is
    /// ignored and reported as not accepted.
    pub fn type_key(&mut self, key: char) -> bool {
        if !KEYBOARD_KEYS.contains(key) {
            log_debug!("KEYS", "ignored key {:?}", key);
            return false;
        }
        self.display.push(key);
        true
    }

    /// Evaluates the display. On success the display holds the formatted
    /// result, on failure it holds `Error`.
    pub fn equals(&mut self) -> Result<f64, CalcError> {
        match evaluate_with(&self.display, &self.options) {
            Ok(value) => {
                log_debug!("EVAL", "{:?} -> {}", self.display, value);
                self.display = format_result(value);
                Ok(value)
            }
            Err(err) => {
                log_warn!("EVAL", "{:?} failed: {}", self.display, err);
                self.display = ERROR_DISPLAY.to_string();
                Err(err.into())
            }
        }
    }

    /// Applies a scientific function to the displayed number.
    pub fn apply(&mut self, func: TrigFn) -> Result<(), CalcError> {
        if !self.scientific {
            return Err(CalcError::ScientificModeOff(func));
        }

        match apply_unary(&self.display, func) {
            Ok(result) => {
                log_debug!("FUNC", "{}({:?}) -> {}", func, self.display, result);
                self.display = result;
                Ok(())
            }
            Err(err) => {
                log_warn!("FUNC", "{}({:?}) failed: {}", func, self.display, err);
                self.display = ERROR_DISPLAY.to_string();
                Err(err.into())
            }
        }
    }

    pub fn clear(&mut self) {
        self.display.clear();
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) {
        self.display.pop();
    }

    /// Flips scientific mode and returns the new state.
    pub fn toggle_scientific(&mut self) -> bool {
        self.scientific = !self.scientific;
        self.scientific
    }
}
