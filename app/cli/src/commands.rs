//! FILENAME: app/cli/src/commands.rs
// PURPOSE: Command handlers the line-oriented front end dispatches to.
// CONTEXT: Each handler takes the shared AppState, performs one user action
// on the display session and returns the new display text.

use std::str::FromStr;
use std::sync::MutexGuard;

use smartcalc_engine::{evaluate_to_display, TrigFn};
use smartcalc_parser::EvalError;

use crate::calculator::Calculator;
use crate::error::{AppError, CalcError};
use crate::{log_enter, log_exit, log_info, log_warn, AppState};

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Characters typed into the display; '=' evaluates.
    Keys(String),
    Equals,
    Clear,
    Backspace,
    ToggleScientific,
    Apply(TrigFn),
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "show" => Command::Show,
            "=" => Command::Equals,
            "c" | "clear" => Command::Clear,
            "back" | "bs" => Command::Backspace,
            "sci" => Command::ToggleScientific,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => match TrigFn::from_str(trimmed) {
                Ok(func) => Command::Apply(func),
                Err(_) => Command::Keys(trimmed.to_string()),
            },
        }
    }
}

pub const HELP_TEXT: &str = "\
Type an expression (digits, + - * / ^ ( ) .) and end it with '=' to evaluate.
Commands:
  =                  evaluate the display
  C | clear          clear the display
  back               delete the last character
  sci                toggle scientific mode
  sin cos tan log sqrt   apply a function to the displayed number (scientific mode)
  show               print the display
  quit | exit        leave";

fn lock_calculator(state: &AppState) -> Result<MutexGuard<'_, Calculator>, AppError> {
    state.calculator.lock().map_err(|_| AppError::StatePoisoned)
}

/// Get the current display text.
pub fn get_display(state: &AppState) -> Result<String, AppError> {
    Ok(lock_calculator(state)?.display().to_string())
}

/// Type a run of keys. An '=' key evaluates what has been typed so far.
pub fn press_keys(state: &AppState, keys: &str) -> Result<String, AppError> {
    log_enter!("CMD", "press_keys", "keys={:?}", keys);
    let mut calc = lock_calculator(state)?;

    for key in keys.chars() {
        if key == '=' {
            // Failures already show as Error on the display
            let _ = calc.equals();
        } else {
            calc.type_key(key);
        }
    }

    let display = calc.display().to_string();
    log_exit!("CMD", "press_keys", "display={:?}", display);
    Ok(display)
}

/// Evaluate the display.
pub fn equals(state: &AppState) -> Result<String, AppError> {
    let mut calc = lock_calculator(state)?;
    let _ = calc.equals();
    Ok(calc.display().to_string())
}

pub fn clear(state: &AppState) -> Result<String, AppError> {
    let mut calc = lock_calculator(state)?;
    calc.clear();
    Ok(String::new())
}

pub fn backspace(state: &AppState) -> Result<String, AppError> {
    let mut calc = lock_calculator(state)?;
    calc.backspace();
    Ok(calc.display().to_string())
}

/// Toggle scientific mode, returning the new mode.
pub fn toggle_scientific(state: &AppState) -> Result<bool, AppError> {
    let mut calc = lock_calculator(state)?;
    let enabled = calc.toggle_scientific();
    log_info!("CMD", "scientific mode {}", if enabled { "on" } else { "off" });
    Ok(enabled)
}

/// Apply a scientific function to the display. Returns the error that a
/// front end may want to mention; the display already reflects it.
pub fn apply_function(
    state: &AppState,
    func: TrigFn,
) -> Result<(String, Option<CalcError>), AppError> {
    let mut calc = lock_calculator(state)?;
    let outcome = calc.apply(func).err();
    if let Some(CalcError::ScientificModeOff(_)) = &outcome {
        log_warn!("CMD", "{} rejected outside scientific mode", func);
    }
    Ok((calc.display().to_string(), outcome))
}

/// Evaluate a full expression without touching the display session.
pub fn evaluate_expression(state: &AppState, expr: &str) -> Result<String, EvalError> {
    log_enter!("CMD", "evaluate_expression", "expr={:?}", expr);
    let result = evaluate_to_display(expr, &state.config.eval_options());
    match &result {
        Ok(text) => log_exit!("CMD", "evaluate_expression", "{}", text),
        Err(err) => log_warn!("EVAL", "{:?} failed: {}", expr, err),
    }
    result
}

/// What the front end should print after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Display(String),
    Notice(String),
    Quit,
}

/// Dispatch one parsed command.
pub fn execute(state: &AppState, command: Command) -> Result<Reply, AppError> {
    let reply = match command {
        Command::Keys(keys) => Reply::Display(press_keys(state, &keys)?),
        Command::Equals => Reply::Display(equals(state)?),
        Command::Clear => Reply::Display(clear(state)?),
        Command::Backspace => Reply::Display(backspace(state)?),
        Command::ToggleScientific => {
            let enabled = toggle_scientific(state)?;
            Reply::Notice(format!(
                "scientific mode {}",
                if enabled { "on" } else { "off" }
            ))
        }
        Command::Apply(func) => match apply_function(state, func)? {
            (_, Some(err @ CalcError::ScientificModeOff(_))) => Reply::Notice(err.to_string()),
            (display, _) => Reply::Display(display),
        },
        Command::Show => Reply::Display(get_display(state)?),
        Command::Help => Reply::Notice(HELP_TEXT.to_string()),
        Command::Quit => Reply::Quit,
    };
    Ok(reply)
}
