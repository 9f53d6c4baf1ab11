//! FILENAME: app/cli/src/lib.rs
// PURPOSE: Library root for the SmartCalc command-line front end.
// CONTEXT: Owns the application state, argument handling and the
// read-eval-print loop. The arithmetic itself lives in the core crates.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use std::thread;

pub mod calculator;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use calculator::{Calculator, ERROR_DISPLAY, KEYBOARD_KEYS};
pub use commands::{Command, Reply};
pub use config::AppConfig;
pub use error::{AppError, CalcError};

/// Shared state handed to every command handler.
pub struct AppState {
    pub calculator: Mutex<Calculator>,
    pub config: AppConfig,
}

pub fn create_app_state(config: AppConfig) -> AppState {
    log_info!(
        "SYS",
        "Creating AppState max_depth={} scientific={}",
        config.max_depth,
        config.scientific
    );
    AppState {
        calculator: Mutex::new(Calculator::new(config.eval_options(), config.scientific)),
        config,
    }
}

// ============================================================================
// COMMAND LINE
// ============================================================================

pub const USAGE: &str = "\
Usage: smartcalc [--config <file.json>] [--max-depth <n>] [-e <expression>]

Without -e, reads commands from standard input (type 'help').";

/// Parsed command-line arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub eval: Option<String>,
    pub help: bool,
}

impl CliArgs {
    pub fn parse<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-c" | "--config" => {
                    parsed.config = Some(PathBuf::from(required_value(&mut args, &arg)?));
                }
                "--max-depth" => {
                    let value = required_value(&mut args, &arg)?;
                    let depth = value.parse::<usize>().map_err(|_| {
                        AppError::Usage(format!("--max-depth expects a number, got '{}'", value))
                    })?;
                    parsed.max_depth = Some(depth);
                }
                "-e" | "--eval" => parsed.eval = Some(required_value(&mut args, &arg)?),
                other => {
                    return Err(AppError::Usage(format!(
                        "unknown argument '{}'\n{}",
                        other, USAGE
                    )))
                }
            }
        }

        Ok(parsed)
    }

    /// Resolve the effective configuration: file first, then flags.
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }
        config.validate()?;
        Ok(config)
    }
}

fn required_value<I>(args: &mut I, flag: &str) -> Result<String, AppError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| AppError::Usage(format!("{} expects a value\n{}", flag, USAGE)))
}

// ============================================================================
// SESSION LOOP
// ============================================================================

/// Reads commands line by line until end of input or `quit`, printing the
/// display after each one.
pub fn run_session<R, W>(state: &AppState, input: R, mut output: W) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        match commands::execute(state, Command::parse(&line))? {
            Reply::Display(display) => writeln!(output, "{}", display)?,
            Reply::Notice(text) => writeln!(output, "{}", text)?,
            Reply::Quit => break,
        }
        output.flush()?;
    }

    log_info!("SYS", "Session finished");
    Ok(())
}

/// Evaluates one expression without touching the display. Prints the result,
/// or `Error` with the diagnostic on `errors`.
pub fn run_one_shot<W, E>(
    state: &AppState,
    expr: &str,
    mut output: W,
    mut errors: E,
) -> Result<ExitCode, AppError>
where
    W: Write,
    E: Write,
{
    match commands::evaluate_expression(state, expr) {
        Ok(text) => {
            writeln!(output, "{}", text)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(output, "{}", ERROR_DISPLAY)?;
            writeln!(errors, "{}", err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Entry point used by the binary.
pub fn run() -> Result<ExitCode, AppError> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    }

    let config = args.load_config()?;
    logging::init_logging(config.log_file.as_deref())?;
    log_info!("SYS", "SmartCalc starting");

    let stack_size = config.eval_options().required_stack_size();
    let state = create_app_state(config);

    // Evaluation recurses once per nesting level, so it runs on a thread
    // whose stack covers the configured limit.
    let worker = thread::Builder::new()
        .name("calculator".to_string())
        .stack_size(stack_size)
        .spawn(move || match &args.eval {
            Some(expr) => run_one_shot(&state, expr, io::stdout().lock(), io::stderr().lock()),
            None => {
                run_session(&state, io::stdin().lock(), io::stdout().lock())?;
                Ok(ExitCode::SUCCESS)
            }
        })?;

    worker.join().map_err(|_| AppError::SessionPanicked)?
}
