//! FILENAME: app/cli/src/logging.rs
// PURPOSE: Unified logging for the command-line front end.
// FORMAT: seq|level|category|message
//
// Categories are passed as the `log` target so RUST_LOG can filter them,
// e.g. RUST_LOG=EVAL=debug.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use log::Level;

use crate::error::AppError;

/// Global sequence counter, one number per emitted line.
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

fn level_code(level: Level) -> &'static str {
    match level {
        Level::Error => "E",
        Level::Warn => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Trace => "T",
    }
}

/// Render one line in the unified format.
pub fn format_line(seq: u64, level: Level, category: &str, message: &str) -> String {
    format!("{}|{}|{}|{}", seq, level_code(level), category, message)
}

/// Install the env_logger backend. Logs go to stderr, or to `log_file`
/// when one is configured. The default filter is `warn`.
///
/// Calling this twice keeps the first backend.
pub fn init_logging(log_file: Option<&Path>) -> Result<(), AppError> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    builder.format(|buf, record| {
        let line = format_line(
            next_seq(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        writeln!(buf, "{}", line)
    });

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| AppError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    if builder.try_init().is_err() {
        eprintln!("[LOG_INIT] Logger already initialized, keeping the existing one");
    }

    Ok(())
}

/// Write a log line under `category`.
pub fn write_log(level: Level, category: &str, args: std::fmt::Arguments<'_>) {
    log::log!(target: category, level, "{}", args);
}

/// Write an ENTER log line for function entry
pub fn write_log_enter(category: &str, func_name: &str, params: &str) {
    if params.is_empty() {
        write_log(Level::Debug, category, format_args!("ENTER {}", func_name));
    } else {
        write_log(Level::Debug, category, format_args!("ENTER {} {}", func_name, params));
    }
}

/// Write an EXIT log line for function exit
pub fn write_log_exit(category: &str, func_name: &str, result: &str) {
    if result.is_empty() {
        write_log(Level::Debug, category, format_args!("EXIT {}", func_name));
    } else {
        write_log(Level::Debug, category, format_args!("EXIT {} {}", func_name, result));
    }
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log(::log::Level::Debug, $cat, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log(::log::Level::Info, $cat, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log(::log::Level::Warn, $cat, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log(::log::Level::Error, $cat, format_args!($($arg)*))
    };
}

// ENTER/EXIT macros for function tracing

#[macro_export]
macro_rules! log_enter {
    ($cat:expr, $func:expr) => {
        $crate::logging::write_log_enter($cat, $func, "")
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::logging::write_log_enter($cat, $func, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_exit {
    ($cat:expr, $func:expr) => {
        $crate::logging::write_log_exit($cat, $func, "")
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::logging::write_log_exit($cat, $func, &format!($($arg)*))
    };
}

// Re-export the macros so they can be imported via `use crate::logging::log_info;`
pub use log_debug;
pub use log_enter;
pub use log_error;
pub use log_exit;
pub use log_info;
pub use log_warn;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_unified_line() {
        assert_eq!(
            format_line(7, Level::Info, "EVAL", "2+2 -> 4.0"),
            "7|I|EVAL|2+2 -> 4.0"
        );
        assert_eq!(format_line(1, Level::Warn, "CMD", "x"), "1|W|CMD|x");
    }

    #[test]
    fn unopenable_log_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("calc.log");

        match init_logging(Some(&path)) {
            Err(AppError::LogFile { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected LogFile error, got {:?}", other),
        }
    }

    #[test]
    fn sequence_numbers_increase() {
        let first = next_seq();
        let second = next_seq();
        assert!(second > first);
    }
}
