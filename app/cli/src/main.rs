//! FILENAME: app/cli/src/main.rs
// PURPOSE: Command-line entry point.

use std::process::ExitCode;

use smartcalc_lib::log_error;

fn main() -> ExitCode {
    match smartcalc_lib::run() {
        Ok(code) => code,
        Err(err) => {
            log_error!("SYS", "{}", err);
            eprintln!("smartcalc: {}", err);
            ExitCode::FAILURE
        }
    }
}
