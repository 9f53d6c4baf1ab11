//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for SmartCalc front-end integration tests.

#![allow(dead_code)]

use smartcalc_lib::{commands, create_app_state, AppConfig, AppState, Command, Reply};

/// Test harness for creating and driving a calculator session.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a new test harness with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a harness that starts in scientific mode.
    pub fn scientific() -> Self {
        Self::with_config(AppConfig {
            scientific: true,
            ..AppConfig::default()
        })
    }

    pub fn with_config(config: AppConfig) -> Self {
        TestHarness {
            state: create_app_state(config),
        }
    }

    /// Feed one line as the REPL would and return the reply.
    pub fn send(&self, line: &str) -> Reply {
        commands::execute(&self.state, Command::parse(line)).unwrap()
    }

    /// Feed several lines, returning the display after the last one.
    pub fn send_all(&self, lines: &[&str]) -> String {
        for line in lines {
            self.send(line);
        }
        self.display()
    }

    pub fn display(&self) -> String {
        commands::get_display(&self.state).unwrap()
    }

    /// Run a whole scripted session and collect its output lines.
    pub fn run_script(&self, script: &str) -> Vec<String> {
        let mut output = Vec::new();
        smartcalc_lib::run_session(&self.state, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
