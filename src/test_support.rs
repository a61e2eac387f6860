//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::Mode;
use crate::api::{ApiError, AutomataBackend};
use crate::core::controller::{ResponseOrdering, ViewPort};
use crate::core::state::App;

/// A backend that answers every simulation with the same result and
/// remembers what it was asked.
pub struct StaticBackend {
    result: Result<String, ApiError>,
    calls: Mutex<Vec<(Mode, String)>>,
}

impl StaticBackend {
    pub fn ok(output: &str) -> Self {
        Self {
            result: Ok(output.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: ApiError) -> Self {
        Self {
            result: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Mode, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AutomataBackend for StaticBackend {
    fn name(&self) -> &str {
        "static"
    }

    async fn simulate(&self, mode: Mode, input: &str) -> Result<String, ApiError> {
        self.calls.lock().unwrap().push((mode, input.to_string()));
        self.result.clone()
    }

    async fn health(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

/// A port that records every write instead of displaying it.
#[derive(Debug, Default)]
pub struct RecordingPort {
    pub input: String,
    pub result_writes: Vec<String>,
    pub highlighted: Vec<Mode>,
    pub failures: Vec<String>,
}

impl RecordingPort {
    pub fn with_input(input: &str) -> Self {
        Self {
            input: input.to_string(),
            ..Default::default()
        }
    }

    /// What the result field currently shows.
    pub fn result(&self) -> &str {
        self.result_writes.last().map(String::as_str).unwrap_or("")
    }
}

impl ViewPort for RecordingPort {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_result(&mut self, text: &str) {
        self.result_writes.push(text.to_string());
    }

    fn highlight_mode(&mut self, mode: Mode) {
        self.highlighted.push(mode);
    }

    fn show_failure(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}

/// Creates a test App with a StaticBackend.
pub fn test_app() -> App {
    App::new(
        Arc::new(StaticBackend::ok("accepted")),
        Mode::TuringMachine,
        ResponseOrdering::default(),
    )
}
