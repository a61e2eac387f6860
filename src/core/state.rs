//! # Application State
//!
//! Core business state. No TUI-specific types; the terminal adapter renders
//! from these fields and never mutates them directly.
//!
//! ```text
//! App
//! ├── controller: ViewController   // mode + backend + response ordering
//! ├── view: ViewState              // the fields the controller renders into
//! ├── status_message: String       // status bar text
//! ├── server_url: String           // shown in the status bar
//! ├── protocol: Protocol           // shown in the status bar
//! └── in_flight: usize             // submissions awaiting an outcome
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use std::sync::Arc;

use crate::Mode;
use crate::api::{AutomataBackend, Protocol};
use crate::core::config::ResolvedConfig;
use crate::core::controller::{ResponseOrdering, ViewController, ViewPort};

/// Headless view: plain values for the input, result and indicator fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub input: String,
    pub result: String,
    pub highlighted: Mode,
    pub failure: Option<String>,
}

impl ViewState {
    pub fn new(mode: Mode) -> Self {
        Self {
            highlighted: mode,
            ..Default::default()
        }
    }
}

impl ViewPort for ViewState {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_result(&mut self, text: &str) {
        self.result.clear();
        self.result.push_str(text);
        self.failure = None;
    }

    fn highlight_mode(&mut self, mode: Mode) {
        self.highlighted = mode;
    }

    fn show_failure(&mut self, message: &str) {
        self.failure = Some(message.to_string());
    }
}

pub struct App {
    pub controller: ViewController,
    pub view: ViewState,
    pub status_message: String,
    pub server_url: String,
    pub protocol: Protocol,
    pub in_flight: usize,
}

impl App {
    pub fn new(backend: Arc<dyn AutomataBackend>, mode: Mode, ordering: ResponseOrdering) -> Self {
        Self {
            controller: ViewController::new(backend, mode, ordering),
            view: ViewState::new(mode),
            status_message: String::from("Checking server..."),
            server_url: String::new(),
            protocol: Protocol::default(),
            in_flight: 0,
        }
    }

    pub fn from_config(backend: Arc<dyn AutomataBackend>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(backend, config.mode, config.ordering);
        app.server_url = config.base_url.clone();
        app.protocol = config.protocol;
        app
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }
}
