//! # View Controller
//!
//! Owns the selected [`Mode`] and turns submissions into backend calls. It
//! never touches a terminal; everything visible goes through a [`ViewPort`].
//!
//! A submit is split in three so the UI loop never waits on the network:
//!
//! ```text
//! begin_submit()      captures (id, mode, input)      on the UI loop
//!   └─ Submission::send().await  →  Outcome          on a tokio task
//! apply(outcome)      renders success or failure      back on the UI loop
//! ```
//!
//! Ids increase with every submission. Under [`ResponseOrdering::LatestRequest`]
//! an outcome older than one already applied is dropped, so a slow early
//! request can't overwrite a newer answer. [`ResponseOrdering::Arrival`]
//! applies everything in the order it resolves.

use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::Mode;
use crate::api::{ApiError, AutomataBackend};

/// Where the controller reads input from and renders into.
pub trait ViewPort {
    /// Current contents of the input field.
    fn input_text(&self) -> String;
    /// Replace the contents of the result field.
    fn set_result(&mut self, text: &str);
    /// Mark `mode` as the active one.
    fn highlight_mode(&mut self, mode: Mode);
    /// Show that the last submission failed. The result field is left alone.
    fn show_failure(&mut self, message: &str);
}

/// How overlapping responses are reconciled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Drop outcomes older than the newest one already applied.
    #[default]
    LatestRequest,
    /// Apply outcomes as they resolve; the last to arrive wins.
    Arrival,
}

/// What `apply` did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Rendered,
    Failed,
    Stale,
}

/// A captured submission, ready to be sent from any task.
pub struct Submission {
    pub id: u64,
    pub mode: Mode,
    pub input: String,
    backend: Arc<dyn AutomataBackend>,
}

impl Submission {
    pub async fn send(self) -> Outcome {
        let result = self.backend.simulate(self.mode, &self.input).await;
        Outcome {
            id: self.id,
            mode: self.mode,
            input: self.input,
            result,
        }
    }
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submission")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("input", &self.input)
            .field("backend", &self.backend.name())
            .finish()
    }
}

/// A resolved submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub id: u64,
    pub mode: Mode,
    pub input: String,
    pub result: Result<String, ApiError>,
}

pub struct ViewController {
    backend: Arc<dyn AutomataBackend>,
    mode: Mode,
    ordering: ResponseOrdering,
    issued: u64,
    newest_applied: u64,
}

impl ViewController {
    pub fn new(backend: Arc<dyn AutomataBackend>, mode: Mode, ordering: ResponseOrdering) -> Self {
        Self {
            backend,
            mode,
            ordering,
            issued: 0,
            newest_applied: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    pub fn backend(&self) -> Arc<dyn AutomataBackend> {
        self.backend.clone()
    }

    /// Switch modes. No network traffic.
    pub fn select_mode<P: ViewPort + ?Sized>(&mut self, mode: Mode, port: &mut P) {
        if self.mode != mode {
            info!("Mode changed: {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        port.highlight_mode(mode);
    }

    /// Capture the current mode and input as a new submission.
    pub fn begin_submit<P: ViewPort + ?Sized>(&mut self, port: &P) -> Submission {
        self.issued += 1;
        let submission = Submission {
            id: self.issued,
            mode: self.mode,
            input: port.input_text(),
            backend: self.backend.clone(),
        };
        debug!("Submission #{} captured ({:?})", submission.id, submission.mode);
        submission
    }

    /// Render a resolved submission through the port.
    ///
    /// Success clears the result field and then writes the output. Failure
    /// leaves the result field as it was and raises the failure indicator.
    pub fn apply<P: ViewPort + ?Sized>(&mut self, outcome: Outcome, port: &mut P) -> Applied {
        if self.ordering == ResponseOrdering::LatestRequest && outcome.id < self.newest_applied {
            debug!(
                "Dropping stale outcome #{} (newest applied #{})",
                outcome.id, self.newest_applied
            );
            return Applied::Stale;
        }
        self.newest_applied = self.newest_applied.max(outcome.id);

        match outcome.result {
            Ok(output) => {
                port.set_result("");
                port.set_result(&output);
                Applied::Rendered
            }
            Err(e) => {
                warn!("Submission #{} failed: {}", outcome.id, e);
                port.show_failure(&e.to_string());
                Applied::Failed
            }
        }
    }

    /// Capture, send and apply in one go. Used where nothing else needs the
    /// loop while waiting (one-shot mode, tests).
    pub async fn submit<P: ViewPort + ?Sized>(&mut self, port: &mut P) -> Applied {
        let submission = self.begin_submit(port);
        let outcome = submission.send().await;
        self.apply(outcome, port)
    }
}
