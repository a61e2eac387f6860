//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! The loop owns `App`. Requests run as tokio tasks and report back through
//! an `mpsc` channel as `Action::Resolved`, so every state change still
//! happens on this thread. The loop polls with a short timeout while
//! requests are in flight and a long one when idle, redrawing only after an
//! event or an outcome.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::Mode;
use crate::api::{ApiError, AutomataBackend, build_backend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::controller::Submission;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new(mode: Mode) -> Self {
        Self {
            input_box: InputBox::new(mode),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Map a terminal event to a core action, if it is one.
fn core_action(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::SelectTuringMachine => Some(Action::SelectMode(Mode::TuringMachine)),
        TuiEvent::SelectNfa => Some(Action::SelectMode(Mode::Nfa)),
        TuiEvent::ToggleMode => Some(Action::ToggleMode),
        _ => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend = build_backend(&config).map_err(std::io::Error::other)?;
    let mut app = App::from_config(backend, &config);
    let mut tui = TuiState::new(app.mode());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    info!("Response ordering: {:?}", app.controller.ordering());
    spawn_health_check(app.controller.backend(), tx.clone());

    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Short timeout while waiting on the server so outcomes show promptly
        let timeout = if app.in_flight > 0 {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            let action = match core_action(&event) {
                Some(action) => Some(action),
                None => match tui.input_box.handle_event(&event) {
                    Some(InputEvent::Submit(text)) => Some(Action::Submit(text)),
                    Some(InputEvent::ContentChanged) | None => None,
                },
            };

            if let Some(action) = action {
                match update(&mut app, action) {
                    Effect::Quit => break 'main,
                    Effect::SpawnRequest(submission) => spawn_request(submission, tx.clone()),
                    Effect::None => {}
                }
            }
        }

        // Handle background task actions (outcomes, health check)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if let Effect::Quit = update(&mut app, action) {
                break 'main;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_health_check(backend: std::sync::Arc<dyn AutomataBackend>, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let result: Result<(), ApiError> = backend.health().await;
        match &result {
            Ok(()) => info!("Server health check passed"),
            Err(e) => warn!("Server health check failed: {}", e),
        }
        if tx.send(Action::ServerChecked(result)).is_err() {
            warn!("Failed to send health check result: receiver dropped");
        }
    });
}

fn spawn_request(submission: Submission, tx: mpsc::Sender<Action>) {
    info!("Spawning request #{} ({:?})", submission.id, submission.mode);
    tokio::spawn(async move {
        let outcome = submission.send().await;
        debug!("Request #{} resolved (ok={})", outcome.id, outcome.result.is_ok());
        if tx.send(Action::Resolved(outcome)).is_err() {
            warn!("Failed to send outcome: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_events_map_to_actions() {
        assert!(matches!(
            core_action(&TuiEvent::SelectNfa),
            Some(Action::SelectMode(Mode::Nfa))
        ));
        assert!(matches!(
            core_action(&TuiEvent::SelectTuringMachine),
            Some(Action::SelectMode(Mode::TuringMachine))
        ));
        assert!(matches!(core_action(&TuiEvent::ToggleMode), Some(Action::ToggleMode)));
        assert!(matches!(core_action(&TuiEvent::ForceQuit), Some(Action::Quit)));
    }

    #[test]
    fn test_editing_events_stay_in_tui() {
        assert!(core_action(&TuiEvent::InputChar('a')).is_none());
        assert!(core_action(&TuiEvent::Submit).is_none());
        assert!(core_action(&TuiEvent::Backspace).is_none());
    }

    #[tokio::test]
    async fn test_spawned_request_reports_outcome() {
        use crate::core::controller::{ResponseOrdering, ViewController};
        use crate::core::state::ViewState;
        use crate::test_support::StaticBackend;
        use std::sync::Arc;

        let mut ctl = ViewController::new(
            Arc::new(StaticBackend::ok("accepted")),
            Mode::TuringMachine,
            ResponseOrdering::default(),
        );
        let view = ViewState {
            input: "ab".to_string(),
            ..Default::default()
        };
        let (tx, rx) = mpsc::channel();

        spawn_request(ctl.begin_submit(&view), tx);

        let action = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
            .await
            .unwrap()
            .unwrap();
        match action {
            Action::Resolved(outcome) => assert_eq!(outcome.result, Ok("accepted".to_string())),
            other => panic!("Expected Resolved, got {other:?}"),
        }
    }
}
