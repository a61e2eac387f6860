//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! Server responds? That's `Action::Resolved(outcome)`.
//!
//! `update()` applies an action to the state and returns an `Effect` the
//! adapter has to carry out. No I/O here; requests are spawned by the caller.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::Mode;
use crate::api::ApiError;
use crate::core::controller::{Applied, Outcome, Submission};
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    SelectMode(Mode),
    ToggleMode,
    Submit(String),
    Resolved(Outcome),
    ServerChecked(Result<(), ApiError>),
    Quit,
}

/// Work the adapter must do after an update.
#[derive(Debug)]
pub enum Effect {
    None,
    SpawnRequest(Submission),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SelectMode(mode) => {
            app.controller.select_mode(mode, &mut app.view);
            Effect::None
        }
        Action::ToggleMode => {
            let mode = app.controller.mode().other();
            app.controller.select_mode(mode, &mut app.view);
            Effect::None
        }
        Action::Submit(text) => {
            app.view.input = text;
            let submission = app.controller.begin_submit(&app.view);
            app.in_flight += 1;
            app.status_message = pending_status(app.in_flight);
            info!(
                "Submitting #{} to {} ({} in flight)",
                submission.id,
                submission.mode.label(),
                app.in_flight
            );
            Effect::SpawnRequest(submission)
        }
        Action::Resolved(outcome) => {
            app.in_flight = app.in_flight.saturating_sub(1);
            let id = outcome.id;
            let applied = app.controller.apply(outcome, &mut app.view);
            debug!("Outcome #{} applied: {:?}", id, applied);
            app.status_message = match (applied, app.in_flight) {
                (_, n) if n > 0 => pending_status(n),
                (Applied::Failed, _) => String::from("Request failed"),
                _ => String::from("Done"),
            };
            Effect::None
        }
        Action::ServerChecked(result) => {
            app.status_message = match result {
                Ok(()) => String::from("Server reachable"),
                Err(e) => format!("Server unreachable: {e}"),
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn pending_status(in_flight: usize) -> String {
    if in_flight == 1 {
        String::from("Waiting for server...")
    } else {
        format!("Waiting for {in_flight} responses...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn resolve(app: &mut App, submission: Submission, result: Result<&str, ApiError>) {
        let outcome = Outcome {
            id: submission.id,
            mode: submission.mode,
            input: submission.input,
            result: result.map(str::to_string),
        };
        update(app, Action::Resolved(outcome));
    }

    fn spawned(effect: Effect) -> Submission {
        match effect {
            Effect::SpawnRequest(submission) => submission,
            other => panic!("Expected SpawnRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_select_mode() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SelectMode(Mode::Nfa));
        assert!(matches!(effect, Effect::None));
        assert_eq!(app.mode(), Mode::Nfa);
        assert_eq!(app.view.highlighted, Mode::Nfa);
    }

    #[test]
    fn test_toggle_mode() {
        let mut app = test_app();
        update(&mut app, Action::ToggleMode);
        assert_eq!(app.mode(), Mode::Nfa);
        update(&mut app, Action::ToggleMode);
        assert_eq!(app.mode(), Mode::TuringMachine);
    }

    #[test]
    fn test_submit_spawns_one_request() {
        let mut app = test_app();
        update(&mut app, Action::SelectMode(Mode::Nfa));

        let submission = spawned(update(&mut app, Action::Submit("ababab".into())));

        assert_eq!(submission.mode, Mode::Nfa);
        assert_eq!(submission.input, "ababab");
        assert_eq!(app.in_flight, 1);
        assert_eq!(app.status_message, "Waiting for server...");
    }

    #[test]
    fn test_resolved_renders_result() {
        let mut app = test_app();
        let submission = spawned(update(&mut app, Action::Submit("ab".into())));

        resolve(&mut app, submission, Ok("accepted"));

        assert_eq!(app.view.result, "accepted");
        assert_eq!(app.in_flight, 0);
        assert_eq!(app.status_message, "Done");
    }

    #[test]
    fn test_resolved_failure_sets_indicator() {
        let mut app = test_app();
        app.view.result = "kept".to_string();
        let submission = spawned(update(&mut app, Action::Submit("ab".into())));

        resolve(&mut app, submission, Err(ApiError::Network("connection refused".into())));

        assert_eq!(app.view.result, "kept");
        assert!(app.view.failure.as_deref().unwrap().contains("connection refused"));
        assert_eq!(app.status_message, "Request failed");
    }

    #[test]
    fn test_overlapping_submissions_show_newest() {
        let mut app = test_app();
        let first = spawned(update(&mut app, Action::Submit("slow".into())));
        let second = spawned(update(&mut app, Action::Submit("fast".into())));
        assert_eq!(app.status_message, "Waiting for 2 responses...");

        resolve(&mut app, second, Ok("fast-result"));
        assert_eq!(app.status_message, "Waiting for server...");
        resolve(&mut app, first, Ok("slow-result"));

        assert_eq!(app.view.result, "fast-result");
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn test_server_checked_status() {
        let mut app = test_app();
        update(&mut app, Action::ServerChecked(Ok(())));
        assert_eq!(app.status_message, "Server reachable");

        update(&mut app, Action::ServerChecked(Err(ApiError::Network("refused".into()))));
        assert!(app.status_message.starts_with("Server unreachable"));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert!(matches!(update(&mut app, Action::Quit), Effect::Quit));
    }
}
