use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AnswerPanel, ModeHeader, NavBar, StatusBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Length(3), Length(3), Min(3), Length(1)]);
    let [nav_area, header_area, input_area, answer_area, status_area] = layout.areas(frame.area());

    let highlighted = app.view.highlighted;

    NavBar::new(highlighted).render(frame, nav_area);
    ModeHeader::new(highlighted).render(frame, header_area);

    tui.input_box.mode = highlighted;
    tui.input_box.render(frame, input_area);

    AnswerPanel {
        result: &app.view.result,
        failure: app.view.failure.as_deref(),
        waiting: app.in_flight > 0,
    }
    .render(frame, answer_area);

    StatusBar::new(
        app.server_url.clone(),
        app.protocol,
        app.status_message.clone(),
    )
    .render(frame, status_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui() {
        let app = test_app();
        let mut tui = TuiState::new(app.mode());
        let text = screen(&app, &mut tui);
        assert!(text.contains("F1 Turing Machine"));
        assert!(text.contains("Input (Turing Machine)"));
        assert!(text.contains("Answer"));
        assert!(text.contains("Automata View"));
    }

    #[test]
    fn test_draw_ui_follows_mode_switch() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.mode());
        update(&mut app, Action::SelectMode(Mode::Nfa));

        let text = screen(&app, &mut tui);

        assert!(text.contains("Nondeterministic Finite Automaton"));
        assert!(text.contains("Input (NFA)"));
    }

    #[test]
    fn test_draw_ui_shows_result_and_failure() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.mode());
        app.view.result = "1100001".to_string();
        app.view.failure = Some("network error: refused".to_string());

        let text = screen(&app, &mut tui);

        assert!(text.contains("1100001"));
        assert!(text.contains("! network error: refused"));
    }
}
