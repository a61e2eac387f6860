//! # ModeHeader Component
//!
//! Two stacked panels describing the active automaton: a heading and a short
//! explanation of what the server does with the input. Only the panels of
//! the highlighted mode are shown.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::Mode;
use crate::tui::component::Component;

pub struct ModeHeader {
    pub mode: Mode,
}

impl ModeHeader {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// (heading, explanation) for a mode
    pub fn panels(mode: Mode) -> (&'static str, &'static str) {
        match mode {
            Mode::TuringMachine => (
                "Turing Machine",
                "Each character is fed to the machine as a unary number; \
                 the answer is its binary tape, or not_accepted.",
            ),
            Mode::Nfa => (
                "Nondeterministic Finite Automaton",
                "The string is run through the server's NFA; \
                 the answer reports whether it is accepted.",
            ),
        }
    }
}

impl Component for ModeHeader {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (heading, explanation) = Self::panels(self.mode);
        let [heading_area, explanation_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let heading = Paragraph::new(heading)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let explanation = Paragraph::new(explanation)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });

        frame.render_widget(heading, heading_area);
        frame.render_widget(explanation, explanation_area);
    }
}
