//! # NavBar Component
//!
//! Mode tabs. The highlighted tab follows `ViewState::highlighted`, which the
//! controller sets through the port; the bar never decides the mode itself.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Tabs};

use crate::Mode;
use crate::tui::component::Component;

const TABS: [Mode; 2] = [Mode::TuringMachine, Mode::Nfa];

pub struct NavBar {
    pub highlighted: Mode,
}

impl NavBar {
    pub fn new(highlighted: Mode) -> Self {
        Self { highlighted }
    }

    fn selected_index(&self) -> usize {
        TABS.iter().position(|m| *m == self.highlighted).unwrap_or(0)
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = TABS
            .iter()
            .enumerate()
            .map(|(i, mode)| Line::from(format!("F{} {}", i + 1, mode.label())));

        let tabs = Tabs::new(titles)
            .block(Block::bordered().title("Automaton (Tab to switch)"))
            .select(self.selected_index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_selected_index_follows_mode() {
        assert_eq!(NavBar::new(Mode::TuringMachine).selected_index(), 0);
        assert_eq!(NavBar::new(Mode::Nfa).selected_index(), 1);
    }

    #[test]
    fn test_render_lists_both_modes() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut nav = NavBar::new(Mode::Nfa);

        terminal.draw(|f| nav.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("F1 Turing Machine"));
        assert!(text.contains("F2 NFA"));
    }
}
