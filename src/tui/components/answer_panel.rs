//! # AnswerPanel Component
//!
//! Shows the result field and, below it, the failure indicator when the last
//! applied submission failed. A failure never replaces the result text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct AnswerPanel<'a> {
    pub result: &'a str,
    pub failure: Option<&'a str>,
    pub waiting: bool,
}

impl Component for AnswerPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            self.result,
            Style::default().fg(Color::White),
        ))];

        if let Some(failure) = self.failure {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("! {failure}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        let title = if self.waiting { "Answer (waiting...)" } else { "Answer" };
        let border_style = if self.failure.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .title(title),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(panel: &mut AnswerPanel) -> String {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_shows_result() {
        let text = rendered(&mut AnswerPanel {
            result: "1100001 1100010",
            failure: None,
            waiting: false,
        });
        assert!(text.contains("1100001 1100010"));
        assert!(!text.contains('!'));
    }

    #[test]
    fn test_failure_shown_alongside_result() {
        let text = rendered(&mut AnswerPanel {
            result: "accepted",
            failure: Some("network error: connection refused"),
            waiting: false,
        });
        assert!(text.contains("accepted"));
        assert!(text.contains("! network error: connection refused"));
    }

    #[test]
    fn test_waiting_title() {
        let text = rendered(&mut AnswerPanel {
            result: "",
            failure: None,
            waiting: true,
        });
        assert!(text.contains("Answer (waiting...)"));
    }
}
