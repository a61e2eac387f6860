//! # InputBox Component
//!
//! Single-line field holding the string to run through the automaton.
//!
//! The buffer survives a submit, so pressing Enter again re-sends the same
//! input. Empty input is submitted as-is; the server decides what it means.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::Mode;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content or cursor changed
    ContentChanged,
}

/// Text input component.
///
/// # Props
///
/// - `mode`: Active mode, shown in the title
///
/// # State
///
/// - `buffer`: Current text
/// - `cursor`: Byte offset of the cursor in `buffer`
pub struct InputBox {
    pub buffer: String,
    pub mode: Mode,
    cursor: usize,
    scroll: u16,
}

impl InputBox {
    pub fn new(mode: Mode) -> Self {
        Self {
            buffer: String::new(),
            mode,
            cursor: 0,
            scroll: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    /// Display column of the cursor, in terminal cells.
    fn cursor_col(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// Keep the cursor column inside the visible width.
    fn update_scroll(&mut self, inner_width: u16) {
        let col = self.cursor_col();
        let width = usize::from(inner_width);
        let scroll = usize::from(self.scroll);
        let scroll = if width == 0 {
            0
        } else if col < scroll {
            col
        } else if col >= scroll.saturating_add(width) {
            col + 1 - width
        } else {
            scroll
        };
        // Paragraph scroll offsets are u16; anything further right stays pinned at the limit
        self.scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        self.update_scroll(inner_width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!("Input ({})", self.mode.label()));

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, self.scroll))
            .style(Style::default().fg(Color::Green));

        frame.render_widget(input, area);

        let col = self
            .cursor_col()
            .saturating_sub(usize::from(self.scroll))
            .min(usize::from(inner_width));
        let col = u16::try_from(col).unwrap_or(inner_width);
        frame.set_cursor_position((area.x.saturating_add(1).saturating_add(col), area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: line breaks would end up in the request
                let flat: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                self.insert_str(&flat);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = self.prev_boundary();
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = self.next_boundary();
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::ClearInput => (!self.buffer.is_empty()).then(|| {
                self.buffer.clear();
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
