//! # StatusBar Component
//!
//! Bottom line: server, protocol and the current status message.
//!
//! 1. **Status message**: `"Automata View (http://127.0.0.1:8000, json-body) | Done"`
//! 2. **Default**: `"Automata View (http://127.0.0.1:8000, json-body)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::api::Protocol;
use crate::tui::component::Component;

pub struct StatusBar {
    pub server_url: String,
    pub protocol: Protocol,
    pub status_message: String,
}

impl StatusBar {
    pub fn new(server_url: String, protocol: Protocol, status_message: String) -> Self {
        Self {
            server_url,
            protocol,
            status_message,
        }
    }

    fn protocol_label(&self) -> &'static str {
        match self.protocol {
            Protocol::JsonBody => "json-body",
            Protocol::PathEmbedded => "path-embedded",
        }
    }

    pub fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Automata View ({}, {})", self.server_url, self.protocol_label())
        } else {
            format!(
                "Automata View ({}, {}) | {}",
                self.server_url,
                self.protocol_label(),
                self.status_message
            )
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
