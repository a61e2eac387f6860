//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `NavBar`: mode tabs
//! - `ModeHeader`: heading and explanation for the active mode
//! - `AnswerPanel`: result field and failure indicator
//! - `StatusBar`: server, protocol and status line
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `InputBox`: the text field submissions are read from
//!
//! Components receive external data as props, never by reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── nav_bar.rs
//! ├── mode_header.rs
//! ├── input_box.rs
//! ├── answer_panel.rs
//! └── status_bar.rs
//! ```

pub mod answer_panel;
pub mod input_box;
pub mod mode_header;
pub mod nav_bar;
pub mod status_bar;

pub use answer_panel::AnswerPanel;
pub use input_box::{InputBox, InputEvent};
pub use mode_header::ModeHeader;
pub use nav_bar::NavBar;
pub use status_bar::StatusBar;
