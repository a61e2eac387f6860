//! Automata View library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which automaton the server should run a submission through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    TuringMachine,
    Nfa,
}

impl Mode {
    /// Human-readable label for tabs and headers
    pub fn label(self) -> &'static str {
        match self {
            Mode::TuringMachine => "Turing Machine",
            Mode::Nfa => "NFA",
        }
    }

    /// Path segment the server exposes for this automaton.
    pub fn endpoint(self) -> &'static str {
        match self {
            Mode::TuringMachine => "TuringMachine",
            Mode::Nfa => "NFA",
        }
    }

    /// The mode a toggle switches to.
    pub fn other(self) -> Mode {
        match self {
            Mode::TuringMachine => Mode::Nfa,
            Mode::Nfa => Mode::TuringMachine,
        }
    }
}
