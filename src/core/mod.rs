//! # Core Application Logic
//!
//! This module contains the view controller and the state it renders into.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewController       │
//!                    │  • ViewPort (UI seam)   │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  One-shot  │
//!           │  Adapter   │              │  (stdout)  │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`controller`]: `ViewController`, `ViewPort`, submissions and outcomes
//! - [`state`]: `App` and the headless `ViewState`
//! - [`action`]: `Action`, `Effect` and `update()`
//! - [`config`]: file/env/CLI configuration

pub mod action;
pub mod config;
pub mod controller;
pub mod state;
