//! Terminal dashboard
//!
//! The interactive surface: one ratatui event loop owns all mutable state,
//! with panel content built by pure functions:
//! - `app` — state machine, key handling, and the run loop
//! - `panels` — component state to display lines, testable without a
//!   terminal
//! - `palette` — per-theme colors

pub mod app;
pub mod palette;
pub mod panels;

pub use app::{run, App, AppEvent, Mode};
pub use palette::Palette;

/// Loading lifecycle of a feed-driven panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    Loading,
    Ready(T),
    Failed,
}
