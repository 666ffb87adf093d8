//! # Daydash
//!
//! Personal dashboard for the terminal - weather, quotes, a to-do list,
//! and a live clock, all in one screen.
//!
//! ## Features
//!
//! - **Weather panel**: one JSON feed (URL or file), normalized once into
//!   a strict schema with a three-day forecast
//! - **Quote rotation**: uniformly random picks that never repeat
//!   back to back
//! - **Task list**: locally persisted CRUD with live statistics
//! - **Theme toggle**: light/dark preference remembered between sessions
//! - **Live clock**: a ticking date/time line
//!
//! ## Modules
//!
//! - [`store`]: flat-file key/value persistence
//! - [`feed`]: JSON feed retrieval
//! - [`weather`], [`quotes`], [`tasks`], [`theme`], [`clock`]: the
//!   dashboard components
//! - [`ui`]: the ratatui surface tying them together
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use daydash::{ui, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default();
//!     ui::run(config).await
//! }
//! ```

pub mod clock;
pub mod config;
pub mod feed;
pub mod quotes;
pub mod store;
pub mod tasks;
pub mod theme;
pub mod ui;
pub mod weather;

// Re-export top-level types for convenience
pub use config::{Config, ConfigError};

pub use store::{LocalStore, StoreError, StoreResult};

pub use feed::{FeedClient, FeedError, FeedResult, FeedSource};

pub use weather::{ForecastDay, WeatherSnapshot};

pub use quotes::{Quote, QuoteBoard};

pub use tasks::{Task, TaskBook, TaskId, TaskStats};

pub use theme::Theme;
