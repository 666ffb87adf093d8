//! Local persistence for dashboard state
//!
//! This module provides the dashboard's local storage:
//! - One text document per key, one file per key in the data directory
//! - Whole-document reads and writes (last-writer-wins, no merging)
//! - Keys restricted to safe file-name characters

pub mod error;
pub mod local;

pub use error::{StoreError, StoreResult};
pub use local::LocalStore;
