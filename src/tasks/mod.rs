//! Task list management
//!
//! The dashboard's largest component: CRUD over an ordered task list stored
//! as one JSON document, plus the statistics derived from it.
//! - Persisted state is reloaded at the start of every operation
//! - Mutations address tasks by id, so a stale view cannot hit a
//!   neighboring record
//! - Saves replace the whole document (last-writer-wins)

pub mod book;
pub mod stats;
pub mod types;

pub use book::{TaskBook, TASKS_KEY};
pub use stats::TaskStats;
pub use types::{Task, TaskId};
