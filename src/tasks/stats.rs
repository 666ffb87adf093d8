//! Derived task statistics

use super::types::Task;

/// Counts derived from the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Completion percentage, rounded half-up
    pub percent: u8,
}

impl TaskStats {
    /// Recompute the counts from the current list
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let pending = total - completed;
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };
        Self {
            total,
            completed,
            pending,
            percent,
        }
    }

    /// Stats row text, or `None` when there are no tasks (the row is
    /// blanked rather than zero-filled)
    pub fn summary(&self) -> Option<String> {
        if self.total == 0 {
            return None;
        }
        Some(format!(
            "Total: {}  Completed: {}  Pending: {}  Progress: {}%",
            self.total, self.completed, self.pending, self.percent
        ))
    }
}
