//! Deferred tasks.
//!
//! The engine never sleeps. Work that must happen later (flipping a
//! mismatched pair back) is queued here with a deadline and run when the
//! host next calls into the engine at or after that deadline.
//!
//! ## Behavior
//!
//! - `schedule()`: Queue a payload with an absolute deadline
//! - `pop_due()`: Remove the earliest task whose deadline has passed
//! - `cancel()` / `cancel_all()`: Drop tasks before they run

use serde::{Deserialize, Serialize};

/// Handle for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct ScheduledTask<T> {
    id: TaskId,
    due_at_ms: u64,
    payload: T,
}

/// Deadline-ordered queue of deferred payloads.
///
/// ```
/// use memory_pairs::engine::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// scheduler.schedule(1_500, "flip back");
///
/// assert_eq!(scheduler.pop_due(1_000), None);
/// assert_eq!(scheduler.pop_due(1_500), Some("flip back"));
/// assert!(scheduler.is_empty());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scheduler<T> {
    tasks: Vec<ScheduledTask<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `payload` to run at or after `due_at_ms`.
    pub fn schedule(&mut self, due_at_ms: u64, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask { id, due_at_ms, payload });
        id
    }

    /// Remove a task before it runs.
    pub fn cancel(&mut self, id: TaskId) -> Option<T> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index).payload)
    }

    /// Remove every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        dropped
    }

    /// Earliest deadline among pending tasks.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.tasks.iter().map(|t| t.due_at_ms).min()
    }

    /// Deadline of a specific task.
    #[must_use]
    pub fn due_at(&self, id: TaskId) -> Option<u64> {
        self.tasks.iter().find(|t| t.id == id).map(|t| t.due_at_ms)
    }

    /// Remove and return the earliest task due at `now_ms`.
    ///
    /// Ties run in scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<T> {
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_at_ms <= now_ms)
            .min_by_key(|(_, t)| (t.due_at_ms, t.id))
            .map(|(i, _)| i)?;
        Some(self.tasks.remove(index).payload)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
