use std::time::Duration;

use smallvec::SmallVec;

/// Stable identity of a mounted element: ensemble slot plus mount generation.
///
/// A task owned by an older generation of the same slot is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementKey {
    /// Ensemble index.
    pub index: usize,
    /// Mount generation.
    pub generation: u32,
}

/// Handle to one scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// A one-shot timer: start stage `stage` of `owner` at `fire_at` (mount-relative).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    /// Task handle.
    pub id: TaskId,
    /// Element the task writes into.
    pub owner: ElementKey,
    /// Scheduled firing time on the session clock.
    pub fire_at: Duration,
    /// Stage index inside the owner's staged sequence.
    pub stage: usize,
}

/// Every task an element has outstanding, released together on teardown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CancelHandle {
    tasks: SmallVec<[TaskId; 4]>,
}

impl CancelHandle {
    /// Track another task.
    pub fn push(&mut self, id: TaskId) {
        self.tasks.push(id);
    }

    /// Forget a task that already fired.
    pub fn release(&mut self, id: TaskId) {
        self.tasks.retain(|t| *t != id);
    }

    /// Number of tracked tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// `true` when nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Cooperative single-threaded timer queue.
///
/// Pending tasks are kept sorted by `(fire_at, id)`, so tasks due at the same instant fire in
/// scheduling order.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<ScheduledTask>,
}

impl Scheduler {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a stage start and return its handle.
    pub fn schedule(&mut self, owner: ElementKey, fire_at: Duration, stage: usize) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let task = ScheduledTask {
            id,
            owner,
            fire_at,
            stage,
        };
        let at = self
            .pending
            .partition_point(|t| (t.fire_at, t.id) <= (fire_at, id));
        self.pending.insert(at, task);
        id
    }

    /// Drop one pending task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.pending.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.pending.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Cancel everything a handle tracks and empty it. Returns how many tasks were still pending.
    pub fn cancel_all(&mut self, handle: &mut CancelHandle) -> usize {
        let cancelled = handle.tasks.iter().filter(|id| self.cancel(**id)).count();
        handle.tasks.clear();
        cancelled
    }

    /// Remove and return every task due at or before `now`, in firing order.
    pub fn drain_due(&mut self, now: Duration) -> Vec<ScheduledTask> {
        let due = self.pending.partition_point(|t| t.fire_at <= now);
        self.pending.drain(..due).collect()
    }

    /// Firing time of the earliest pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.first().map(|t| t.fire_at)
    }

    /// Pending tasks in firing order.
    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.pending
    }

    /// Number of pending tasks.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Pending tasks owned by `owner`.
    pub fn pending_for(&self, owner: ElementKey) -> usize {
        self.pending.iter().filter(|t| t.owner == owner).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/scheduler.rs"]
mod tests;
