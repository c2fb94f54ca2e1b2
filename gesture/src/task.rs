//! Cancellable per-frame tasks.
//!
//! A [`TaskSlot`] owns at most one running task. Starting a task replaces the
//! previous one and hands out a fresh [`TaskHandle`]; a frame callback holding
//! an old handle finds nothing to run. This lets a new gesture stop a stale
//! fling deterministically, even if the host still has a frame queued for it.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

/// Identifies one started task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
pub struct TaskSlot<T> {
    next_id: u64,
    active: Option<(TaskHandle, T)>,
}

impl<T> Default for TaskSlot<T> {
    fn default() -> Self {
        Self { next_id: 0, active: None }
    }
}

impl<T> TaskSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `task`, dropping whatever was running.
    pub fn start(&mut self, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.active = Some((handle, task));
        handle
    }

    /// Stop the running task, returning it.
    pub fn cancel(&mut self) -> Option<T> {
        self.active.take().map(|(_, task)| task)
    }

    /// Stop the task only if `handle` still names it.
    pub fn finish(&mut self, handle: TaskHandle) -> Option<T> {
        if self.is_live(handle) { self.cancel() } else { None }
    }

    fn is_live(&self, handle: TaskHandle) -> bool {
        self.active.as_ref().is_some_and(|(h, _)| *h == handle)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn handle(&self) -> Option<TaskHandle> {
        self.active.as_ref().map(|(h, _)| *h)
    }

    /// The running task, if `handle` is still current.
    pub fn get_mut(&mut self, handle: TaskHandle) -> Option<&mut T> {
        match &mut self.active {
            Some((h, task)) if *h == handle => Some(task),
            _ => None,
        }
    }
}
