use std::sync::Mutex;

/// Work the controller defers. Every timer the form lifecycle needs is one
/// of these, carried with a handle so a later render can cancel it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledTask {
    HideStatus { form_id: String },
    RemoveRestoreNotice { form_id: String },
    DeleteDraft { key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Entry {
    handle: TaskHandle,
    due_ms: u64,
    task: ScheduledTask,
}

#[derive(Debug, Default)]
struct SchedulerState {
    now_ms: u64,
    next_handle: u64,
    entries: Vec<Entry>,
}

/// Single-threaded cooperative timer queue. The clock only moves when the
/// host calls `advance`, which makes timer behavior deterministic in tests.
#[derive(Debug, Default)]
pub struct SchedulerService {
    state: Mutex<SchedulerState>,
}

impl SchedulerService {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, SchedulerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn schedule(&self, task: ScheduledTask, delay_ms: u64) -> TaskHandle {
        let mut state = self.state();
        state.next_handle += 1;
        let handle = TaskHandle(state.next_handle);
        let due_ms = state.now_ms + delay_ms;
        state.entries.push(Entry {
            handle,
            due_ms,
            task,
        });
        handle
    }

    pub fn cancel(&self, handle: TaskHandle) -> bool {
        let mut state = self.state();
        let before = state.entries.len();
        state.entries.retain(|entry| entry.handle != handle);
        before != state.entries.len()
    }

    /// Moves the clock forward and returns the tasks that came due, in due
    /// order.
    pub fn advance(&self, delta_ms: u64) -> Vec<ScheduledTask> {
        let mut state = self.state();
        state.now_ms += delta_ms;
        let now = state.now_ms;

        let mut due: Vec<Entry> = Vec::new();
        let mut rest: Vec<Entry> = Vec::new();
        for entry in state.entries.drain(..) {
            if entry.due_ms <= now {
                due.push(entry);
            } else {
                rest.push(entry);
            }
        }
        state.entries = rest;

        due.sort_by_key(|entry| (entry.due_ms, entry.handle.0));
        due.into_iter().map(|entry| entry.task).collect()
    }

    pub fn pending(&self) -> usize {
        self.state().entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hide(form_id: &str) -> ScheduledTask {
        ScheduledTask::HideStatus {
            form_id: form_id.to_string(),
        }
    }

    #[test]
    fn advance_returns_due_tasks_in_order() {
        let scheduler_service = SchedulerService::new();
        scheduler_service.schedule(hide("b"), 5000);
        scheduler_service.schedule(hide("a"), 1000);
        scheduler_service.schedule(hide("c"), 10000);

        let due = scheduler_service.advance(5000);
        assert_eq!(vec![hide("a"), hide("b")], due);
        assert_eq!(1, scheduler_service.pending());

        let due = scheduler_service.advance(5000);
        assert_eq!(vec![hide("c")], due);
        assert_eq!(0, scheduler_service.pending());
    }

    #[test]
    fn canceled_tasks_never_run() {
        let scheduler_service = SchedulerService::new();
        let handle = scheduler_service.schedule(hide("a"), 1000);
        scheduler_service.schedule(hide("b"), 1000);

        assert_eq!(true, scheduler_service.cancel(handle));
        assert_eq!(false, scheduler_service.cancel(handle));

        let due = scheduler_service.advance(1000);
        assert_eq!(vec![hide("b")], due);
    }

    #[test]
    fn delays_accumulate_across_advances() {
        let scheduler_service = SchedulerService::new();
        scheduler_service.advance(1000);
        scheduler_service.schedule(hide("a"), 1000);
        assert_eq!(0, scheduler_service.advance(999).len());
        assert_eq!(1, scheduler_service.advance(1).len());
    }
}
