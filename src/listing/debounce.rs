use std::time::Duration;

/// Handle to a scheduled task that has not necessarily run yet
pub trait CancelHandle {
    /// Prevent the task from running. Cancelling a task that already ran is a no-op.
    fn cancel(self);
}

/// Runs a callback after a delay on the UI event loop
pub trait Scheduler {
    type Handle: CancelHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> Self::Handle;
}

/// Trailing-edge debounce: each call cancels the previous pending task and
/// schedules a new one, so only the last call in a burst runs.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}
