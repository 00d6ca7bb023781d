use std::time::{Duration, SystemTime};

/// Cancellable one-shot timer holding the latest scheduled value.
///
/// Scheduling replaces (cancels) whatever was pending, so only the value that
/// stays unchanged for a full `delay` is ever released by [`Debouncer::poll`].
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, SystemTime)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn schedule(&mut self, value: T, now: SystemTime) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will settle, if any.
    pub fn deadline(&self) -> Option<SystemTime> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Releases the pending value once its deadline has passed.
    pub fn poll(&mut self, now: SystemTime) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}
