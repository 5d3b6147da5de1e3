//! Explicit process lifecycle state.
//!
//! One `Lifecycle` value is constructed in `main` and owns the state; the
//! health endpoint only reads it.

use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LifecycleState {
    Stopped = 0,
    Starting = 1,
    Running = 2,
    Stopping = 3,
}

#[derive(Debug, Default)]
pub struct Lifecycle {
    state: AtomicU8,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self { state: AtomicU8::new(LifecycleState::Stopped as u8) }
    }

    pub fn set(&self, state: LifecycleState) {
        self.state.store(state as u8, Ordering::SeqCst);
    }

    #[must_use]
    pub fn current(&self) -> LifecycleState {
        match self.state.load(Ordering::SeqCst) {
            1 => LifecycleState::Starting,
            2 => LifecycleState::Running,
            3 => LifecycleState::Stopping,
            _ => LifecycleState::Stopped,
        }
    }

    /// Whether the dispatch engine is accepting and processing updates.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.current() == LifecycleState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.current(), LifecycleState::Stopped);
        assert!(!lifecycle.is_running());
    }

    #[test]
    fn only_running_counts_as_running() {
        let lifecycle = Lifecycle::new();

        lifecycle.set(LifecycleState::Starting);
        assert!(!lifecycle.is_running());

        lifecycle.set(LifecycleState::Running);
        assert!(lifecycle.is_running());

        lifecycle.set(LifecycleState::Stopping);
        assert!(!lifecycle.is_running());

        lifecycle.set(LifecycleState::Stopped);
        assert!(!lifecycle.is_running());
    }
}
