//! Completion subscriber that records every signal it receives.

use std::sync::{Mutex, PoisonError};

use crate::board::{domain::TaskCompleted, ports::CompletionSubscriber};

/// Collects completion signals for callers that poll instead of reacting.
#[derive(Debug, Default)]
pub struct RecordingSubscriber {
    events: Mutex<Vec<TaskCompleted>>,
}

impl RecordingSubscriber {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the signals received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<TaskCompleted> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns the signals received so far.
    #[must_use]
    pub fn drain(&self) -> Vec<TaskCompleted> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl CompletionSubscriber for RecordingSubscriber {
    fn on_task_completed(&self, event: &TaskCompleted) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
