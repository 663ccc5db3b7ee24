//! Completion emitter: signals tasks that newly reach the terminal column.

use crate::board::{
    domain::{Board, BoardLayout, ColumnId, TaskCompleted, newly_completed},
    ports::{BoardObserver, BoardObserverError, BoardTransition, CompletionSubscriber},
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Publishes [`TaskCompleted`] to subscribers when a task enters the
/// terminal column from another column.
#[derive(Clone)]
pub struct CompletionEmitter<C>
where
    C: Clock + Send + Sync,
{
    terminal: ColumnId,
    clock: Arc<C>,
    subscribers: Vec<Arc<dyn CompletionSubscriber>>,
}

impl<C> CompletionEmitter<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an emitter watching `terminal`.
    #[must_use]
    pub const fn new(terminal: ColumnId, clock: Arc<C>) -> Self {
        Self {
            terminal,
            clock,
            subscribers: Vec::new(),
        }
    }

    /// Creates an emitter watching the terminal column of `layout`.
    #[must_use]
    pub fn for_layout(layout: &BoardLayout, clock: Arc<C>) -> Self {
        Self::new(layout.terminal_column().clone(), clock)
    }

    /// Registers a subscriber.
    #[must_use]
    pub fn with_subscriber(mut self, subscriber: Arc<dyn CompletionSubscriber>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Returns the watched terminal column.
    #[must_use]
    pub const fn terminal(&self) -> &ColumnId {
        &self.terminal
    }

    /// Compares two boards, notifies subscribers of each newly completed
    /// task, and returns the emitted signals.
    pub fn observe(&self, previous: &Board, next: &Board) -> Vec<TaskCompleted> {
        let events: Vec<TaskCompleted> = newly_completed(previous, next, &self.terminal)
            .into_iter()
            .map(|task_id| TaskCompleted::new(task_id, self.terminal.clone(), &*self.clock))
            .collect();
        for event in &events {
            debug!(task_id = %event.task_id(), column = %event.column(), "task completed");
            for subscriber in &self.subscribers {
                subscriber.on_task_completed(event);
            }
        }
        events
    }
}

#[async_trait]
impl<C> BoardObserver for CompletionEmitter<C>
where
    C: Clock + Send + Sync,
{
    async fn on_transition(&self, transition: &BoardTransition) -> Result<(), BoardObserverError> {
        self.observe(transition.previous(), transition.next());
        Ok(())
    }
}
