//! Shared world state for board BDD scenarios.

use std::sync::Arc;

use kanban_engine::board::{
    adapters::memory::{InMemorySnapshotStore, RecordingSubscriber},
    domain::{
        Board, BoardLayout, ColumnId, PersistedTaskData, Priority, RepeatFrequency, Task, TaskId,
        TaskName,
    },
    ports::SnapshotKey,
    services::{
        BoardSession, BoardSessionError, CompletionEmitter, PersistenceGateway, SnapshotWriter,
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub layout: BoardLayout,
    pub store: Arc<InMemorySnapshotStore>,
    pub gateway: Arc<PersistenceGateway<InMemorySnapshotStore>>,
    pub writer: Option<Arc<SnapshotWriter>>,
    pub recorder: Arc<RecordingSubscriber>,
    pub contents: Vec<(ColumnId, Vec<Task>)>,
    pub session: BoardSession,
    pub board_before: Option<Board>,
    pub last_changed: Option<bool>,
    pub last_error: Option<BoardSessionError>,
}

impl BoardWorld {
    /// Creates a world holding the seed board of the default layout.
    ///
    /// The session has no observers until a step attaches them, because the
    /// snapshot writer must start on the scenario's runtime.
    #[must_use]
    pub fn new() -> Self {
        let layout = BoardLayout::default();
        let store = Arc::new(InMemorySnapshotStore::new());
        let gateway = Arc::new(PersistenceGateway::new(
            Arc::clone(&store),
            SnapshotKey::default(),
        ));
        let recorder = Arc::new(RecordingSubscriber::new());
        let session = BoardSession::new(Board::seed(&layout));
        Self {
            layout,
            store,
            gateway,
            writer: None,
            recorder,
            contents: Vec::new(),
            session,
            board_before: None,
            last_changed: None,
            last_error: None,
        }
    }

    /// Replaces the session with one over `board` wired to the world's
    /// observers, starting the snapshot writer on first use.
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot writer cannot start.
    pub fn attach_observers(&mut self, board: Board) -> Result<(), eyre::Report> {
        let writer = match &self.writer {
            Some(writer) => Arc::clone(writer),
            None => {
                let started = Arc::new(SnapshotWriter::spawn(Arc::clone(&self.gateway))?);
                self.writer = Some(Arc::clone(&started));
                started
            }
        };
        let emitter = CompletionEmitter::for_layout(&self.layout, Arc::new(DefaultClock))
            .with_subscriber(self.recorder.clone());
        self.session = BoardSession::new(board)
            .with_observer(writer)
            .with_observer(Arc::new(emitter));
        Ok(())
    }

    /// Waits for queued snapshot writes to land in the store.
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot writer has stopped.
    pub fn flush_snapshots(&self) -> Result<(), eyre::Report> {
        if let Some(writer) = &self.writer {
            run_async(writer.flush())?;
        }
        Ok(())
    }

    /// Replaces the contents of one column and rebuilds the session.
    ///
    /// # Errors
    ///
    /// Returns an error when an identifier is blank or the board rejects
    /// the contents.
    pub fn set_column(&mut self, column: &str, ids: &str) -> Result<(), eyre::Report> {
        let column = ColumnId::new(column)?;
        let tasks = split_ids(ids)
            .into_iter()
            .map(|id| seeded_task(&id))
            .collect::<Result<Vec<_>, _>>()?;
        self.contents.retain(|(existing, _)| existing != &column);
        self.contents.push((column, tasks));
        let board = Board::with_tasks(&self.layout, self.contents.clone())?;
        self.attach_observers(board)
    }

    /// Records the board before an operation runs.
    pub fn remember_board(&mut self) {
        self.board_before = Some(self.session.board().clone());
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated list of task identifiers.
#[must_use]
pub fn split_ids(ids: &str) -> Vec<String> {
    ids.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

fn seeded_task(id: &str) -> Result<Task, eyre::Report> {
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id)?,
        name: TaskName::new(format!("Task {id}"))?,
        notes: String::new(),
        repeat_frequency: RepeatFrequency::default(),
        priority: Priority::default(),
    }))
}
