//! Then steps for board BDD scenarios.

use super::world::{BoardWorld, run_async, split_ids};
use kanban_engine::board::{
    domain::{Board, BoardDomainError, ColumnId},
    ports::SnapshotStore,
    services::BoardSessionError,
};
use rstest_bdd_macros::then;

fn listed_ids(world: &BoardWorld, column: &str) -> Result<Vec<String>, eyre::Report> {
    let column_id = ColumnId::new(column)?;
    let found = world
        .session
        .board()
        .column(&column_id)
        .ok_or_else(|| eyre::eyre!("column {column} is not on the board"))?;
    Ok(found
        .tasks()
        .iter()
        .map(|task| task.id().as_str().to_owned())
        .collect())
}

#[then(r#"column "{column}" lists "{ids}""#)]
fn column_lists(world: &BoardWorld, column: String, ids: String) -> Result<(), eyre::Report> {
    let actual = listed_ids(world, &column)?;
    let expected = split_ids(&ids);
    eyre::ensure!(
        actual == expected,
        "column {column}: expected {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"column "{column}" lists no tasks"#)]
fn column_lists_nothing(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let actual = listed_ids(world, &column)?;
    eyre::ensure!(actual.is_empty(), "column {column} holds {actual:?}");
    Ok(())
}

#[then(r#"column "{column}" contains a task named "{name}""#)]
fn column_contains_named(
    world: &BoardWorld,
    column: String,
    name: String,
) -> Result<(), eyre::Report> {
    let column_id = ColumnId::new(column.as_str())?;
    let found = world
        .session
        .board()
        .column(&column_id)
        .ok_or_else(|| eyre::eyre!("column {column} is not on the board"))?;
    eyre::ensure!(
        found.tasks().iter().any(|task| task.name().as_str() == name),
        "column {column} has no task named {name}"
    );
    Ok(())
}

#[then("the stored snapshot matches the board")]
fn snapshot_matches(world: &BoardWorld) -> Result<(), eyre::Report> {
    world.flush_snapshots()?;
    let stored = run_async(world.gateway.load(&world.layout))?
        .ok_or_else(|| eyre::eyre!("no snapshot was stored"))?;
    eyre::ensure!(
        &stored == world.session.board(),
        "stored snapshot differs from the live board"
    );
    Ok(())
}

#[then("no snapshot is stored")]
fn no_snapshot(world: &BoardWorld) -> Result<(), eyre::Report> {
    world.flush_snapshots()?;
    let stored = run_async(world.store.get(world.gateway.key()))?;
    eyre::ensure!(stored.is_none(), "a snapshot is still stored");
    Ok(())
}

#[then("the operation is rejected because the name is empty")]
fn rejected_empty_name(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        matches!(
            world.last_error,
            Some(BoardSessionError::Domain(BoardDomainError::EmptyTaskName))
        ),
        "expected an empty name error, got {:?}",
        world.last_error
    );
    Ok(())
}

#[then("the board is unchanged")]
fn board_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_changed == Some(false),
        "the last operation reported a change"
    );
    eyre::ensure!(
        world.board_before.as_ref() == Some(world.session.board()),
        "the board differs from its state before the operation"
    );
    Ok(())
}

#[then("no task completion was signalled")]
fn no_completion(world: &BoardWorld) -> Result<(), eyre::Report> {
    let events = world.recorder.events();
    eyre::ensure!(events.is_empty(), "unexpected completions: {events:?}");
    Ok(())
}

#[then(r#"task "{task}" was signalled complete exactly once"#)]
fn completed_once(world: &BoardWorld, task: String) -> Result<(), eyre::Report> {
    let count = world
        .recorder
        .events()
        .iter()
        .filter(|event| event.task_id().as_str() == task)
        .count();
    eyre::ensure!(count == 1, "task {task} completed {count} times");
    Ok(())
}

#[then("the board matches the seed layout")]
fn board_is_seed(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.session.board() == &Board::seed(&world.layout),
        "board is not the seed board"
    );
    Ok(())
}
