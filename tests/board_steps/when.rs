//! When steps for board BDD scenarios.

use super::world::{BoardWorld, run_async};
use kanban_engine::board::{
    domain::{ColumnId, DragEnd, DropPosition, TaskId, TaskPatch},
    services::{BoardSession, SessionReport},
};
use rstest_bdd_macros::when;

fn apply_drag(world: &mut BoardWorld, request: &DragEnd) {
    world.remember_board();
    let report = run_async(world.session.move_task(request));
    world.last_changed = Some(report.is_changed());
}

#[when(r#"a task named "{name}" is created"#)]
fn create_task(world: &mut BoardWorld, name: String) {
    world.remember_board();
    let result = run_async(world.session.create_task(&name));
    world.last_changed = result.as_ref().ok().map(SessionReport::is_changed);
    world.last_error = result.err();
}

#[when(r#"task "{task}" is dragged from "{source}" to "{target}" before "{anchor}""#)]
fn drag_before(
    world: &mut BoardWorld,
    task: String,
    source: String,
    target: String,
    anchor: String,
) -> Result<(), eyre::Report> {
    let request = DragEnd::new(
        TaskId::new(task)?,
        ColumnId::new(source)?,
        ColumnId::new(target)?,
        DropPosition::Before(TaskId::new(anchor)?),
    );
    apply_drag(world, &request);
    Ok(())
}

#[when(r#"task "{task}" is dragged from "{source}" to "{target}" at the end"#)]
fn drag_to_end(
    world: &mut BoardWorld,
    task: String,
    source: String,
    target: String,
) -> Result<(), eyre::Report> {
    let request = DragEnd::new(
        TaskId::new(task)?,
        ColumnId::new(source)?,
        ColumnId::new(target)?,
        DropPosition::End,
    );
    apply_drag(world, &request);
    Ok(())
}

#[when(r#"task "{task}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(task)?;
    world.remember_board();
    let report = run_async(world.session.delete_task(&task_id));
    world.last_changed = Some(report.is_changed());
    Ok(())
}

#[when(r#"task "{task}" is edited to status "{status}""#)]
fn edit_status(world: &mut BoardWorld, task: String, status: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(task)?;
    let patch = TaskPatch::new().with_status(ColumnId::new(status)?);
    world.remember_board();
    let report = run_async(world.session.update_task(&task_id, &patch))?;
    world.last_changed = Some(report.is_changed());
    Ok(())
}

#[when("the board is opened from storage")]
fn open_from_storage(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let opened = run_async(BoardSession::open(&world.layout, &world.gateway));
    world.attach_observers(opened.board().clone())
}
