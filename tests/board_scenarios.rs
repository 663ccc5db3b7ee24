//! Behaviour tests for the board session.

mod board_steps;

use board_steps::world::{BoardWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(path = "tests/features/board_scenarios.feature", name = "Create a task")]
#[tokio::test(flavor = "multi_thread")]
async fn create_a_task(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_scenarios.feature",
    name = "Reject a blank task name"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_a_blank_task_name(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_scenarios.feature",
    name = "Move a task to another column before an anchor"
)]
#[tokio::test(flavor = "multi_thread")]
async fn move_across_columns(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_scenarios.feature",
    name = "Complete a task exactly once"
)]
#[tokio::test(flavor = "multi_thread")]
async fn complete_a_task_once(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_scenarios.feature",
    name = "Reorder a task within its column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_within_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_scenarios.feature",
    name = "Drop a task onto itself"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drop_onto_itself(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_scenarios.feature",
    name = "Delete a task that does not exist"
)]
#[tokio::test(flavor = "multi_thread")]
async fn delete_unknown_task(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_scenarios.feature",
    name = "Change a task's status through an edit"
)]
#[tokio::test(flavor = "multi_thread")]
async fn status_edit_relocates_task(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_scenarios.feature",
    name = "Discard a corrupt snapshot"
)]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_snapshot_is_discarded(world: BoardWorld) {
    let _ = world;
}
