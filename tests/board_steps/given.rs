//! Given steps for board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use kanban_engine::board::{domain::Board, ports::SnapshotStore};
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.contents.clear();
    let seed = Board::seed(&world.layout);
    world
        .attach_observers(seed)
        .wrap_err("attach board observers")
}

#[given(r#"column "{column}" holds "{ids}""#)]
fn column_holds(world: &mut BoardWorld, column: String, ids: String) -> Result<(), eyre::Report> {
    world
        .set_column(&column, &ids)
        .wrap_err_with(|| format!("seed column {column}"))
}

#[given(r#"the stored snapshot is "{raw}""#)]
fn stored_snapshot_is(world: &mut BoardWorld, raw: String) -> Result<(), eyre::Report> {
    run_async(world.store.put(world.gateway.key(), raw.as_bytes()))
        .wrap_err("write raw snapshot")
}
