//! Kanban board state engine.
//!
//! Tasks live in a fixed, ordered set of columns. The module turns task
//! lifecycle requests and resolved drag gestures into deterministic board
//! transitions, persists the board as a snapshot, and signals when a task
//! reaches the terminal column. It follows hexagonal architecture:
//!
//! - Domain types, the drag resolver, and snapshot validation in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The session controller and transition observers in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
