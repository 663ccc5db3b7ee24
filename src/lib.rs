//! Kanban board state engine.
//!
//! This crate keeps a Kanban board of tasks arranged in a fixed set of
//! columns. It turns task lifecycle requests and completed drag gestures
//! into deterministic board transitions, persists every committed board as a
//! snapshot, and signals when a task reaches the terminal column.
//!
//! # Architecture
//!
//! The engine follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and notifications
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`board`]: Board model, drag resolution, persistence, and the session
//!   controller

pub mod board;
