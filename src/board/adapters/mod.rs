//! Adapter implementations for board ports.

pub mod fs;
pub mod memory;
