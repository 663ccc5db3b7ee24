//! Unit tests for the board engine.

mod persistence_tests;
