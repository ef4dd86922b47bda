//! Unit tests for the board module.

mod snapshot_tests;
