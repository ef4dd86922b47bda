//! Step definitions for authentication scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
