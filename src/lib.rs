//! TaskFlow: a kanban task board with a local snapshot store.
//!
//! This crate provides authentication against a mock user directory, board
//! and task management across four fixed status columns, and persistence of
//! the whole board collection as JSON snapshots in a key/value store.
//!
//! # Architecture
//!
//! TaskFlow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and state mutation with no infrastructure
//! - **Ports**: Abstract trait interfaces for persistence and notification
//! - **Adapters**: In-memory and snapshot-store-backed implementations
//!
//! # Modules
//!
//! - [`auth`]: Users, sessions, login and signup
//! - [`board`]: Boards, columns, tasks, and the board service
//! - [`storage`]: Key/value snapshot storage
//! - [`notify`]: User-facing notifications
//! - [`render`]: Plain-text views for the command line
//! - [`config`] and [`logging`]: Runtime settings and log output

pub mod auth;
pub mod board;
pub mod config;
pub mod logging;
pub mod notify;
pub mod render;
pub mod storage;
