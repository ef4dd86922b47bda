//! Unit tests for the auth module.

mod service_tests;
