//! Test doubles for core traits
//!
//! Compiled for this crate's tests and, with the `test-utils` feature, for
//! downstream crates.

mod mocks;

pub use mocks::MockChatProvider;
