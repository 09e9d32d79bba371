//! Crate-internal tests: shared fixtures, mocks and property tests.

mod common;
mod mocks;
mod property;
