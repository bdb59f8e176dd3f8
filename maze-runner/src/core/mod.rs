//! Deterministic, pure maze logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod grid;
pub mod parse;
pub mod path;
pub mod policy;
pub mod render;
pub mod runner;
pub mod types;
