//! Deterministic, pure logic for laying out cheatsheets.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod ansi;
pub mod layout;
