//! I/O helpers for the `cman` command.

pub mod sheet_store;
pub mod terminal;
