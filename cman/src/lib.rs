//! Terminal cheatsheet viewer.
//!
//! A cheatsheet is a JSON document of headings, each listing a handful of
//! commands. `cman <name>` loads `<name>.json`, lays the headings out in a
//! uniform grid sized to the terminal and prints it. The architecture keeps
//! the same split as most of our tools:
//!
//! - **[`core`]**: Pure layout logic. No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (sheet files, terminal queries).
//!
//! [`show`] coordinates the two to implement the CLI command.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod sheet;
pub mod show;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
