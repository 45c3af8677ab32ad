//! Stable exit codes for the `cman` CLI.

/// The cheatsheet was rendered.
pub const OK: i32 = 0;
/// Any failure without a more specific code (e.g. an unreadable sheet file).
pub const INVALID: i32 = 1;
/// Wrong arguments. Matches the code clap uses for its own usage errors.
pub const USAGE: i32 = 2;
/// No cheatsheet exists for the requested name.
pub const NOT_FOUND: i32 = 3;
/// The cheatsheet exists but is not a valid document.
pub const DECODE: i32 = 4;
/// The terminal width could not be determined.
pub const TERMINAL: i32 = 5;
