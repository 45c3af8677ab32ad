//! ANSI SGR sequences used to highlight heading titles.

/// Swap foreground and background colours (`CSI 7 m`).
pub const INVERSE: &str = "\x1b[7m";

/// Restore the terminal's default attributes (`CSI 0 m`).
pub const RESET: &str = "\x1b[0m";
