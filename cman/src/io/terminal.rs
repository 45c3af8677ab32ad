//! Display width queries.
//!
//! The [`DisplayWidth`] trait decouples rendering from the terminal the
//! process happens to run in, so tests can supply a fixed width.

use std::io;

use tracing::debug;

use crate::error::CmanError;

/// Source of the number of character columns available for output.
pub trait DisplayWidth {
    fn display_width(&self) -> Result<usize, CmanError>;
}

/// Width of the controlling terminal.
///
/// crossterm asks the controlling terminal (`/dev/tty`) before standard
/// output, so piped or redirected output still gets the terminal's width.
/// A process without any terminal is an error rather than a default width.
pub struct Terminal;

impl DisplayWidth for Terminal {
    fn display_width(&self) -> Result<usize, CmanError> {
        width_from_size(crossterm::terminal::size())
    }
}

/// Turn a `(columns, rows)` size query into a usable width.
fn width_from_size(size: io::Result<(u16, u16)>) -> Result<usize, CmanError> {
    let (columns, rows) = size.map_err(|err| CmanError::TerminalQuery {
        reason: err.to_string(),
    })?;
    debug!(columns, rows, "queried terminal size");
    if columns == 0 {
        return Err(CmanError::TerminalQuery {
            reason: "terminal reported zero columns".to_string(),
        });
    }
    Ok(usize::from(columns))
}
