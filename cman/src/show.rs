//! The `cman <name>` command: load a cheatsheet and lay it out for display.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::layout::{Grid, render};
use crate::io::sheet_store::load_sheet;
use crate::io::terminal::DisplayWidth;

/// Load the cheatsheet `name` from `root` and render it for `display`.
///
/// The sheet is loaded before the display is queried, so a missing or broken
/// sheet is reported even when there is no terminal.
pub fn show<D: DisplayWidth>(root: &Path, name: &str, display: &D) -> Result<String> {
    let sheet = load_sheet(root, name).with_context(|| format!("load cheatsheet '{name}'"))?;
    let width = display
        .display_width()
        .context("query display width")?;
    let grid = Grid::for_width(&sheet, width);
    debug!(
        width,
        column_width = grid.column_width,
        headings_per_row = grid.headings_per_row,
        "laying out cheatsheet"
    );
    Ok(render(&sheet, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ansi::{INVERSE, RESET};
    use crate::error::CmanError;
    use crate::test_support::{FailingDisplay, FixedWidth, sheet_dir};

    fn kind(err: &anyhow::Error) -> Option<&CmanError> {
        err.downcast_ref::<CmanError>()
    }

    #[test]
    fn show_renders_sheet_at_display_width() {
        let temp = sheet_dir(&[(
            "ls",
            r#"{"headings":[{"title":"L","commands":["-a"]},{"title":"S","commands":[]}]}"#,
        )]);

        let out = show(temp.path(), "ls", &FixedWidth(80)).expect("show");
        assert_eq!(
            out,
            format!("{INVERSE}L {RESET} {INVERSE}S {RESET} \n-a    \n")
        );
    }

    #[test]
    fn show_wraps_to_narrow_display() {
        let temp = sheet_dir(&[(
            "ab",
            r#"{"headings":[{"title":"A","commands":[]},{"title":"B","commands":[]}]}"#,
        )]);

        let out = show(temp.path(), "ab", &FixedWidth(2)).expect("show");
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn show_reports_missing_sheet_before_querying_display() {
        let temp = sheet_dir(&[]);
        let err = show(temp.path(), "missing", &FailingDisplay).expect_err("missing");
        assert!(matches!(kind(&err), Some(CmanError::NotFound { .. })));
        assert!(format!("{err:#}").starts_with("load cheatsheet 'missing': "));
    }

    #[test]
    fn show_reports_display_failure_for_valid_sheet() {
        let temp = sheet_dir(&[("ok", r#"{"headings":[]}"#)]);
        let err = show(temp.path(), "ok", &FailingDisplay).expect_err("no display");
        assert!(matches!(kind(&err), Some(CmanError::TerminalQuery { .. })));
    }
}
