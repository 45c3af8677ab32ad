//! Test-only helpers for constructing cheatsheets and displays.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::CmanError;
use crate::io::sheet_store::sheet_path;
use crate::io::terminal::DisplayWidth;
use crate::sheet::{Heading, HeadingSet};

/// Create a heading with the given commands, in order.
pub fn heading(title: &str, commands: &[&str]) -> Heading {
    Heading {
        title: title.to_string(),
        commands: commands.iter().map(|command| command.to_string()).collect(),
    }
}

/// Create a sheet from headings, in order.
pub fn sheet(headings: Vec<Heading>) -> HeadingSet {
    HeadingSet { headings }
}

/// Write raw sheet JSON as `<name>.json` under `root`.
pub fn write_sheet(root: &Path, name: &str, contents: &str) -> PathBuf {
    let path = sheet_path(root, name);
    fs::write(&path, contents).expect("write sheet fixture");
    path
}

/// Temporary directory holding the given `(name, json)` sheets.
pub fn sheet_dir(sheets: &[(&str, &str)]) -> TempDir {
    let temp = tempfile::tempdir().expect("tempdir");
    for (name, contents) in sheets {
        write_sheet(temp.path(), name, contents);
    }
    temp
}

/// Display with a constant width.
pub struct FixedWidth(pub usize);

impl DisplayWidth for FixedWidth {
    fn display_width(&self) -> Result<usize, CmanError> {
        Ok(self.0)
    }
}

/// Display that can never be measured, like a process without a terminal.
pub struct FailingDisplay;

impl DisplayWidth for FailingDisplay {
    fn display_width(&self) -> Result<usize, CmanError> {
        Err(CmanError::TerminalQuery {
            reason: "no terminal in tests".to_string(),
        })
    }
}
