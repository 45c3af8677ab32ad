//! Grid layout for cheatsheets.
//!
//! Every column has the same width: the widest title or command anywhere in
//! the sheet plus a one column gutter. Headings fill rows left to right, as
//! many per row as the display allows, and each row of headings is printed as
//! a highlighted header line followed by its command lines.

use crate::core::ansi;
use crate::sheet::{Heading, HeadingSet, text_width};

/// Column geometry for one sheet at one display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Width of every column, gutter included.
    pub column_width: usize,
    /// Headings placed side by side; never zero.
    pub headings_per_row: usize,
    /// Command lines considered under each header line. Computed over the
    /// whole sheet, not per row of headings.
    pub commands_height: usize,
}

impl Grid {
    /// Fit `sheet` into `available_width` columns.
    ///
    /// A display narrower than one column still gets one heading per row.
    pub fn for_width(sheet: &HeadingSet, available_width: usize) -> Self {
        let column_width = sheet.heading_width() + 1;
        Self {
            column_width,
            headings_per_row: (available_width / column_width).max(1),
            commands_height: sheet.commands_height(),
        }
    }
}

/// Render `sheet` as printable text for a display `available_width` columns wide.
///
/// Each row of headings ends with a newline. An empty sheet renders to an
/// empty string.
pub fn render(sheet: &HeadingSet, available_width: usize) -> String {
    let grid = Grid::for_width(sheet, available_width);
    let mut out = String::new();
    for group in sheet.headings.chunks(grid.headings_per_row) {
        render_row_block(&mut out, group, &grid);
        out.push('\n');
    }
    out
}

fn render_row_block(out: &mut String, group: &[Heading], grid: &Grid) {
    for heading in group {
        out.push_str(ansi::INVERSE);
        push_padded(out, &heading.title, grid.column_width - 1);
        out.push_str(ansi::RESET);
        out.push(' ');
    }

    for row in 0..grid.commands_height {
        if !row_has_commands(group, row) {
            continue;
        }
        out.push('\n');
        for heading in group {
            match heading.commands.get(row) {
                Some(command) => push_padded(out, command, grid.column_width),
                None => push_spaces(out, grid.column_width),
            }
        }
    }
}

/// Whether any heading in `group` has a command on line `row`.
fn row_has_commands(group: &[Heading], row: usize) -> bool {
    group.iter().any(|heading| heading.commands.len() > row)
}

/// Append `text` and pad it with spaces to `width` columns. Text already
/// wider than `width` is appended whole.
fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    push_spaces(out, width.saturating_sub(text_width(text)));
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}
