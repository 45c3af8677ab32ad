//! Cheatsheet document model.

use serde::{Deserialize, Deserializer};
use unicode_width::UnicodeWidthStr;

/// One named group of commands. Command order is display order.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Heading {
    pub title: String,
    /// Missing or `null` means the heading has no commands.
    #[serde(default, deserialize_with = "commands_or_empty")]
    pub commands: Vec<String>,
}

impl Heading {
    /// Widest of the title and every command, in terminal columns.
    pub fn width(&self) -> usize {
        self.commands
            .iter()
            .map(|command| text_width(command))
            .fold(text_width(&self.title), usize::max)
    }
}

/// A whole cheatsheet. Heading order is display order.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct HeadingSet {
    pub headings: Vec<Heading>,
}

impl HeadingSet {
    /// Width of the widest heading in the sheet; `0` for an empty sheet.
    pub fn heading_width(&self) -> usize {
        self.headings.iter().map(Heading::width).max().unwrap_or(0)
    }

    /// Number of commands in the heading with the most commands.
    pub fn commands_height(&self) -> usize {
        self.headings
            .iter()
            .map(|heading| heading.commands.len())
            .max()
            .unwrap_or(0)
    }
}

fn commands_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Display width of `text` in terminal columns.
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::heading;

    #[test]
    fn heading_width_uses_title_when_commands_are_shorter() {
        assert_eq!(heading("Branches", &["ls", "mv"]).width(), 8);
    }

    #[test]
    fn heading_width_uses_longest_command() {
        assert_eq!(heading("Git", &["status", "commit --amend"]).width(), 14);
    }

    #[test]
    fn heading_without_commands_is_as_wide_as_its_title() {
        assert_eq!(heading("Copy mode", &[]).width(), 9);
    }

    #[test]
    fn sheet_metrics_span_all_headings() {
        let sheet = HeadingSet {
            headings: vec![
                heading("A", &["one", "two", "three"]),
                heading("Longest title", &["x"]),
            ],
        };
        assert_eq!(sheet.heading_width(), 13);
        assert_eq!(sheet.commands_height(), 3);
    }

    #[test]
    fn empty_sheet_has_zero_metrics() {
        let sheet = HeadingSet::default();
        assert_eq!(sheet.heading_width(), 0);
        assert_eq!(sheet.commands_height(), 0);
    }

    #[test]
    fn wide_characters_count_as_two_columns() {
        assert_eq!(text_width("日本"), 4);
        assert_eq!(text_width("abc"), 3);
    }

    #[test]
    fn decodes_from_fixed_field_names() {
        let sheet: HeadingSet =
            serde_json::from_str(r#"{"headings":[{"title":"T","commands":["a","b"]}]}"#)
                .expect("decode");
        assert_eq!(sheet.headings, vec![heading("T", &["a", "b"])]);
    }

    #[test]
    fn missing_or_null_commands_decode_as_empty() {
        let sheet: HeadingSet = serde_json::from_str(
            r#"{"headings":[{"title":"Missing"},{"title":"Null","commands":null}]}"#,
        )
        .expect("decode");
        assert_eq!(
            sheet.headings,
            vec![heading("Missing", &[]), heading("Null", &[])]
        );
    }
}
