//! Markdown and Org table parsing
//!
//! Both dialects share one line-oriented algorithm and differ only in how a
//! separator row is recognized and what it carries (Markdown separators encode
//! column alignment, Org separators don't).

use super::model::{Alignment, RowKind, Table};

/// Cell boundary marker shared by both dialects
pub const MARKER: char = '|';

/// Parses an isolated block of table lines into a [`Table`]
pub trait TableParser {
    /// Check if a trimmed line is a separator row
    fn is_separator(&self, line: &str) -> bool;

    /// Append a separator row built from `line` to `table`
    fn add_separator(&self, table: &mut Table, line: &str);

    /// Parse a text block. Returns `None` only for empty input.
    ///
    /// Lines not starting with the marker are skipped. A line without a
    /// trailing marker is an incomplete row still being typed; it yields one
    /// cell fewer than its complete form and gets padded by the table.
    fn parse(&self, text: &str) -> Option<Table> {
        if text.is_empty() {
            return None;
        }

        let mut table = Table::new();
        for line in text.lines().map(str::trim) {
            if !line.starts_with(MARKER) {
                continue;
            }

            if self.is_separator(line) {
                self.add_separator(&mut table, line);
            } else {
                table.add_row(RowKind::Data, split_cells(line));
            }
        }

        table.recalculate_column_widths();
        tracing::trace!(
            rows = table.row_count(),
            cols = table.col_count(),
            "Parsed table"
        );
        Some(table)
    }
}

/// Split a trimmed row line into trimmed cell values
///
/// `|a|b|` gives `["a", "b"]`; the incomplete `|a|b` gives the same two cells
/// rather than three.
pub fn split_cells(line: &str) -> Vec<String> {
    let rest = line.strip_prefix(MARKER).unwrap_or(line);
    let inner = rest.strip_suffix(MARKER).unwrap_or(rest);
    inner.split(MARKER).map(|s| s.trim().to_string()).collect()
}

/// Markdown pipe table parser
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownParser;

impl MarkdownParser {
    /// Alignment encoded by one separator cell, if it is long enough to tell
    fn cell_alignment(cell: &str) -> Option<Alignment> {
        if cell.chars().count() < 3 {
            return None;
        }
        let left = cell.starts_with(':');
        let right = cell.ends_with(':');
        Some(match (left, right) {
            (true, true) => Alignment::Center,
            (_, true) => Alignment::Right,
            _ => Alignment::Left,
        })
    }
}

impl TableParser for MarkdownParser {
    fn is_separator(&self, line: &str) -> bool {
        let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        compact.starts_with("|-") || compact.starts_with("|:-")
    }

    fn add_separator(&self, table: &mut Table, line: &str) {
        table.add_row(RowKind::Separator, Vec::new());

        let col_count = table.col_count();
        for (col, cell) in split_cells(line).iter().enumerate().take(col_count) {
            if let Some(alignment) = Self::cell_alignment(cell) {
                table.set_alignment(col, alignment);
            }
        }
    }
}

/// Org-mode table parser
#[derive(Debug, Clone, Copy, Default)]
pub struct OrgParser;

impl TableParser for OrgParser {
    fn is_separator(&self, line: &str) -> bool {
        line.chars().nth(1) == Some('-')
    }

    fn add_separator(&self, table: &mut Table, _line: &str) {
        table.add_row(RowKind::Separator, Vec::new());
    }
}
