//! Table rendering back to aligned text
//!
//! Data rows render identically in both dialects:
//!
//! ```text
//! | name  | qty |
//! ```
//!
//! Separator rows differ: Markdown writes `| ----- | --: |` with colons for the
//! column alignment, Org writes `|-------+-----|` with `+` at intersections.

use super::model::{Alignment, Row, RowKind, Table, MIN_SEPARATOR_WIDTH};
use super::parser::MARKER;
use crate::util::{pad, pad_with};

/// Horizontal rule character used in separator rows
pub const RULE: char = '-';

/// Org column intersection in separator rows
pub const INTERSECTION: char = '+';

/// Renders a [`Table`] back to text
pub trait TableStringifier {
    /// Append the separator row for columns of the given widths to `out`
    fn render_separator(&self, table: &Table, widths: &[usize], out: &mut String);

    /// Render without indentation
    fn stringify(&self, table: &Table) -> String {
        self.stringify_with_indent(table, "")
    }

    /// Render with `indent` prefixed to every non-blank line
    fn stringify_with_indent(&self, table: &Table, indent: &str) -> String {
        let widths = render_widths(table);
        let mut lines = Vec::with_capacity(table.row_count());

        for (index, row) in table.rows().iter().enumerate() {
            let mut line = String::new();
            line.push(MARKER);
            match row.kind {
                RowKind::Data => render_data_row(table.get_row(index), &widths, &mut line),
                RowKind::Separator => self.render_separator(table, &widths, &mut line),
            }
            lines.push(line);
        }

        lines
            .into_iter()
            .map(|line| {
                if line.trim().is_empty() {
                    line
                } else {
                    format!("{indent}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Column widths used for rendering: separators need at least `---`
fn render_widths(table: &Table) -> Vec<usize> {
    let min = if table.rows().iter().any(Row::is_separator) {
        MIN_SEPARATOR_WIDTH
    } else {
        0
    };
    table.cols().iter().map(|c| c.width.max(min)).collect()
}

fn render_data_row(cells: &[String], widths: &[usize], out: &mut String) {
    for (value, &width) in cells.iter().zip(widths) {
        out.push(' ');
        out.push_str(&pad(value, width));
        out.push(' ');
        out.push(MARKER);
    }
}

/// Markdown pipe table renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownStringifier;

impl TableStringifier for MarkdownStringifier {
    fn render_separator(&self, table: &Table, widths: &[usize], out: &mut String) {
        for (col, &width) in table.cols().iter().zip(widths) {
            let (lead, trail) = match col.alignment {
                Alignment::Left => (RULE, RULE),
                Alignment::Center => (':', ':'),
                Alignment::Right => (RULE, ':'),
            };
            out.push(' ');
            out.push(lead);
            out.push_str(&pad_with("", width.saturating_sub(2), RULE));
            out.push(trail);
            out.push(' ');
            out.push(MARKER);
        }
    }
}

/// Org-mode table renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct OrgStringifier;

impl TableStringifier for OrgStringifier {
    fn render_separator(&self, _table: &Table, widths: &[usize], out: &mut String) {
        for (index, &width) in widths.iter().enumerate() {
            out.push_str(&pad_with("", width + 2, RULE));
            out.push(if index + 1 == widths.len() {
                MARKER
            } else {
                INTERSECTION
            });
        }
    }
}
