//! Table editing commands
//!
//! Each command takes the document as lines plus a cursor, finds the table
//! around the cursor, re-parses it into a fresh [`Table`], applies one
//! mutation, renders it back and reports the replacement as a [`TableEdit`].
//! `None` means there is nothing to do (cursor outside a table, move past an
//! edge, ...).

use crate::table::{
    CellAddress, Dialect, Position, Row, RowKind, Table, TableNavigator, TableRegion,
};
use crate::util::leading_whitespace;

/// Replacement of lines `start_line..=end_line` by `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEdit {
    pub start_line: usize,
    pub end_line: usize,
    /// Rendered table, `\n`-joined, no trailing newline
    pub text: String,
    /// New cursor position, if the command moves the cursor
    pub cursor: Option<Position>,
}

impl TableEdit {
    /// Apply this edit to a document given as lines
    pub fn apply(&self, lines: &[&str]) -> Vec<String> {
        let mut result: Vec<String> = Vec::with_capacity(lines.len());
        result.extend(lines[..self.start_line].iter().map(|l| l.to_string()));
        result.extend(self.text.lines().map(str::to_string));
        result.extend(lines[self.end_line + 1..].iter().map(|l| l.to_string()));
        result
    }
}

/// Behaviour switches for commands that can grow the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOptions {
    /// Append a new row when moving past the last cell or last row
    pub auto_add_row: bool,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self { auto_add_row: true }
    }
}

/// Where the cursor sits relative to the table's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Inside a cell's range
    Cell(CellAddress),
    /// On a data row but outside every cell range; resolved to the nearest cell
    Outside(CellAddress),
    /// On a separator row
    Separator(usize),
}

impl Anchor {
    fn cell(self) -> Option<CellAddress> {
        match self {
            Anchor::Cell(cell) | Anchor::Outside(cell) => Some(cell),
            Anchor::Separator(_) => None,
        }
    }
}

/// A parsed table plus the document context it came from
struct TableContext<'a> {
    dialect: Dialect,
    region: TableRegion,
    indent: String,
    lines: Vec<&'a str>,
    table: Table,
}

impl<'a> TableContext<'a> {
    fn load(lines: &[&'a str], line: usize, dialect: Dialect) -> Option<Self> {
        let region = dialect.locator().locate(lines, line)?;
        let block = region.lines(lines);
        let mut table = dialect.parser().parse(&block.join("\n"))?;
        table.start_line = region.start_line;
        let indent = leading_whitespace(block[0]).to_string();

        Some(Self {
            dialect,
            region,
            indent,
            lines: block,
            table,
        })
    }

    /// Resolve the cursor against the table as it currently reads.
    ///
    /// Anywhere on a separator line counts as the separator.
    fn anchor(&self, pos: Position) -> Option<Anchor> {
        let row = self.row_at(pos);
        if self.table.rows().get(row).is_some_and(Row::is_separator) {
            return Some(Anchor::Separator(row));
        }

        let nav = TableNavigator::with_lines(&self.table, &self.lines);
        match nav.locate(pos) {
            Some(jump) => Some(Anchor::Cell(jump.address())),
            None => nav.cell_at(pos).map(Anchor::Outside),
        }
    }

    fn row_at(&self, pos: Position) -> usize {
        pos.line - self.region.start_line
    }

    fn render(&self) -> String {
        self.dialect
            .stringifier()
            .stringify_with_indent(&self.table, &self.indent)
    }

    /// Navigator over the table as it will read after rendering
    fn rendered_navigator(&self) -> TableNavigator {
        let text = self.render();
        let lines: Vec<&str> = text.lines().collect();
        TableNavigator::with_lines(&self.table, &lines)
    }

    /// Cursor target of a cell after rendering, or the row's line start for separators
    fn cursor_at(&self, cell: CellAddress) -> Position {
        self.rendered_navigator()
            .position_of(cell)
            .unwrap_or_else(|| Position::new(self.region.start_line + cell.row, 0))
    }

    fn into_edit(self, command: &str, cursor: Option<Position>) -> TableEdit {
        let text = self.render();
        // Rows can be added or removed, so the replaced range is the original region
        tracing::debug!(
            command,
            dialect = %self.dialect,
            start_line = self.region.start_line,
            end_line = self.region.end_line,
            rows = self.table.row_count(),
            cols = self.table.col_count(),
            ?cursor,
            "Table command"
        );
        TableEdit {
            start_line: self.region.start_line,
            end_line: self.region.end_line,
            text,
            cursor,
        }
    }
}

/// Realign the table under the cursor
pub fn format_under_cursor(lines: &[&str], pos: Position, dialect: Dialect) -> Option<TableEdit> {
    let ctx = TableContext::load(lines, pos.line, dialect)?;
    let cursor = ctx
        .anchor(pos)
        .and_then(Anchor::cell)
        .map(|cell| ctx.cursor_at(cell));
    Some(ctx.into_edit("format", cursor))
}

/// Realign every table in a document
pub fn format_document(text: &str, dialect: Dialect) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let regions = dialect.locator().find_all(&lines);

    let mut result: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
    // Bottom-up so earlier regions keep their line numbers
    for region in regions.iter().rev() {
        let Some(edit) = format_under_cursor(&lines, Position::new(region.start_line, 0), dialect)
        else {
            continue;
        };
        result.splice(
            edit.start_line..=edit.end_line,
            edit.text.lines().map(str::to_string),
        );
    }

    tracing::debug!(tables = regions.len(), "Formatted document");
    let mut output = result.join("\n");
    if text.ends_with('\n') {
        output.push('\n');
    }
    output
}

/// Realign, then move to the next cell.
///
/// At the last cell a new row is appended when `auto_add_row` is set.
pub fn next_cell(
    lines: &[&str],
    pos: Position,
    dialect: Dialect,
    options: CommandOptions,
) -> Option<TableEdit> {
    let mut ctx = TableContext::load(lines, pos.line, dialect)?;
    let anchor = ctx.anchor(pos)?;
    let nav = ctx.rendered_navigator();

    let cursor = match anchor {
        Anchor::Outside(cell) => nav.position_of(cell),
        Anchor::Separator(row) => {
            nav.next_cell(Position::new(ctx.region.start_line + row, 0))
        }
        Anchor::Cell(cell) => {
            let current = nav.position_of(cell)?;
            if nav.is_last_cell(current) && options.auto_add_row {
                ctx.table.add_row(RowKind::Data, Vec::new());
                let row = ctx.table.row_count() - 1;
                Some(ctx.cursor_at(CellAddress::new(row, 0)))
            } else {
                nav.next_cell(current).or(Some(current))
            }
        }
    };

    Some(ctx.into_edit("next_cell", cursor))
}

/// Realign, then move to the previous cell
pub fn previous_cell(lines: &[&str], pos: Position, dialect: Dialect) -> Option<TableEdit> {
    let ctx = TableContext::load(lines, pos.line, dialect)?;
    let anchor = ctx.anchor(pos)?;
    let nav = ctx.rendered_navigator();

    let cursor = match anchor {
        Anchor::Outside(cell) => nav.position_of(cell),
        Anchor::Separator(row) => {
            nav.previous_cell(Position::new(ctx.region.start_line + row, 0))
        }
        Anchor::Cell(cell) => {
            let current = nav.position_of(cell)?;
            nav.previous_cell(current).or(Some(current))
        }
    };

    Some(ctx.into_edit("previous_cell", cursor))
}

/// Realign, then move to the same column of the next data row.
///
/// Past the last row a new row is appended when `auto_add_row` is set.
pub fn next_row(
    lines: &[&str],
    pos: Position,
    dialect: Dialect,
    options: CommandOptions,
) -> Option<TableEdit> {
    let mut ctx = TableContext::load(lines, pos.line, dialect)?;
    let anchor = ctx.anchor(pos)?;
    let nav = ctx.rendered_navigator();

    let (current, col) = match anchor.cell() {
        Some(cell) => (nav.position_of(cell)?, cell.col),
        None => (Position::new(pos.line, 0), 0),
    };

    let cursor = match nav.next_row(current) {
        Some(target) => Some(target),
        None if options.auto_add_row => {
            ctx.table.add_row(RowKind::Data, Vec::new());
            let row = ctx.table.row_count() - 1;
            Some(ctx.cursor_at(CellAddress::new(row, col)))
        }
        None => Some(current),
    };

    Some(ctx.into_edit("next_row", cursor))
}

/// Swap the cursor's row with the one above
pub fn move_row_up(lines: &[&str], pos: Position, dialect: Dialect) -> Option<TableEdit> {
    move_row(lines, pos, dialect, -1)
}

/// Swap the cursor's row with the one below
pub fn move_row_down(lines: &[&str], pos: Position, dialect: Dialect) -> Option<TableEdit> {
    move_row(lines, pos, dialect, 1)
}

fn move_row(lines: &[&str], pos: Position, dialect: Dialect, delta: isize) -> Option<TableEdit> {
    let mut ctx = TableContext::load(lines, pos.line, dialect)?;
    let row = ctx.row_at(pos);
    let target = row
        .checked_add_signed(delta)
        .filter(|&t| t < ctx.table.row_count())?;
    let anchor = ctx.anchor(pos);

    ctx.table.swap_rows(row, target);

    let cursor = match anchor.and_then(Anchor::cell) {
        Some(cell) => ctx.cursor_at(CellAddress::new(target, cell.col)),
        None => Position::new(ctx.region.start_line + target, pos.character),
    };
    Some(ctx.into_edit("move_row", Some(cursor)))
}

/// Swap the cursor's column with the one to its left
pub fn move_column_left(lines: &[&str], pos: Position, dialect: Dialect) -> Option<TableEdit> {
    move_column(lines, pos, dialect, -1)
}

/// Swap the cursor's column with the one to its right
pub fn move_column_right(lines: &[&str], pos: Position, dialect: Dialect) -> Option<TableEdit> {
    move_column(lines, pos, dialect, 1)
}

fn move_column(lines: &[&str], pos: Position, dialect: Dialect, delta: isize) -> Option<TableEdit> {
    let mut ctx = TableContext::load(lines, pos.line, dialect)?;
    let cell = ctx.anchor(pos)?.cell()?;
    let target = cell
        .col
        .checked_add_signed(delta)
        .filter(|&t| t < ctx.table.col_count())?;

    ctx.table.swap_columns(cell.col, target);

    let cursor = ctx.cursor_at(CellAddress::new(cell.row, target));
    Some(ctx.into_edit("move_column", Some(cursor)))
}

/// Empty the cell under the cursor
pub fn clear_cell(lines: &[&str], pos: Position, dialect: Dialect) -> Option<TableEdit> {
    let mut ctx = TableContext::load(lines, pos.line, dialect)?;
    let cell = ctx.anchor(pos)?.cell()?;

    ctx.table.set_at(cell.row, cell.col, "");

    let cursor = ctx.cursor_at(cell);
    Some(ctx.into_edit("clear_cell", Some(cursor)))
}

/// Insert an empty data row below the cursor's row
pub fn insert_row_below(lines: &[&str], pos: Position, dialect: Dialect) -> Option<TableEdit> {
    let mut ctx = TableContext::load(lines, pos.line, dialect)?;
    let row = ctx.row_at(pos);
    let col = ctx.anchor(pos).and_then(Anchor::cell).map_or(0, |c| c.col);

    ctx.table.insert_row(row + 1, RowKind::Data);

    let cursor = ctx.cursor_at(CellAddress::new(row + 1, col));
    Some(ctx.into_edit("insert_row", Some(cursor)))
}

/// Delete the cursor's row. The last remaining row is kept.
pub fn delete_row(lines: &[&str], pos: Position, dialect: Dialect) -> Option<TableEdit> {
    let mut ctx = TableContext::load(lines, pos.line, dialect)?;
    if ctx.table.row_count() <= 1 {
        return None;
    }
    let row = ctx.row_at(pos);
    let col = ctx.anchor(pos).and_then(Anchor::cell).map_or(0, |c| c.col);

    ctx.table.remove_row(row);

    let row = row.min(ctx.table.row_count() - 1);
    let cursor = ctx.cursor_at(CellAddress::new(row, col));
    Some(ctx.into_edit("delete_row", Some(cursor)))
}

/// Insert an empty column right of the cursor's column
pub fn insert_column_right(lines: &[&str], pos: Position, dialect: Dialect) -> Option<TableEdit> {
    let mut ctx = TableContext::load(lines, pos.line, dialect)?;
    let cell = ctx.anchor(pos)?.cell()?;

    ctx.table.insert_column(cell.col + 1);

    let cursor = ctx.cursor_at(CellAddress::new(cell.row, cell.col + 1));
    Some(ctx.into_edit("insert_column", Some(cursor)))
}

/// Delete the cursor's column. The last remaining column is kept.
pub fn delete_column(lines: &[&str], pos: Position, dialect: Dialect) -> Option<TableEdit> {
    let mut ctx = TableContext::load(lines, pos.line, dialect)?;
    let cell = ctx.anchor(pos)?.cell()?;

    if !ctx.table.remove_column(cell.col) {
        return None;
    }

    let col = cell.col.min(ctx.table.col_count() - 1);
    let cursor = ctx.cursor_at(CellAddress::new(cell.row, col));
    Some(ctx.into_edit("delete_column", Some(cursor)))
}

/// Render a new empty table: a header row, a separator and `rows - 1` body rows
pub fn create_table(rows: usize, cols: usize, dialect: Dialect, indent: &str) -> String {
    let table = Table::with_size(rows, cols);
    tracing::debug!(rows, cols, dialect = %dialect, "Created table");
    dialect.stringifier().stringify_with_indent(&table, indent)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &[&str] = &["intro", "| a | b |", "|---|---|", "| 1 | 2 |", "outro"];

    #[test]
    fn test_format_under_cursor() {
        let edit = format_under_cursor(DOC, Position::new(1, 2), Dialect::Markdown).unwrap();

        assert_eq!(edit.start_line, 1);
        assert_eq!(edit.end_line, 3);
        assert_eq!(edit.text, "| a   | b   |\n| --- | --- |\n| 1   | 2   |");
        assert_eq!(edit.cursor, Some(Position::new(1, 2)));
    }

    #[test]
    fn test_outside_table_is_none() {
        assert!(format_under_cursor(DOC, Position::new(0, 0), Dialect::Markdown).is_none());
        assert!(next_cell(DOC, Position::new(4, 0), Dialect::Org, CommandOptions::default())
            .is_none());
    }

    #[test]
    fn test_apply_edit() {
        let edit = format_under_cursor(DOC, Position::new(1, 2), Dialect::Markdown).unwrap();
        assert_eq!(
            edit.apply(DOC),
            vec!["intro", "| a   | b   |", "| --- | --- |", "| 1   | 2   |", "outro"]
        );
    }

    #[test]
    fn test_move_row_at_edge_is_none() {
        assert!(move_row_up(DOC, Position::new(1, 2), Dialect::Markdown).is_none());
        assert!(move_row_down(DOC, Position::new(3, 2), Dialect::Markdown).is_none());
    }

    #[test]
    fn test_move_column_at_edge_is_none() {
        assert!(move_column_left(DOC, Position::new(1, 2), Dialect::Markdown).is_none());
        assert!(move_column_right(DOC, Position::new(1, 6), Dialect::Markdown).is_none());
    }

    #[test]
    fn test_create_table() {
        assert_eq!(
            create_table(2, 2, Dialect::Org, ""),
            "|     |     |\n|-----+-----|\n|     |     |"
        );
    }

    #[test]
    fn test_format_document() {
        let text = "# Doc\n|a|b|\n|-|-|\n|1|2|\n\ntext\n|x|\n";
        assert_eq!(
            format_document(text, Dialect::Markdown),
            "# Doc\n| a   | b   |\n| --- | --- |\n| 1   | 2   |\n\ntext\n| x |\n"
        );
    }
}
