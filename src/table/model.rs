//! Table data model
//!
//! A grid of rows (each tagged Data or Separator), column definitions and a
//! row-major cell store. Column widths are kept in display cells and are
//! maintained incrementally on single-cell edits, or rebuilt from scratch via
//! [`Table::recalculate_column_widths`] after structural changes.

use crate::util::display_width;

/// Minimum column width once a separator row exists (`---`)
pub const MIN_SEPARATOR_WIDTH: usize = 3;

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Kind of a table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Row holding cell content
    Data,
    /// Formatting-only rule row (`|---|---|`)
    Separator,
}

/// Row descriptor; index in `Table::rows()` is the row position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
}

impl Row {
    pub fn is_separator(&self) -> bool {
        self.kind == RowKind::Separator
    }
}

/// Column definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Column {
    pub alignment: Alignment,
    /// Widest cell in this column, in display cells
    pub width: usize,
}

/// In-memory table grid
///
/// Every Data row holds exactly `col_count()` cells; Separator rows hold none.
/// Indices passed to accessors must be in range: callers validate them through
/// the navigator first, so a bad index is a bug and panics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
    cols: Vec<Column>,
    cells: Vec<Vec<String>>,
    /// Document line where row 0 begins (navigation coordinates only)
    pub start_line: usize,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with a header row, a separator and `rows - 1` body rows
    pub fn with_size(rows: usize, cols: usize) -> Self {
        let cols = cols.max(1);
        let mut table = Self::new();
        table.add_row(RowKind::Data, vec![String::new(); cols]);
        table.add_row(RowKind::Separator, Vec::new());
        for _ in 1..rows.max(1) {
            table.add_row(RowKind::Data, vec![String::new(); cols]);
        }
        table.recalculate_column_widths();
        table
    }

    /// Row descriptors in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Column definitions in order
    pub fn cols(&self) -> &[Column] {
        &self.cols
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether any separator row exists
    pub fn has_separator(&self) -> bool {
        self.rows.iter().any(Row::is_separator)
    }

    /// Set the alignment tag of a column
    pub fn set_alignment(&mut self, col: usize, alignment: Alignment) {
        self.check_col(col);
        self.cols[col].alignment = alignment;
    }

    /// Append a row.
    ///
    /// Grows the column set when `values` is longer than it, and pads every Data
    /// row (existing and new) so the grid stays rectangular. Separator rows
    /// store no cells whatever `values` holds.
    pub fn add_row(&mut self, kind: RowKind, mut values: Vec<String>) {
        if values.is_empty() && self.cols.is_empty() {
            values.push(String::new());
        }

        while self.cols.len() < values.len() {
            self.add_column();
        }

        let row_cells = match kind {
            RowKind::Data => {
                values.resize(self.cols.len(), String::new());
                for (col, value) in self.cols.iter_mut().zip(&values) {
                    col.width = col.width.max(display_width(value));
                }
                values
            }
            RowKind::Separator => {
                for col in &mut self.cols {
                    col.width = col.width.max(MIN_SEPARATOR_WIDTH);
                }
                Vec::new()
            }
        };

        self.rows.push(Row { kind });
        self.cells.push(row_cells);
    }

    /// Append an empty left-aligned column
    pub fn add_column(&mut self) {
        let width = self.min_width();
        self.cols.push(Column {
            alignment: Alignment::Left,
            width,
        });
        for (row, cells) in self.rows.iter().zip(&mut self.cells) {
            if row.kind == RowKind::Data {
                cells.push(String::new());
            }
        }
    }

    /// Get the value of a cell. Separator rows read as empty.
    pub fn get_at(&self, row: usize, col: usize) -> &str {
        self.check_row(row);
        self.check_col(col);
        match self.rows[row].kind {
            RowKind::Data => &self.cells[row][col],
            RowKind::Separator => "",
        }
    }

    /// Set the value of a cell, updating the column width incrementally
    pub fn set_at(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.check_row(row);
        self.check_col(col);
        assert!(
            self.rows[row].kind == RowKind::Data,
            "cannot set cell ({row}, {col}): row {row} is a separator"
        );

        let value = value.into();
        let new_width = display_width(&value);
        let old_width = display_width(&self.cells[row][col]);
        self.cells[row][col] = value;

        let current = self.cols[col].width;
        if new_width > current {
            self.cols[col].width = new_width;
        } else if new_width < old_width && old_width == current {
            self.cols[col].width = self.scan_column_width(col);
        }
    }

    /// Cells of a row. Separator rows have none.
    pub fn get_row(&self, row: usize) -> &[String] {
        self.check_row(row);
        &self.cells[row]
    }

    /// Replace every cell of a Data row, padding or truncating to the column count
    pub fn set_row(&mut self, row: usize, mut values: Vec<String>) {
        self.check_row(row);
        if self.rows[row].is_separator() {
            return;
        }
        values.resize(self.cols.len(), String::new());
        self.cells[row] = values;
        self.recalculate_column_widths();
    }

    /// Insert an empty row at `index` (`index == row_count()` appends)
    pub fn insert_row(&mut self, index: usize, kind: RowKind) {
        assert!(
            index <= self.rows.len(),
            "row insert index {index} out of range ({} rows)",
            self.rows.len()
        );
        if self.cols.is_empty() {
            self.add_column();
        }
        let cells = match kind {
            RowKind::Data => vec![String::new(); self.cols.len()],
            RowKind::Separator => Vec::new(),
        };
        self.rows.insert(index, Row { kind });
        self.cells.insert(index, cells);
        self.recalculate_column_widths();
    }

    /// Remove a row
    pub fn remove_row(&mut self, index: usize) {
        self.check_row(index);
        self.rows.remove(index);
        self.cells.remove(index);
        self.recalculate_column_widths();
    }

    /// Exchange two rows (descriptor and cells)
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.check_row(a);
        self.check_row(b);
        self.rows.swap(a, b);
        self.cells.swap(a, b);
        self.recalculate_column_widths();
    }

    /// Insert an empty left-aligned column at `index` (`index == col_count()` appends)
    pub fn insert_column(&mut self, index: usize) {
        assert!(
            index <= self.cols.len(),
            "column insert index {index} out of range ({} columns)",
            self.cols.len()
        );
        self.cols.insert(
            index,
            Column {
                alignment: Alignment::Left,
                width: 0,
            },
        );
        for (row, cells) in self.rows.iter().zip(&mut self.cells) {
            if row.kind == RowKind::Data {
                cells.insert(index, String::new());
            }
        }
        self.recalculate_column_widths();
    }

    /// Remove a column. The last remaining column is never removed.
    ///
    /// Returns whether the column was removed.
    pub fn remove_column(&mut self, index: usize) -> bool {
        self.check_col(index);
        if self.cols.len() == 1 {
            return false;
        }
        self.cols.remove(index);
        for (row, cells) in self.rows.iter().zip(&mut self.cells) {
            if row.kind == RowKind::Data {
                cells.remove(index);
            }
        }
        self.recalculate_column_widths();
        true
    }

    /// Exchange two columns: definitions and the cells in every row
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        self.check_col(a);
        self.check_col(b);
        self.cols.swap(a, b);
        for (row, cells) in self.rows.iter().zip(&mut self.cells) {
            if row.kind == RowKind::Data {
                cells.swap(a, b);
            }
        }
        self.recalculate_column_widths();
    }

    /// Rebuild every column width from the cell contents
    pub fn recalculate_column_widths(&mut self) {
        for col in &mut self.cols {
            col.width = 0;
        }
        for (row, cells) in self.rows.iter().zip(&self.cells) {
            if row.kind != RowKind::Data {
                continue;
            }
            for (col, value) in self.cols.iter_mut().zip(cells) {
                col.width = col.width.max(display_width(value));
            }
        }
        self.apply_separator_minimum();
    }

    /// Raise every column to the separator minimum if a separator row exists
    pub(crate) fn apply_separator_minimum(&mut self) {
        let min = self.min_width();
        for col in &mut self.cols {
            col.width = col.width.max(min);
        }
    }

    fn min_width(&self) -> usize {
        if self.has_separator() {
            MIN_SEPARATOR_WIDTH
        } else {
            0
        }
    }

    fn scan_column_width(&self, col: usize) -> usize {
        self.rows
            .iter()
            .zip(&self.cells)
            .filter(|(row, _)| row.kind == RowKind::Data)
            .map(|(_, cells)| display_width(&cells[col]))
            .max()
            .unwrap_or(0)
            .max(self.min_width())
    }

    fn check_row(&self, row: usize) {
        assert!(
            row < self.rows.len(),
            "row index {row} out of range ({} rows)",
            self.rows.len()
        );
    }

    fn check_col(&self, col: usize) {
        assert!(
            col < self.cols.len(),
            "column index {col} out of range ({} columns)",
            self.cols.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn widths(table: &Table) -> Vec<usize> {
        table.cols().iter().map(|c| c.width).collect()
    }

    #[test]
    fn test_add_row_empty_creates_single_column() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, Vec::new());

        assert_eq!(table.col_count(), 1);
        assert_eq!(table.get_row(0), &[String::new()]);
    }

    #[test]
    fn test_add_row_wider_pads_existing_rows() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a"]));
        table.add_row(RowKind::Data, strings(&["b", "cc", "ddd"]));

        assert_eq!(table.col_count(), 3);
        assert_eq!(table.get_row(0), strings(&["a", "", ""]).as_slice());
        assert_eq!(widths(&table), vec![1, 2, 3]);
    }

    #[test]
    fn test_add_row_narrower_is_padded() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a", "b", "c"]));
        table.add_row(RowKind::Data, strings(&["x"]));

        assert_eq!(table.get_row(1), strings(&["x", "", ""]).as_slice());
    }

    #[test]
    fn test_separator_row_stores_no_cells() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a", "b"]));
        table.add_row(RowKind::Separator, strings(&["---", "---"]));

        assert!(table.get_row(1).is_empty());
        assert_eq!(table.get_at(1, 0), "");
        assert_eq!(widths(&table), vec![3, 3]);
    }

    #[test]
    fn test_add_column() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a"]));
        table.add_row(RowKind::Data, strings(&["b"]));

        table.add_column();

        assert_eq!(table.col_count(), 2);
        for row in 0..table.row_count() {
            assert_eq!(table.get_row(row).len(), 2);
            assert_eq!(table.get_at(row, 1), "");
        }
        assert_eq!(table.cols()[1].alignment, Alignment::Left);
        assert_eq!(table.cols()[1].width, 0);
    }

    #[test]
    fn test_set_at_widens_column() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a", "b"]));

        table.set_at(0, 1, "wider");
        assert_eq!(table.get_at(0, 1), "wider");
        assert_eq!(widths(&table), vec![1, 5]);
    }

    #[test]
    fn test_set_at_shrinks_column_when_max_replaced() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["longest"]));
        table.add_row(RowKind::Data, strings(&["mid"]));

        table.set_at(0, 0, "x");
        assert_eq!(widths(&table), vec![3]);
    }

    #[test]
    fn test_set_at_never_below_separator_minimum() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["abcdef"]));
        table.add_row(RowKind::Separator, Vec::new());

        table.set_at(0, 0, "a");
        assert_eq!(widths(&table), vec![3]);
    }

    #[test]
    fn test_incremental_and_full_widths_agree() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["name", "qty"]));
        table.add_row(RowKind::Separator, Vec::new());
        table.add_row(RowKind::Data, strings(&["りんご", "12"]));
        table.add_row(RowKind::Data, strings(&["pear", "1000"]));

        table.set_at(2, 0, "apple");
        table.set_at(3, 1, "7");
        table.set_at(0, 0, "fruit name");
        let incremental = widths(&table);

        table.recalculate_column_widths();
        assert_eq!(widths(&table), incremental);
        assert_eq!(incremental, vec![10, 3]);
    }

    #[test]
    fn test_recalculate_uses_display_width() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["あいう", "a"]));
        table.recalculate_column_widths();
        assert_eq!(widths(&table), vec![6, 1]);
    }

    #[test]
    fn test_swap_columns() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a", "bbbb"]));
        table.add_row(RowKind::Separator, Vec::new());
        table.add_row(RowKind::Data, strings(&["1", "2"]));
        table.set_alignment(1, Alignment::Right);

        table.swap_columns(0, 1);

        assert_eq!(table.get_row(0), strings(&["bbbb", "a"]).as_slice());
        assert_eq!(table.get_row(2), strings(&["2", "1"]).as_slice());
        assert_eq!(table.cols()[0].alignment, Alignment::Right);
        assert_eq!(widths(&table), vec![4, 3]);
    }

    #[test]
    fn test_swap_rows() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a"]));
        table.add_row(RowKind::Separator, Vec::new());

        table.swap_rows(0, 1);

        assert!(table.rows()[0].is_separator());
        assert_eq!(table.get_row(1), strings(&["a"]).as_slice());
    }

    #[test]
    fn test_set_row_pads_and_truncates() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a", "b"]));

        table.set_row(0, strings(&["x"]));
        assert_eq!(table.get_row(0), strings(&["x", ""]).as_slice());

        table.set_row(0, strings(&["1", "2", "3"]));
        assert_eq!(table.get_row(0), strings(&["1", "2"]).as_slice());
    }

    #[test]
    fn test_insert_and_remove_row() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a", "b"]));
        table.add_row(RowKind::Data, strings(&["c", "d"]));

        table.insert_row(1, RowKind::Data);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.get_row(1), strings(&["", ""]).as_slice());

        table.remove_row(0);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get_at(1, 0), "c");
    }

    #[test]
    fn test_insert_and_remove_column() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a", "b"]));
        table.add_row(RowKind::Separator, Vec::new());

        table.insert_column(1);
        assert_eq!(table.get_row(0), strings(&["a", "", "b"]).as_slice());
        assert_eq!(table.cols()[1].width, 3);

        assert!(table.remove_column(0));
        assert_eq!(table.get_row(0), strings(&["", "b"]).as_slice());
    }

    #[test]
    fn test_remove_last_column_refused() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["only"]));

        assert!(!table.remove_column(0));
        assert_eq!(table.col_count(), 1);
    }

    #[test]
    fn test_with_size() {
        let table = Table::with_size(3, 2);

        let kinds: Vec<RowKind> = table.rows().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![RowKind::Data, RowKind::Separator, RowKind::Data, RowKind::Data]
        );
        assert_eq!(table.col_count(), 2);
        assert_eq!(widths(&table), vec![3, 3]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_at_out_of_range_panics() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a"]));
        table.get_at(0, 5);
    }

    #[test]
    #[should_panic(expected = "separator")]
    fn test_set_at_on_separator_panics() {
        let mut table = Table::new();
        table.add_row(RowKind::Data, strings(&["a"]));
        table.add_row(RowKind::Separator, Vec::new());
        table.set_at(1, 0, "x");
    }
}
