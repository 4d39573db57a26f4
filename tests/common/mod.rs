//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tablemode::table::{Dialect, Table};

/// Parse a text block with the given dialect
pub fn parse(text: &str, dialect: Dialect) -> Table {
    dialect
        .parser()
        .parse(text)
        .expect("non-empty input always parses")
}

/// Render a table with the given dialect
pub fn render(table: &Table, dialect: Dialect) -> String {
    dialect.stringifier().stringify(table)
}

/// Cell contents of every row (separators as empty rows)
pub fn grid(table: &Table) -> Vec<Vec<String>> {
    (0..table.row_count())
        .map(|row| table.get_row(row).to_vec())
        .collect()
}

/// Column widths
pub fn widths(table: &Table) -> Vec<usize> {
    table.cols().iter().map(|c| c.width).collect()
}

/// Build an N x M table (no separator) with cells `r{row}c{col}`
pub fn make_grid(rows: usize, cols: usize, dialect: Dialect) -> String {
    let mut text = String::new();
    for r in 0..rows {
        text.push('|');
        for c in 0..cols {
            text.push_str(&format!(" r{}c{} |", r, c));
        }
        text.push('\n');
    }
    let table = parse(&text, dialect);
    render(&table, dialect)
}
