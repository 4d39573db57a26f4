//! Cell navigation over a table snapshot
//!
//! [`TableNavigator`] indexes every cell of a [`Table`] as a [`JumpPosition`]:
//! a character range on a document line. Separator rows get a single
//! placeholder entry so that "skip the separator" and "is this the last cell"
//! are plain walks over one ordered list.
//!
//! Ranges come from the live line text when it is available, so navigation
//! stays exact while the text doesn't yet match the table's computed widths.
//! Cells the text doesn't reach are estimated from the column widths as if
//! the row were already rendered.
//!
//! The navigator is a snapshot: rebuild it after every edit.

use super::model::{RowKind, Table};
use super::parser::MARKER;
use crate::util::{char_count, display_width};

/// Cursor position in document coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// 0-based document line
    pub line: usize,
    /// 0-based character (code point) offset within the line
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Address of a cell in the table grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAddress {
    pub row: usize,
    pub col: usize,
}

impl CellAddress {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An addressable cursor range: one per data cell, one per separator row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpPosition {
    /// Document line
    pub line: usize,
    /// Table row
    pub row: usize,
    /// Table column (0 for separator placeholders)
    pub col: usize,
    /// Offset just after the opening marker
    pub cell_start: usize,
    /// Content start; where navigation puts the cursor
    pub start: usize,
    /// Offset just before the closing marker
    pub end: usize,
    pub is_separator: bool,
    /// Index of the previous entry
    pub prev: Option<usize>,
    /// Index of the next entry
    pub next: Option<usize>,
}

impl JumpPosition {
    /// Check if a character offset on this entry's line falls inside it.
    ///
    /// Separator placeholders span only the first character of their line.
    pub fn contains(&self, character: usize) -> bool {
        character >= self.cell_start && character <= self.end
    }

    /// Cursor target for this entry
    pub fn position(&self) -> Position {
        Position::new(self.line, self.start)
    }

    pub fn address(&self) -> CellAddress {
        CellAddress::new(self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Position index over a table snapshot
#[derive(Debug, Clone, Default)]
pub struct TableNavigator {
    positions: Vec<JumpPosition>,
}

impl TableNavigator {
    /// Build from the table alone, estimating ranges from column widths
    pub fn new(table: &Table) -> Self {
        Self::build(table, &[])
    }

    /// Build from the table and the current text of its lines.
    ///
    /// `lines[i]` is the text of row `i` (document line `table.start_line + i`).
    /// Missing lines fall back to estimates.
    pub fn with_lines(table: &Table, lines: &[&str]) -> Self {
        Self::build(table, lines)
    }

    fn build(table: &Table, lines: &[&str]) -> Self {
        let mut positions: Vec<JumpPosition> = Vec::new();

        for (row, descriptor) in table.rows().iter().enumerate() {
            let line = table.start_line + row;
            match descriptor.kind {
                RowKind::Separator => positions.push(JumpPosition {
                    line,
                    row,
                    col: 0,
                    cell_start: 0,
                    start: 0,
                    end: 1,
                    is_separator: true,
                    prev: None,
                    next: None,
                }),
                RowKind::Data => {
                    let text = lines.get(row).copied();
                    for (col, (cell_start, start, end)) in
                        cell_ranges(table, row, text).into_iter().enumerate()
                    {
                        positions.push(JumpPosition {
                            line,
                            row,
                            col,
                            cell_start,
                            start,
                            end,
                            is_separator: false,
                            prev: None,
                            next: None,
                        });
                    }
                }
            }
        }

        let count = positions.len();
        for (index, position) in positions.iter_mut().enumerate() {
            position.prev = index.checked_sub(1);
            position.next = (index + 1 < count).then_some(index + 1);
        }

        tracing::trace!(
            positions = count,
            start_line = table.start_line,
            "Built jump positions"
        );
        Self { positions }
    }

    /// All jump positions in row-major order
    pub fn positions(&self) -> &[JumpPosition] {
        &self.positions
    }

    /// Jump position containing `pos`, if any
    pub fn locate(&self, pos: Position) -> Option<&JumpPosition> {
        self.locate_index(pos).map(|i| &self.positions[i])
    }

    /// Cell under the cursor, resolving positions outside any cell range to
    /// the nearest cell on the same line
    pub fn cell_at(&self, pos: Position) -> Option<CellAddress> {
        let index = self.locate_index(pos).or_else(|| self.fallback_index(pos))?;
        let position = &self.positions[index];
        (!position.is_separator).then(|| position.address())
    }

    /// Cursor target of a cell
    pub fn position_of(&self, cell: CellAddress) -> Option<Position> {
        self.positions
            .iter()
            .find(|p| !p.is_separator && p.row == cell.row && p.col == cell.col)
            .map(JumpPosition::position)
    }

    /// Start of the next cell, skipping separators
    pub fn next_cell(&self, pos: Position) -> Option<Position> {
        self.step_from(pos, Direction::Forward)
    }

    /// Start of the previous cell, skipping separators
    pub fn previous_cell(&self, pos: Position) -> Option<Position> {
        self.step_from(pos, Direction::Backward)
    }

    /// Check if `pos` is in a data cell with no data cell after it
    pub fn is_last_cell(&self, pos: Position) -> bool {
        match self.locate_index(pos) {
            Some(index) if !self.positions[index].is_separator => {
                self.step(index, Direction::Forward).is_none()
            }
            _ => false,
        }
    }

    /// Check if `pos` is on a separator row
    pub fn is_on_separator_row(&self, pos: Position) -> bool {
        self.locate(pos).is_some_and(|p| p.is_separator)
    }

    /// Same column in the next data row
    pub fn next_row(&self, pos: Position) -> Option<Position> {
        let mut line = pos.line + 1;
        loop {
            let mut on_line = self.positions.iter().filter(move |p| p.line == line).peekable();
            let first = *on_line.peek()?;
            if first.is_separator {
                line += 1;
                continue;
            }

            let target = self
                .locate(Position::new(line, pos.character))
                .or_else(|| on_line.filter(|p| p.cell_start <= pos.character).last())
                .unwrap_or(first);
            return Some(target.position());
        }
    }

    fn locate_index(&self, pos: Position) -> Option<usize> {
        self.positions
            .iter()
            .position(|p| p.line == pos.line && p.contains(pos.character))
    }

    /// Nearest data cell on the cursor's line: the first one starting after
    /// the cursor, else the first one on the line
    fn fallback_index(&self, pos: Position) -> Option<usize> {
        let mut on_line = self
            .positions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.line == pos.line && !p.is_separator);
        let first = on_line.next()?;
        std::iter::once(first)
            .chain(on_line)
            .find(|(_, p)| p.start > pos.character)
            .or(Some(first))
            .map(|(i, _)| i)
    }

    fn step_from(&self, pos: Position, direction: Direction) -> Option<Position> {
        let target = match self.locate_index(pos) {
            Some(index) => self.step(index, direction)?,
            None => {
                let fallback = self.fallback_index(pos);
                tracing::trace!(?pos, ?fallback, "Cursor outside known cells");
                fallback?
            }
        };
        Some(self.positions[target].position())
    }

    fn step(&self, index: usize, direction: Direction) -> Option<usize> {
        let neighbour = |i: usize| match direction {
            Direction::Forward => self.positions[i].next,
            Direction::Backward => self.positions[i].prev,
        };

        let mut current = neighbour(index)?;
        while self.positions[current].is_separator {
            current = neighbour(current)?;
        }
        Some(current)
    }
}

/// `(cell_start, start, end)` for every column of a data row
fn cell_ranges(table: &Table, row: usize, text: Option<&str>) -> Vec<(usize, usize, usize)> {
    let chars: Vec<char> = text.map(|t| t.chars().collect()).unwrap_or_default();
    let markers: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == MARKER)
        .map(|(i, _)| i)
        .collect();

    let mut ranges = Vec::with_capacity(table.col_count());
    let mut next_open = 0;

    for col in 0..table.col_count() {
        let open = markers.get(col).copied().unwrap_or(next_open);
        let close = match markers.get(col + 1) {
            Some(&marker) => marker,
            // Last marker typed but not the closing one yet
            None if col + 1 == markers.len() => chars.len(),
            None => open + rendered_cell_chars(table, row, col) + 1,
        };

        let cell_start = open + 1;
        let start = match chars.get(cell_start) {
            Some(' ') if cell_start < close => cell_start + 1,
            Some(_) => cell_start,
            None => (cell_start + 1).min(close),
        };

        ranges.push((cell_start, start, close));
        next_open = close;
    }

    ranges
}

/// Characters between the markers of a rendered cell: padding spaces plus content
fn rendered_cell_chars(table: &Table, row: usize, col: usize) -> usize {
    let value = table.get_at(row, col);
    let width = table.cols()[col].width;
    char_count(value) + width.saturating_sub(display_width(value)) + 2
}
