//! Plain-text table mode
//!
//! Structural editing for tables embedded in prose documents, in two dialects:
//! pipe-delimited Markdown tables and Org-mode tables.
//!
//! # Architecture
//!
//! Every edit re-parses the table text into a fresh [`Table`], mutates it and
//! renders it back. Nothing is retained between edits.
//!
//! ```text
//! document lines
//! └── TableLocator      (find the table block around the cursor)
//!     └── TableParser   (block -> Table)
//!         ├── Table     (mutate: rows, columns, cells)
//!         ├── TableStringifier (Table -> aligned text)
//!         └── TableNavigator   (Table + line text -> cursor positions)
//! ```

mod dialect;
mod locator;
mod model;
mod navigation;
mod parser;
mod render;

pub use dialect::{Dialect, UnknownDialect};
pub use locator::{MarkdownLocator, OrgLocator, TableLocator, TableRegion};
pub use model::{Alignment, Column, Row, RowKind, Table, MIN_SEPARATOR_WIDTH};
pub use navigation::{CellAddress, JumpPosition, Position, TableNavigator};
pub use parser::{split_cells, MarkdownParser, OrgParser, TableParser, MARKER};
pub use render::{MarkdownStringifier, OrgStringifier, TableStringifier, INTERSECTION, RULE};
