//! tablemode - structural editing for plain-text tables
//!
//! This crate parses Markdown and Org-mode tables embedded in prose into a
//! row/column model, realigns them (honoring double-width characters) and maps
//! cursor offsets to cells for cell-to-cell navigation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod table;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use commands::{CommandOptions, TableEdit};
pub use config::TableModeConfig;
pub use table::{Dialect, Position, Table, TableNavigator};
