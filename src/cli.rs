//! Command-line argument parsing
//!
//! Supports:
//! - Realigning one table or every table in a document
//! - Creating an empty table
//! - Moving to the next/previous cell or the next row from a cursor position

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};

use crate::config::TableModeConfig;
use crate::table::{Dialect, Position};

/// Align and navigate plain-text Markdown and Org tables
#[derive(Parser, Debug)]
#[command(name = "tablemode", version, about = "Align and navigate plain-text tables")]
pub struct CliArgs {
    /// Table dialect: markdown or org (default: file extension, then config)
    #[arg(short, long, global = true, value_name = "DIALECT")]
    pub dialect: Option<Dialect>,

    /// Config file to use instead of ~/.config/tablemode/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More console logging (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Realign the table containing a line
    Format {
        /// Document to edit
        file: PathBuf,
        /// 1-based line inside the table
        #[arg(long, value_name = "N")]
        line: usize,
        /// Write the result back instead of printing it
        #[arg(short, long)]
        in_place: bool,
    },
    /// Realign every table in a document
    FormatAll {
        /// Document to edit
        file: PathBuf,
        /// Write the result back instead of printing it
        #[arg(short, long)]
        in_place: bool,
    },
    /// Print a new empty table
    Create {
        /// Number of rows including the header
        #[arg(long, default_value_t = 2)]
        rows: usize,
        /// Number of columns
        #[arg(long, default_value_t = 2)]
        cols: usize,
    },
    /// Move to the next cell, printing its 1-based line:column
    NextCell {
        file: PathBuf,
        #[arg(long, value_name = "N")]
        line: usize,
        #[arg(long, value_name = "N", default_value_t = 1)]
        column: usize,
        /// Write the realigned table (and any appended row) back
        #[arg(short, long)]
        in_place: bool,
    },
    /// Move to the previous cell, printing its 1-based line:column
    PrevCell {
        file: PathBuf,
        #[arg(long, value_name = "N")]
        line: usize,
        #[arg(long, value_name = "N", default_value_t = 1)]
        column: usize,
        #[arg(short, long)]
        in_place: bool,
    },
    /// Move to the same column of the next row, printing its 1-based line:column
    NextRow {
        file: PathBuf,
        #[arg(long, value_name = "N")]
        line: usize,
        #[arg(long, value_name = "N", default_value_t = 1)]
        column: usize,
        /// Write the realigned table (and any appended row) back
        #[arg(short, long)]
        in_place: bool,
    },
}

impl CliArgs {
    /// Dialect for a document: explicit flag, then file extension, then config
    pub fn dialect_for(&self, file: Option<&Path>, config: &TableModeConfig) -> Dialect {
        self.dialect
            .or_else(|| {
                file.and_then(|p| p.extension())
                    .and_then(|e| e.to_str())
                    .and_then(Dialect::from_extension)
            })
            .unwrap_or(config.dialect)
    }
}

impl CliCommand {
    /// Document the command operates on, if any
    pub fn file(&self) -> Option<&Path> {
        match self {
            CliCommand::Format { file, .. }
            | CliCommand::FormatAll { file, .. }
            | CliCommand::NextCell { file, .. }
            | CliCommand::PrevCell { file, .. }
            | CliCommand::NextRow { file, .. } => Some(file),
            CliCommand::Create { .. } => None,
        }
    }
}

/// Convert a 1-based user position to a 0-based document position
pub fn to_position(line: usize, column: usize) -> Position {
    Position::new(line.saturating_sub(1), column.saturating_sub(1))
}

/// Convert a 0-based document position to 1-based `line:column`
pub fn format_position(pos: Position) -> String {
    format!("{}:{}", pos.line + 1, pos.character + 1)
}
