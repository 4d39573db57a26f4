//! tablemode - align and navigate plain-text tables

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use tablemode::cli::{format_position, to_position, CliArgs, CliCommand};
use tablemode::commands::{
    create_table, format_document, format_under_cursor, next_cell, next_row, previous_cell,
    TableEdit,
};
use tablemode::config::TableModeConfig;
use tablemode::util::read_document;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    tablemode::tracing::init(args.verbose);
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => TableModeConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TableModeConfig::load(),
    };
    let dialect = args.dialect_for(args.command.file(), &config);
    tracing::debug!(%dialect, command = ?args.command, "Starting");

    match &args.command {
        CliCommand::Format {
            file,
            line,
            in_place,
        } => {
            let text = read_document(file)?;
            let lines: Vec<&str> = text.lines().collect();
            let pos = to_position(*line, 1);
            let Some(edit) = format_under_cursor(&lines, pos, dialect) else {
                bail!("line {} of {} is not inside a table", line, file.display());
            };

            emit(file, &joined(edit.apply(&lines), &text), *in_place)?;
        }
        CliCommand::FormatAll { file, in_place } => {
            let text = read_document(file)?;
            emit(file, &format_document(&text, dialect), *in_place)?;
        }
        CliCommand::Create { rows, cols } => {
            println!("{}", create_table(*rows, *cols, dialect, ""));
        }
        CliCommand::NextCell {
            file,
            line,
            column,
            in_place,
        } => {
            let text = read_document(file)?;
            let lines: Vec<&str> = text.lines().collect();
            let pos = to_position(*line, *column);
            let edit = next_cell(&lines, pos, dialect, config.command_options());
            return finish_navigation(file, &text, edit, *in_place);
        }
        CliCommand::PrevCell {
            file,
            line,
            column,
            in_place,
        } => {
            let text = read_document(file)?;
            let lines: Vec<&str> = text.lines().collect();
            let pos = to_position(*line, *column);
            let edit = previous_cell(&lines, pos, dialect);
            return finish_navigation(file, &text, edit, *in_place);
        }
        CliCommand::NextRow {
            file,
            line,
            column,
            in_place,
        } => {
            let text = read_document(file)?;
            let lines: Vec<&str> = text.lines().collect();
            let pos = to_position(*line, *column);
            let edit = next_row(&lines, pos, dialect, config.command_options());
            return finish_navigation(file, &text, edit, *in_place);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print the destination cell as `line:column`, writing the realigned
/// document back first when `in_place` is set. Exit status 1 when there is
/// no destination.
fn finish_navigation(
    file: &Path,
    text: &str,
    edit: Option<TableEdit>,
    in_place: bool,
) -> Result<ExitCode> {
    let Some(edit) = edit else {
        return Ok(ExitCode::from(1));
    };
    let Some(cursor) = edit.cursor else {
        return Ok(ExitCode::from(1));
    };

    if in_place {
        let lines: Vec<&str> = text.lines().collect();
        emit(file, &joined(edit.apply(&lines), text), true)?;
    }
    println!("{}", format_position(cursor));
    Ok(ExitCode::SUCCESS)
}

/// Join edited lines, keeping the original trailing newline
fn joined(lines: Vec<String>, original: &str) -> String {
    let mut output = lines.join("\n");
    if original.ends_with('\n') {
        output.push('\n');
    }
    output
}

fn emit(file: &Path, output: &str, in_place: bool) -> Result<()> {
    if in_place {
        std::fs::write(file, output)
            .with_context(|| format!("Failed to write {}", file.display()))?;
        tracing::info!("Wrote {}", file.display());
    } else {
        print!("{}", output);
    }
    Ok(())
}
