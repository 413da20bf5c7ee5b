//! Command output rendering

mod table;

use std::io::IsTerminal;

use anyhow::Result;
use crossterm::style::Color;
use dnsctl_core::{ImportAction, ImportReport, Table};

use crate::cli::OutputFormat;

/// What a command produced.
#[derive(Debug)]
pub enum CommandOutput {
    Table(Table),
    Text(String),
    Report(ImportReport),
    Nothing,
}

/// Render `output` for stdout.
pub fn render(output: &CommandOutput, format: OutputFormat, color: bool) -> Result<String> {
    let text = match (output, format) {
        (CommandOutput::Nothing, _) => String::new(),
        (CommandOutput::Text(text), OutputFormat::Table) => text.clone(),
        (CommandOutput::Text(text), OutputFormat::Json) => serde_json::to_string_pretty(text)?,
        (CommandOutput::Table(table), OutputFormat::Table) => table::render(table, |_| None),
        (CommandOutput::Table(table), OutputFormat::Json) => {
            serde_json::to_string_pretty(&table.to_json_rows())?
        }
        (CommandOutput::Report(report), OutputFormat::Table) => {
            table::render(&report.to_table(), |index| {
                color
                    .then(|| report.rows.get(index).and_then(|row| action_color(row.action)))
                    .flatten()
            })
        }
        (CommandOutput::Report(report), OutputFormat::Json) => {
            serde_json::to_string_pretty(report)?
        }
    };
    Ok(text)
}

/// Write `output` to stdout.
pub fn print(output: &CommandOutput, format: OutputFormat) -> Result<()> {
    let text = render(output, format, std::io::stdout().is_terminal())?;
    if text.is_empty() {
        return Ok(());
    }
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
    Ok(())
}

fn action_color(action: ImportAction) -> Option<Color> {
    match action {
        ImportAction::Found | ImportAction::Created => Some(Color::Green),
        ImportAction::Parsed | ImportAction::DryRun => Some(Color::Yellow),
        ImportAction::Exception | ImportAction::Unknown => Some(Color::Red),
        ImportAction::Skipped => None,
    }
}
