//! Handlers for the non-interactive subcommands.

use std::io::{self, IsTerminal, Write};

use portfolio_core::{CommandRegistry, Session, SubmitOutcome, TerminalConfig};
use tracing::info;

use crate::render;

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Run one command through a fresh session and print what it appended.
pub fn cmd_exec(words: &[String], config: &TerminalConfig) -> Result<()> {
    let line = words.join(" ");
    let color = io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();
    exec_to(&mut stdout, &line, config, color)
}

fn exec_to(out: &mut impl Write, line: &str, config: &TerminalConfig, color: bool) -> Result<()> {
    let mut session = Session::new(CommandRegistry::builtin(), config);
    let outcome = session.submit(line);
    info!(command = %line, ?outcome, "Executed command");

    match outcome {
        SubmitOutcome::Ignored | SubmitOutcome::Cleared => {}
        SubmitOutcome::Appended { .. } | SubmitOutcome::Exiting { .. } => {
            if let Some(entry) = session.transcript().last() {
                if let Some(output) = &entry.output {
                    writeln!(out, "{}", render::render_output(output, color))?;
                }
            }
        }
    }
    Ok(())
}

/// Print the vocabulary with descriptions.
pub fn cmd_commands() -> Result<()> {
    let mut stdout = io::stdout().lock();
    list_to(&mut stdout, &CommandRegistry::builtin())
}

fn list_to(out: &mut impl Write, registry: &CommandRegistry) -> Result<()> {
    let width = registry.iter().map(|c| c.name.len()).max().unwrap_or(0);
    for def in registry.iter() {
        writeln!(out, "  {:<width$}  {}", def.name, def.description, width = width)?;
    }
    Ok(())
}
