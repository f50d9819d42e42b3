//! Portfolio terminal entry point.

use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use portfolio_core::config::{self, TerminalConfig};
use portfolio_terminal::cli::{Cli, Commands};
use portfolio_terminal::commands;
use portfolio_terminal::repl::Repl;
use portfolio_terminal::tui;

fn main() {
    // Load .env.local from the working and state directories
    config::load_env();

    let cli = Cli::parse();
    init_tracing(&cli);

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, or to a file while the TUI owns the screen.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));
    let builder = fmt().with_env_filter(filter).with_target(false);

    if !cli.is_fullscreen() {
        builder.with_writer(std::io::stderr).init();
        return;
    }

    let log_file = config::ensure_logs_dir().and_then(|dir| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("portfolio-terminal.log"))
    });
    match log_file {
        Ok(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
        Err(_) => builder.with_writer(std::io::sink).init(),
    }
}

fn run(cli: Cli) -> commands::Result<()> {
    let config = TerminalConfig::load(cli.config.as_deref())?;

    match cli.command {
        None => tui::run(config, cli.page.theme, cli.page.closed),
        Some(Commands::Tui(page)) => tui::run(config, page.theme, page.closed),
        Some(Commands::Repl) => {
            let mut repl = Repl::new(&config)?;
            repl.run()?;
            Ok(())
        }
        Some(Commands::Exec { command }) => commands::cmd_exec(&command, &config),
        Some(Commands::Commands) => commands::cmd_commands(),
    }
}
