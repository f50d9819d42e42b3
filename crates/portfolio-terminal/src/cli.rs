//! Command-line interface definition using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::theme::Theme;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-10-16)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Kane's portfolio terminal
#[derive(Parser, Debug)]
#[command(name = "portfolio-terminal")]
#[command(author, version = version_string(), about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: ~/.portfolio-terminal/config.json)
    #[arg(short, long, env = "PORTFOLIO_TERMINAL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Page options when no subcommand is given
    #[command(flatten)]
    pub page: PageArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options for the full-screen page.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageArgs {
    /// Start with the window closed
    #[arg(long)]
    pub closed: bool,

    /// Color palette
    #[arg(long, value_enum, default_value = "dark", env = "PORTFOLIO_TERMINAL_THEME")]
    pub theme: Theme,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Full-screen page with the terminal window (default)
    Tui(PageArgs),

    /// Line-oriented terminal session
    Repl,

    /// Run one command and print its output
    Exec {
        /// Command text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,
    },

    /// List available commands
    Commands,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Whether the selected command takes over the screen.
    pub fn is_fullscreen(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui(_)))
    }
}
