//! Event handling for the TUI.
//!
//! Setting up the terminal mounts the page; restoring it unmounts.

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use portfolio_core::TerminalConfig;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use super::app::App;
use super::ui;
use crate::theme::Theme;

/// Result type for TUI operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize the terminal for TUI mode.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Register SIGTERM/SIGHUP so the loop can exit and restore the terminal.
fn setup_signal_handler() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&flag))?;
    signal_hook::flag::register(signal_hook::consts::SIGHUP, Arc::clone(&flag))?;
    Ok(flag)
}

/// Run the TUI event loop.
pub fn run(config: TerminalConfig, theme: Theme, start_closed: bool) -> Result<()> {
    let stop_flag = match setup_signal_handler() {
        Ok(flag) => Some(flag),
        Err(e) => {
            warn!("Failed to setup signal handler: {}", e);
            None
        }
    };

    let tick_rate = config.tick_rate();
    let mut terminal = setup_terminal()?;
    info!("Page mounted");

    let mut app = App::new(config, theme, start_closed);
    let result = run_loop(&mut terminal, &mut app, tick_rate, stop_flag.as_ref());

    restore_terminal(&mut terminal)?;
    info!("Page unmounted");

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick_rate: std::time::Duration,
    stop_flag: Option<&Arc<AtomicBool>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        app.on_tick();

        if stop_flag.is_some_and(|f| f.load(Ordering::Relaxed)) {
            info!("Stop signal received");
            app.should_quit = true;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
