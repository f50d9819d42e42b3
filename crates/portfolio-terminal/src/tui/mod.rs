//! Terminal User Interface for the portfolio.
//!
//! A full-screen page hosting the terminal window:
//! - Page header and the toggle affordance (F1)
//! - Window title bar with minimize (F2) and close (Esc) controls
//! - Scrollable transcript that follows the newest entry
//! - Input line with history recall (Up/Down)

mod app;
mod events;
mod ui;

pub use app::App;
pub use events::run;
