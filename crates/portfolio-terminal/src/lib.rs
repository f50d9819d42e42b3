//! Portfolio terminal hosts.
//!
//! This crate mounts the terminal from `portfolio-core` in three ways: a
//! full-screen TUI page, a line REPL and one-shot `exec`.

pub mod cli;
pub mod commands;
pub mod render;
pub mod repl;
pub mod theme;
pub mod tui;
