//! Command registry.
//!
//! A closed table mapping command names to their behavior. Resolution is
//! total: any input yields either a command's output or a not-found notice.

mod content;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::output::Output;

pub use content::{farewell, not_found, welcome};

/// Inputs available to a command while it renders.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Instant the command runs at
    pub now: DateTime<Utc>,
    /// All registered commands, in declaration order
    pub commands: &'a [CommandDefinition],
}

/// Renders a pure command's output.
pub type Render = fn(&RenderContext<'_>) -> Output;

/// What running a command does.
#[derive(Clone, Copy)]
pub enum Behavior {
    /// Produces output and nothing else.
    Pure(Render),
    /// Empties the transcript.
    Clearing,
    /// Appends a farewell and schedules the window close.
    Exiting,
}

impl std::fmt::Debug for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pure(_) => f.write_str("Pure"),
            Self::Clearing => f.write_str("Clearing"),
            Self::Exiting => f.write_str("Exiting"),
        }
    }
}

/// A registered command.
#[derive(Debug, Clone, Copy)]
pub struct CommandDefinition {
    /// Lowercase name, unique within the registry
    pub name: &'static str,
    /// One-line description shown by `help`
    pub description: &'static str,
    pub behavior: Behavior,
}

impl CommandDefinition {
    pub const fn new(name: &'static str, description: &'static str, behavior: Behavior) -> Self {
        Self {
            name,
            description,
            behavior,
        }
    }
}

/// Result of resolving raw input against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A pure command rendered its output.
    Output { name: &'static str, output: Output },
    /// No command matched; carries the not-found notice.
    NotFound(Output),
    /// The `clear` command.
    Clear,
    /// The `exit` command, with its farewell.
    Exit(Output),
}

impl Resolution {
    /// Whether the input matched a registered command.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

/// Normalize raw input into a lookup key: trimmed and lowercased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Fixed table of commands.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandDefinition>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    /// Create a registry from definitions.
    ///
    /// Later definitions with a name already present are ignored.
    pub fn new(definitions: impl IntoIterator<Item = CommandDefinition>) -> Self {
        let mut commands = Vec::new();
        let mut index = HashMap::new();
        for def in definitions {
            if index.contains_key(def.name) {
                continue;
            }
            index.insert(def.name, commands.len());
            commands.push(def);
        }
        Self { commands, index }
    }

    /// The portfolio vocabulary.
    pub fn builtin() -> Self {
        Self::new(content::definitions())
    }

    /// Look up a command by name (case-insensitive, trimmed).
    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.index
            .get(normalize(name).as_str())
            .map(|&idx| &self.commands[idx])
    }

    /// Check if a command exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate commands in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.commands.iter()
    }

    /// Command names in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Resolve raw input at the given instant.
    ///
    /// The whole trimmed input must match a name; there is no argument
    /// parsing. The not-found notice quotes `raw` as typed.
    pub fn resolve(&self, raw: &str, now: DateTime<Utc>) -> Resolution {
        let Some(def) = self.get(raw) else {
            debug!(input = %raw, "Command not found");
            return Resolution::NotFound(not_found(raw));
        };

        debug!(command = def.name, behavior = ?def.behavior, "Resolved command");
        match def.behavior {
            Behavior::Pure(render) => {
                let ctx = RenderContext {
                    now,
                    commands: &self.commands,
                };
                Resolution::Output {
                    name: def.name,
                    output: render(&ctx),
                }
            }
            Behavior::Clearing => Resolution::Clear,
            Behavior::Exiting => Resolution::Exit(farewell()),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
