//! Line-oriented terminal session over rustyline.
//!
//! Each line read goes through the same session the TUI uses. The editor's
//! own history only ever holds what the session recorded, so arrow recall
//! matches the session's rules.

use std::io::{self, IsTerminal};

use chrono::Utc;
use portfolio_core::{CommandRegistry, Session, SubmitOutcome, TerminalConfig};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper, Result as RlResult};
use tracing::debug;

use crate::render;

/// Tab completion over command names.
struct CommandCompleter {
    names: Vec<&'static str>,
}

impl CommandCompleter {
    fn candidates(&self, prefix: &str) -> Vec<Pair> {
        let prefix = prefix.trim_start().to_lowercase();
        self.names
            .iter()
            .filter(|name| name.starts_with(&prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> RlResult<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix.len() - prefix.trim_start().len();
        Ok((start, self.candidates(prefix)))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

/// REPL state
pub struct Repl {
    editor: Editor<CommandCompleter, DefaultHistory>,
    session: Session,
    prompt: String,
    color: bool,
    /// Session history entries already mirrored into the editor
    mirrored: usize,
}

impl Repl {
    /// Creates a new REPL with an opened session.
    pub fn new(config: &TerminalConfig) -> RlResult<Self> {
        let rl_config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .auto_add_history(false)
            .build();
        let registry = CommandRegistry::builtin();
        let mut editor = Editor::with_config(rl_config)?;
        editor.set_helper(Some(CommandCompleter {
            names: registry.names(),
        }));

        let mut session = Session::new(registry, config);
        session.open();

        Ok(Self {
            editor,
            session,
            prompt: format!("{} ", config.prompt),
            color: io::stdout().is_terminal(),
            mirrored: 0,
        })
    }

    /// Runs the REPL loop until `exit` closes the session or input ends.
    pub fn run(&mut self) -> RlResult<()> {
        for entry in self.session.transcript() {
            println!("{}", render::render_entry(entry, "", self.color));
        }
        println!();

        loop {
            match self.editor.readline(&self.prompt) {
                Ok(line) => {
                    let outcome = self.session.submit(&line);
                    debug!(?outcome, "Submitted line");
                    self.mirror_history()?;

                    match outcome {
                        SubmitOutcome::Ignored => {}
                        SubmitOutcome::Cleared => {
                            // Same as Ctrl+L
                            self.editor.clear_screen()?;
                        }
                        SubmitOutcome::Appended { .. } => self.print_last(),
                        SubmitOutcome::Exiting { due } => {
                            self.print_last();
                            if let Ok(wait) = (due - Utc::now()).to_std() {
                                std::thread::sleep(wait);
                            }
                            self.session.tick();
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    /// Print the newest transcript entry's output.
    fn print_last(&self) {
        if let Some(output) = self.session.transcript().last().and_then(|e| e.output.as_ref()) {
            println!("{}\n", render::render_output(output, self.color));
        }
    }

    /// Copy newly recorded session history into the editor.
    fn mirror_history(&mut self) -> RlResult<()> {
        let history = self.session.command_history();
        for entry in &history[self.mirrored..] {
            self.editor.add_history_entry(entry.as_str())?;
        }
        self.mirrored = history.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completer() -> CommandCompleter {
        CommandCompleter {
            names: CommandRegistry::builtin().names(),
        }
    }

    fn names(pairs: Vec<Pair>) -> Vec<String> {
        pairs.into_iter().map(|p| p.replacement).collect()
    }

    #[test]
    fn test_complete_prefix() {
        let c = completer();
        assert_eq!(names(c.candidates("e")), ["echos", "exit"]);
        assert_eq!(names(c.candidates("  WH")), ["whoami"]);
    }

    #[test]
    fn test_complete_empty_lists_all() {
        assert_eq!(completer().candidates("").len(), 11);
    }

    #[test]
    fn test_complete_no_match() {
        assert!(completer().candidates("zz").is_empty());
    }
}
