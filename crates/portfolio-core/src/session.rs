//! Session state machine.
//!
//! Tracks window visibility, the transcript, recall history and the deferred
//! close scheduled by `exit`. All transcript mutation goes through the methods
//! here; views only read.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::{ClosePolicy, TerminalConfig};
use crate::output::Output;
use crate::registry::{self, CommandRegistry, Resolution};

/// Visibility of the terminal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Closed,
    /// Open with transcript and input visible
    Expanded,
    /// Open, collapsed to the title bar
    Minimized,
}

impl WindowState {
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// One transcript row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Raw text as typed; empty for system messages
    pub command: String,
    pub output: Option<Output>,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    /// Whether this entry was produced by the terminal rather than typed.
    pub fn is_system(&self) -> bool {
        self.command.is_empty()
    }
}

/// Close scheduled by `exit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClose {
    pub due: DateTime<Utc>,
}

/// What a call to [`Session::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank.
    Ignored,
    /// An entry was appended; `recognized` is false for the not-found notice.
    Appended { recognized: bool },
    /// The transcript was emptied.
    Cleared,
    /// The farewell was appended and the close scheduled.
    Exiting { due: DateTime<Utc> },
}

/// Runtime state of one terminal window.
pub struct Session {
    registry: CommandRegistry,
    clock: Box<dyn Clock>,
    close_delay: Duration,
    close_policy: ClosePolicy,
    record_unrecognized: bool,

    window: WindowState,
    transcript: Vec<TranscriptEntry>,
    command_history: Vec<String>,
    history_cursor: Option<usize>,
    pending_close: Option<PendingClose>,
    revision: u64,
}

impl Session {
    /// Create a closed session on the wall clock.
    pub fn new(registry: CommandRegistry, config: &TerminalConfig) -> Self {
        Self::with_clock(registry, config, SystemClock)
    }

    /// Create a closed session on a specific clock.
    pub fn with_clock(
        registry: CommandRegistry,
        config: &TerminalConfig,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            registry,
            clock: Box::new(clock),
            close_delay: config.close_delay(),
            close_policy: config.close_policy,
            record_unrecognized: config.record_unrecognized,
            window: WindowState::Closed,
            transcript: Vec::new(),
            command_history: Vec::new(),
            history_cursor: None,
            pending_close: None,
            revision: 0,
        }
    }

    // ==================== Accessors ====================

    pub fn state(&self) -> WindowState {
        self.window
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn is_minimized(&self) -> bool {
        self.window == WindowState::Minimized
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Normalized commands in submission order, without duplicates.
    pub fn command_history(&self) -> &[String] {
        &self.command_history
    }

    /// Recall position, `None` when not navigating.
    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn pending_close(&self) -> Option<PendingClose> {
        self.pending_close
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Counter bumped on every transcript mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ==================== Window transitions ====================

    /// Open the window. Inserts the welcome entry when the transcript is empty.
    pub fn open(&mut self) {
        if self.window.is_open() {
            return;
        }

        if self.close_policy == ClosePolicy::CancelOnReopen {
            if let Some(pending) = self.pending_close.take() {
                debug!(due = %pending.due, "Cancelled pending close on reopen");
            }
        }

        self.window = WindowState::Expanded;
        info!("Terminal opened");

        if self.transcript.is_empty() {
            self.push_entry(String::new(), registry::welcome());
        }
    }

    /// Close the window. Transcript and history are kept.
    pub fn close(&mut self) {
        if self.window.is_open() {
            self.window = WindowState::Closed;
            info!("Terminal closed");
        }
    }

    /// Switch between expanded and minimized. No-op while closed.
    pub fn toggle_minimize(&mut self) {
        self.window = match self.window {
            WindowState::Expanded => WindowState::Minimized,
            WindowState::Minimized => WindowState::Expanded,
            WindowState::Closed => return,
        };
        debug!(state = ?self.window, "Toggled minimize");
    }

    /// Fire the pending close if its deadline has passed.
    ///
    /// Returns true if the window transitioned to closed.
    pub fn tick(&mut self) -> bool {
        let Some(pending) = self.pending_close else {
            return false;
        };
        if self.clock.now() < pending.due {
            return false;
        }

        self.pending_close = None;
        let was_open = self.window.is_open();
        self.close();
        was_open
    }

    // ==================== Commands ====================

    /// Run raw input through the registry.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        if raw.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }
        self.history_cursor = None;

        let now = self.clock.now();
        let (output, recognized) = match self.registry.resolve(raw, now) {
            Resolution::Clear => {
                self.transcript.clear();
                self.revision += 1;
                debug!("Transcript cleared");
                return SubmitOutcome::Cleared;
            }
            Resolution::Exit(farewell) => {
                self.push_entry(raw.to_string(), farewell);
                let due = now
                    .checked_add_signed(self.close_delay)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC);
                self.pending_close = Some(PendingClose { due });
                debug!(%due, "Scheduled close");
                return SubmitOutcome::Exiting { due };
            }
            Resolution::Output { output, .. } => (output, true),
            Resolution::NotFound(output) => (output, false),
        };

        self.push_entry(raw.to_string(), output);
        if recognized || self.record_unrecognized {
            self.remember(raw);
        }
        SubmitOutcome::Appended { recognized }
    }

    /// Step back through history. Returns the text for the edit buffer, or
    /// `None` when history is empty.
    pub fn recall_previous(&mut self) -> Option<String> {
        let last = self.command_history.len().checked_sub(1)?;
        let idx = match self.history_cursor {
            None => last,
            Some(idx) => idx.saturating_sub(1),
        };
        self.history_cursor = Some(idx);
        Some(self.command_history[idx].clone())
    }

    /// Step forward through history. Returns `None` when not navigating, an
    /// empty string when stepping past the newest entry.
    pub fn recall_next(&mut self) -> Option<String> {
        let idx = self.history_cursor? + 1;
        if idx >= self.command_history.len() {
            self.history_cursor = None;
            return Some(String::new());
        }
        self.history_cursor = Some(idx);
        Some(self.command_history[idx].clone())
    }

    fn remember(&mut self, raw: &str) {
        let normalized = registry::normalize(raw);
        if !normalized.is_empty() && !self.command_history.contains(&normalized) {
            self.command_history.push(normalized);
        }
    }

    fn push_entry(&mut self, command: String, output: Output) {
        self.transcript.push(TranscriptEntry {
            command,
            output: Some(output),
            timestamp: self.clock.now(),
        });
        self.revision += 1;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("window", &self.window)
            .field("transcript_len", &self.transcript.len())
            .field("command_history", &self.command_history)
            .field("history_cursor", &self.history_cursor)
            .field("pending_close", &self.pending_close)
            .finish()
    }
}
