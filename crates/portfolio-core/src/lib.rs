//! Portfolio Core - the in-page terminal behind the portfolio.
//!
//! Visitors type commands from a fixed vocabulary and get canned responses.
//!
//! - **registry**: Closed table of commands and their output
//! - **session**: Window lifecycle, transcript, recall history, deferred close
//! - **input**: Edit buffer and key-event dispatch
//! - **widget**: Lazily created session plus input, for hosts to mount
//! - **output**: Styled output model shared by all hosts
//! - **config**: State directory, config file and environment overrides
//! - **clock**: Time source (wall clock or manual for tests)

pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod registry;
pub mod session;
pub mod widget;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ClosePolicy, TerminalConfig};
pub use error::{ConfigError, Result};
pub use input::{InputController, InputEvent};
pub use output::{Line, Output, Span, Tone};
pub use registry::{Behavior, CommandDefinition, CommandRegistry, RenderContext, Resolution};
pub use session::{PendingClose, Session, SubmitOutcome, TranscriptEntry, WindowState};
pub use widget::TerminalWidget;
