//! The mountable terminal widget.
//!
//! Hosts own one `TerminalWidget`. The session behind it is created the first
//! time the window opens and lives until the widget is dropped; the input
//! controller's focus is kept in step with every window transition.

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::TerminalConfig;
use crate::input::{InputController, InputEvent};
use crate::registry::CommandRegistry;
use crate::session::{Session, SubmitOutcome, WindowState};

/// Terminal window plus its edit buffer.
pub struct TerminalWidget {
    config: TerminalConfig,
    /// Parts for the session, consumed on first open
    seed: Option<(CommandRegistry, Box<dyn Clock>)>,
    session: Option<Session>,
    input: InputController,
}

impl TerminalWidget {
    /// Create a widget with the builtin vocabulary on the wall clock.
    pub fn new(config: TerminalConfig) -> Self {
        Self::with_parts(config, CommandRegistry::builtin(), SystemClock)
    }

    pub fn with_parts(
        config: TerminalConfig,
        registry: CommandRegistry,
        clock: impl Clock + 'static,
    ) -> Self {
        let clock: Box<dyn Clock> = Box::new(clock);
        Self {
            config,
            seed: Some((registry, clock)),
            session: None,
            input: InputController::new(),
        }
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// The session, once the window has been opened at least once.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn state(&self) -> WindowState {
        self.session.as_ref().map_or(WindowState::Closed, Session::state)
    }

    /// Open the window, creating the session on first use.
    pub fn open(&mut self) {
        let config = &self.config;
        let seed = &mut self.seed;
        let session = self.session.get_or_insert_with(|| {
            debug!("Creating terminal session");
            let (registry, clock) = seed.take().unwrap_or_else(|| {
                let clock: Box<dyn Clock> = Box::new(SystemClock);
                (CommandRegistry::builtin(), clock)
            });
            Session::with_clock(registry, config, clock)
        });
        session.open();
        self.input.sync_focus(session.state());
    }

    pub fn close(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.close();
            self.input.sync_focus(session.state());
        }
    }

    pub fn toggle_minimize(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.toggle_minimize();
            self.input.sync_focus(session.state());
        }
    }

    /// Route a key event to the input controller.
    pub fn handle(&mut self, event: InputEvent) -> Option<SubmitOutcome> {
        let session = self.session.as_mut()?;
        self.input.handle(session, event)
    }

    /// Advance timers. Returns true if a pending close fired.
    pub fn tick(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let closed = session.tick();
        if closed {
            self.input.sync_focus(session.state());
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::Duration;

    fn widget() -> (TerminalWidget, ManualClock) {
        let clock = ManualClock::default();
        let widget = TerminalWidget::with_parts(
            TerminalConfig::default(),
            CommandRegistry::builtin(),
            clock.clone(),
        );
        (widget, clock)
    }

    #[test]
    fn test_session_created_lazily() {
        let (mut w, _) = widget();
        assert!(w.session().is_none());
        assert_eq!(w.state(), WindowState::Closed);
        assert_eq!(w.handle(InputEvent::Insert('a')), None);
        w.close();
        w.toggle_minimize();
        assert!(!w.tick());
        assert!(w.session().is_none());

        w.open();
        assert_eq!(w.state(), WindowState::Expanded);
        assert!(w.input().is_focused());
    }

    #[test]
    fn test_focus_tracks_transitions() {
        let (mut w, _) = widget();
        w.open();
        w.toggle_minimize();
        assert!(!w.input().is_focused());
        w.toggle_minimize();
        assert!(w.input().is_focused());
        w.close();
        assert!(!w.input().is_focused());
        w.open();
        assert!(w.input().is_focused());
    }

    #[test]
    fn test_state_survives_close() {
        let (mut w, _) = widget();
        w.open();
        for c in "about".chars() {
            w.handle(InputEvent::Insert(c));
        }
        w.handle(InputEvent::Submit);
        w.close();
        w.open();

        let session = w.session().unwrap();
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.command_history(), ["about"]);
    }

    #[test]
    fn test_exit_closes_and_drops_focus() {
        let (mut w, clock) = widget();
        w.open();
        for c in "exit".chars() {
            w.handle(InputEvent::Insert(c));
        }
        let outcome = w.handle(InputEvent::Submit);
        assert!(matches!(outcome, Some(SubmitOutcome::Exiting { .. })));

        clock.advance(Duration::seconds(1));
        assert!(w.tick());
        assert_eq!(w.state(), WindowState::Closed);
        assert!(!w.input().is_focused());
    }
}
