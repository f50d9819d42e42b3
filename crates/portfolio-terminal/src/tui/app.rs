//! TUI application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use portfolio_core::{InputEvent, TerminalConfig, TerminalWidget, WindowState};
use tracing::debug;

use super::ui;
use crate::theme::{Palette, Theme};

/// TUI application state.
pub struct App {
    /// The mounted terminal window
    pub widget: TerminalWidget,
    pub palette: Palette,
    /// Scroll offset for the transcript, in lines from the bottom (0 = newest)
    pub scroll_offset: usize,
    /// Transcript revision last scrolled to
    seen_revision: u64,
    /// Whether the host should exit
    pub should_quit: bool,
}

impl App {
    /// Create a new App. The window opens immediately unless `start_closed`.
    pub fn new(config: TerminalConfig, theme: Theme, start_closed: bool) -> Self {
        Self::with_widget(TerminalWidget::new(config), theme, start_closed)
    }

    pub fn with_widget(widget: TerminalWidget, theme: Theme, start_closed: bool) -> Self {
        let mut app = Self {
            widget,
            palette: theme.palette(),
            scroll_offset: 0,
            seen_revision: 0,
            should_quit: false,
        };
        if !start_closed {
            app.widget.open();
            app.follow_transcript();
        }
        app
    }

    pub fn state(&self) -> WindowState {
        self.widget.state()
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Toggle affordance
        if key.code == KeyCode::F(1) || (ctrl && key.code == KeyCode::Char('t')) {
            self.widget.open();
            self.follow_transcript();
            return;
        }

        match self.state() {
            WindowState::Closed => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            WindowState::Minimized => match key.code {
                KeyCode::F(2) => self.widget.toggle_minimize(),
                KeyCode::Esc => self.widget.close(),
                _ => {}
            },
            WindowState::Expanded => match key.code {
                KeyCode::F(2) => self.widget.toggle_minimize(),
                KeyCode::Esc => self.widget.close(),
                KeyCode::PageUp => self.scroll_page_up(10),
                KeyCode::PageDown => self.scroll_page_down(10),
                _ => {
                    if let Some(event) = input_event(key) {
                        let outcome = self.widget.handle(event);
                        if outcome.is_some() {
                            debug!(?outcome, "Submitted from TUI");
                        }
                    }
                }
            },
        }

        self.follow_transcript();
    }

    /// Advance timers; called once per loop iteration.
    pub fn on_tick(&mut self) {
        self.widget.tick();
    }

    /// Snap to the newest entry whenever the transcript changed.
    pub fn follow_transcript(&mut self) {
        if let Some(session) = self.widget.session() {
            if session.revision() != self.seen_revision {
                self.seen_revision = session.revision();
                self.scroll_to_bottom();
            }
        }
    }

    /// Number of rendered transcript lines.
    fn transcript_len(&self) -> usize {
        self.widget
            .session()
            .map_or(0, |s| ui::transcript_lines(s, &self.widget.config().prompt, &self.palette).len())
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll up by a page.
    pub fn scroll_page_up(&mut self, page_size: usize) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(page_size)
            .min(self.transcript_len().saturating_sub(1));
    }

    /// Scroll down by a page.
    pub fn scroll_page_down(&mut self, page_size: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(page_size);
    }
}

/// Map an editing key to an input event.
fn input_event(key: KeyEvent) -> Option<InputEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match key.code {
        KeyCode::Enter => InputEvent::Submit,
        KeyCode::Up => InputEvent::HistoryPrevious,
        KeyCode::Down => InputEvent::HistoryNext,
        KeyCode::Char('u') if ctrl => InputEvent::ClearLine,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(c) => InputEvent::Insert(c),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Delete => InputEvent::Delete,
        KeyCode::Left => InputEvent::CursorLeft,
        KeyCode::Right => InputEvent::CursorRight,
        KeyCode::Home => InputEvent::Home,
        KeyCode::End => InputEvent::End,
        _ => return None,
    };
    Some(event)
}
