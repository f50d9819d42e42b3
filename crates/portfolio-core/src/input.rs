//! Input controller.
//!
//! Owns the edit buffer, maps key events onto session operations and tracks
//! whether the buffer holds focus.

use tracing::trace;

use crate::session::{Session, SubmitOutcome, WindowState};

/// Keyboard-level events the controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Submit,
    HistoryPrevious,
    HistoryNext,
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    Home,
    End,
    /// Discard the whole buffer
    ClearLine,
}

/// Edit buffer with a cursor.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    buffer: String,
    cursor: usize,
    focused: bool,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor as a byte offset into the buffer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor as a count of chars before it.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Take focus exactly when the window is expanded.
    pub fn sync_focus(&mut self, state: WindowState) {
        self.focused = state == WindowState::Expanded;
    }

    /// Apply an event. Returns the submit outcome when the event submitted.
    ///
    /// Events are ignored while unfocused.
    pub fn handle(&mut self, session: &mut Session, event: InputEvent) -> Option<SubmitOutcome> {
        if !self.focused {
            trace!(?event, "Ignoring input while unfocused");
            return None;
        }

        match event {
            InputEvent::Submit => return self.submit(session),
            InputEvent::HistoryPrevious => {
                if let Some(text) = session.recall_previous() {
                    self.replace(text);
                }
            }
            InputEvent::HistoryNext => {
                if let Some(text) = session.recall_next() {
                    self.replace(text);
                }
            }
            InputEvent::Insert(c) => self.enter_char(c),
            InputEvent::Backspace => self.delete_char(),
            InputEvent::Delete => self.delete_char_forward(),
            InputEvent::CursorLeft => self.move_cursor_left(),
            InputEvent::CursorRight => self.move_cursor_right(),
            InputEvent::Home => self.cursor = 0,
            InputEvent::End => self.cursor = self.buffer.len(),
            InputEvent::ClearLine => self.clear(),
        }
        None
    }

    fn submit(&mut self, session: &mut Session) -> Option<SubmitOutcome> {
        if self.buffer.trim().is_empty() {
            return None;
        }
        let input = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        Some(session.submit(&input))
    }

    /// Replace the buffer and move the cursor to the end.
    fn replace(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.buffer.len();
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn enter_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the char before the cursor.
    fn delete_char(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the char under the cursor.
    fn delete_char_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    fn move_cursor_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::TerminalConfig;
    use crate::registry::CommandRegistry;

    fn open_session() -> Session {
        let mut session = Session::with_clock(
            CommandRegistry::builtin(),
            &TerminalConfig::default(),
            ManualClock::default(),
        );
        session.open();
        session
    }

    fn focused() -> InputController {
        let mut input = InputController::new();
        input.sync_focus(WindowState::Expanded);
        input
    }

    fn type_str(input: &mut InputController, session: &mut Session, text: &str) {
        for c in text.chars() {
            input.handle(session, InputEvent::Insert(c));
        }
    }

    #[test]
    fn test_focus_follows_window_state() {
        let mut input = InputController::new();
        assert!(!input.is_focused());
        input.sync_focus(WindowState::Expanded);
        assert!(input.is_focused());
        input.sync_focus(WindowState::Minimized);
        assert!(!input.is_focused());
        input.sync_focus(WindowState::Closed);
        assert!(!input.is_focused());
    }

    #[test]
    fn test_unfocused_ignores_events() {
        let mut session = open_session();
        let mut input = InputController::new();
        type_str(&mut input, &mut session, "help");
        assert_eq!(input.buffer(), "");
        assert_eq!(input.handle(&mut session, InputEvent::Submit), None);
    }

    #[test]
    fn test_submit_clears_buffer() {
        let mut session = open_session();
        let mut input = focused();
        type_str(&mut input, &mut session, "about");
        let outcome = input.handle(&mut session, InputEvent::Submit);
        assert_eq!(outcome, Some(SubmitOutcome::Appended { recognized: true }));
        assert_eq!(input.buffer(), "");
        assert_eq!(input.cursor(), 0);
        assert_eq!(session.transcript().len(), 2);
    }

    #[test]
    fn test_blank_submit_keeps_buffer() {
        let mut session = open_session();
        let mut input = focused();
        type_str(&mut input, &mut session, "   ");
        assert_eq!(input.handle(&mut session, InputEvent::Submit), None);
        assert_eq!(input.buffer(), "   ");
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_history_keys_replace_buffer() {
        let mut session = open_session();
        let mut input = focused();
        for cmd in ["whoami", "help"] {
            type_str(&mut input, &mut session, cmd);
            input.handle(&mut session, InputEvent::Submit);
        }

        type_str(&mut input, &mut session, "draft");
        input.handle(&mut session, InputEvent::HistoryPrevious);
        assert_eq!(input.buffer(), "help");
        assert_eq!(input.cursor(), 4);
        input.handle(&mut session, InputEvent::HistoryPrevious);
        assert_eq!(input.buffer(), "whoami");
        input.handle(&mut session, InputEvent::HistoryNext);
        assert_eq!(input.buffer(), "help");
        input.handle(&mut session, InputEvent::HistoryNext);
        assert_eq!(input.buffer(), "");

        type_str(&mut input, &mut session, "x");
        input.handle(&mut session, InputEvent::HistoryNext);
        assert_eq!(input.buffer(), "x");
    }

    #[test]
    fn test_history_previous_with_empty_history_keeps_buffer() {
        let mut session = open_session();
        let mut input = focused();
        type_str(&mut input, &mut session, "ab");
        input.handle(&mut session, InputEvent::HistoryPrevious);
        assert_eq!(input.buffer(), "ab");
    }

    #[test]
    fn test_editing_multibyte() {
        let mut session = open_session();
        let mut input = focused();
        type_str(&mut input, &mut session, "h→p");
        assert_eq!(input.cursor_column(), 3);

        input.handle(&mut session, InputEvent::CursorLeft);
        input.handle(&mut session, InputEvent::Backspace);
        assert_eq!(input.buffer(), "hp");
        assert_eq!(input.cursor_column(), 1);

        input.handle(&mut session, InputEvent::Insert('é'));
        assert_eq!(input.buffer(), "hép");
        input.handle(&mut session, InputEvent::Home);
        input.handle(&mut session, InputEvent::Delete);
        assert_eq!(input.buffer(), "ép");
        input.handle(&mut session, InputEvent::CursorRight);
        assert_eq!(input.cursor_column(), 1);
        input.handle(&mut session, InputEvent::End);
        input.handle(&mut session, InputEvent::CursorRight);
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut session = open_session();
        let mut input = focused();
        input.handle(&mut session, InputEvent::Backspace);
        input.handle(&mut session, InputEvent::CursorLeft);
        assert_eq!(input.buffer(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_clear_line() {
        let mut session = open_session();
        let mut input = focused();
        type_str(&mut input, &mut session, "skills");
        input.handle(&mut session, InputEvent::ClearLine);
        assert_eq!(input.buffer(), "");
        assert_eq!(input.cursor(), 0);
    }
}
