//! Integration tests driving the widget the way a visitor would.

use chrono::Duration;
use portfolio_core::{
    CommandRegistry, InputEvent, ManualClock, SubmitOutcome, TerminalConfig, TerminalWidget,
    WindowState,
};

fn widget() -> (TerminalWidget, ManualClock) {
    let clock = ManualClock::default();
    let widget = TerminalWidget::with_parts(
        TerminalConfig::default(),
        CommandRegistry::builtin(),
        clock.clone(),
    );
    (widget, clock)
}

fn type_line(widget: &mut TerminalWidget, line: &str) -> Option<SubmitOutcome> {
    for c in line.chars() {
        widget.handle(InputEvent::Insert(c));
    }
    widget.handle(InputEvent::Submit)
}

#[test]
fn test_visitor_tour() {
    let (mut w, _) = widget();
    w.open();

    for cmd in ["help", "about", "projects", "skills", "contact", "echos", "kanedev", "whoami"] {
        assert_eq!(
            type_line(&mut w, cmd),
            Some(SubmitOutcome::Appended { recognized: true }),
            "command {}",
            cmd
        );
    }

    let session = w.session().unwrap();
    assert_eq!(session.transcript().len(), 9);
    assert_eq!(session.command_history().len(), 8);
    assert!(session.transcript()[0].is_system());
    assert_eq!(session.transcript()[8].command, "whoami");
}

#[test]
fn test_recall_after_typed_commands() {
    let (mut w, _) = widget();
    w.open();
    type_line(&mut w, "whoami");
    type_line(&mut w, "help");

    let mut seen = Vec::new();
    for event in [
        InputEvent::HistoryPrevious,
        InputEvent::HistoryPrevious,
        InputEvent::HistoryPrevious,
        InputEvent::HistoryNext,
        InputEvent::HistoryNext,
    ] {
        w.handle(event);
        seen.push(w.input().buffer().to_string());
    }
    assert_eq!(seen, ["help", "whoami", "whoami", "help", ""]);
}

#[test]
fn test_unknown_command_keeps_history_clean() {
    let (mut w, _) = widget();
    w.open();
    type_line(&mut w, "foo");

    let session = w.session().unwrap();
    let entry = session.transcript().last().unwrap();
    assert_eq!(entry.command, "foo");
    assert!(entry.output.as_ref().unwrap().contains("foo"));
    assert!(session.command_history().is_empty());
}

#[test]
fn test_exit_closes_after_delay_without_transcript_change() {
    let (mut w, clock) = widget();
    w.open();
    type_line(&mut w, "exit");
    let len = w.session().unwrap().transcript().len();
    let revision = w.session().unwrap().revision();

    for _ in 0..9 {
        clock.advance(Duration::milliseconds(100));
        assert!(!w.tick());
        assert_eq!(w.state(), WindowState::Expanded);
    }
    clock.advance(Duration::milliseconds(100));
    assert!(w.tick());
    assert_eq!(w.state(), WindowState::Closed);

    let session = w.session().unwrap();
    assert_eq!(session.transcript().len(), len);
    assert_eq!(session.revision(), revision);
}

#[test]
fn test_clear_then_reopen_shows_welcome() {
    let (mut w, _) = widget();
    w.open();
    type_line(&mut w, "about");
    type_line(&mut w, "clear");
    assert!(w.session().unwrap().transcript().is_empty());

    w.close();
    w.open();
    let session = w.session().unwrap();
    assert_eq!(session.transcript().len(), 1);
    assert!(session.transcript()[0].is_system());
    assert_eq!(session.command_history(), ["about"]);
}

#[test]
fn test_minimized_window_does_not_take_keys() {
    let (mut w, _) = widget();
    w.open();
    w.toggle_minimize();
    assert_eq!(type_line(&mut w, "help"), None);
    assert_eq!(w.session().unwrap().transcript().len(), 1);

    w.toggle_minimize();
    assert_eq!(
        type_line(&mut w, "help"),
        Some(SubmitOutcome::Appended { recognized: true })
    );
}
