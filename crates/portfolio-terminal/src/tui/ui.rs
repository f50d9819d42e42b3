//! TUI rendering using ratatui.

use portfolio_core::{Session, WindowState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use crate::theme::{tone_color, Palette};

/// Draw the page and, when open, the terminal window over it.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    draw_page(frame, app, area);

    if app.state().is_open() {
        draw_window(frame, app, window_area(area, app.state()));
    }
}

/// Draw the host page: a header and the toggle affordance.
fn draw_page(frame: &mut Frame, app: &App, area: Rect) {
    let p = &app.palette;
    let page = Paragraph::new(vec![
        Line::from(Span::styled(
            " Kyaw Gaung (Kane)",
            Style::default().fg(p.page_fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Junior Developer | echOS Creator | Future KANEDEV Founder",
            Style::default().fg(p.page_fg),
        )),
    ])
    .style(Style::default().bg(p.page_bg));
    frame.render_widget(page, area);

    let label = if app.state().is_open() {
        " >_ "
    } else {
        " >_ F1: open terminal | q: quit "
    };
    let width = (label.chars().count() as u16).min(area.width);
    let button = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(2),
        width,
        height: 1.min(area.height),
    };
    let toggle = Paragraph::new(label).style(Style::default().bg(Color::Black).fg(Color::LightGreen));
    frame.render_widget(toggle, button);
}

/// Window rectangle: inset from the page, collapsed to the title bar when
/// minimized.
fn window_area(area: Rect, state: WindowState) -> Rect {
    let width = area.width.saturating_sub(4).min(100);
    let full_height = area.height.saturating_sub(4);
    let height = match state {
        WindowState::Minimized => 3.min(full_height),
        _ => full_height,
    };
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(full_height)) / 2,
        width,
        height,
    }
}

fn draw_window(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Clear, area);

    if app.state() == WindowState::Minimized {
        draw_title_bar(frame, app, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(3),    // Transcript
            Constraint::Length(3), // Input
        ])
        .split(area);

    draw_title_bar(frame, app, chunks[0]);
    draw_transcript(frame, app, chunks[1]);
    draw_input(frame, app, chunks[2]);
}

/// Draw the title bar with window controls.
fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let p = &app.palette;
    let title = Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Red)),
        Span::styled("● ", Style::default().fg(Color::Yellow)),
        Span::styled("● ", Style::default().fg(Color::Green)),
        Span::styled(
            format!(" {}", app.widget.config().title),
            Style::default().fg(p.title_fg),
        ),
    ]);
    let controls = if app.state() == WindowState::Minimized {
        " F2 restore | Esc close "
    } else {
        " F2 minimize | Esc close "
    };

    let bar = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border))
            .title_bottom(Line::from(controls).right_aligned()),
    )
    .style(Style::default().bg(p.title_bar_bg));
    frame.render_widget(bar, area);
}

/// Lines for the whole transcript: the echoed prompt line for typed entries,
/// the output, then a spacer.
pub fn transcript_lines(session: &Session, prompt: &str, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in session.transcript() {
        if !entry.is_system() {
            lines.push(Line::from(vec![
                Span::styled(prompt.to_string(), Style::default().fg(palette.prompt)),
                Span::raw(" "),
                Span::styled(entry.command.clone(), Style::default().fg(palette.command)),
            ]));
        }
        if let Some(output) = &entry.output {
            for line in output.lines() {
                let mut spans = vec![Span::raw("  ".repeat(line.indent as usize))];
                spans.extend(
                    line.spans
                        .into_iter()
                        .map(|s| Span::styled(s.text, Style::default().fg(tone_color(s.tone)))),
                );
                lines.push(Line::from(spans));
            }
        }
        lines.push(Line::default());
    }
    lines
}

/// Draw the transcript, bottom-anchored and offset by the scroll position.
fn draw_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let p = &app.palette;
    let Some(session) = app.widget.session() else {
        return;
    };

    let inner_height = area.height.saturating_sub(2) as usize;
    let lines = transcript_lines(session, &app.widget.config().prompt, p);
    let end_idx = lines.len().saturating_sub(app.scroll_offset);
    let start_idx = end_idx.saturating_sub(inner_height);

    let title = if app.scroll_offset > 0 {
        format!(" [scroll: {}] ", app.scroll_offset)
    } else {
        String::new()
    };

    let transcript = Paragraph::new(lines[start_idx..end_idx].to_vec())
        .style(Style::default().bg(p.window_bg))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(p.border))
                .title(title),
        );
    frame.render_widget(transcript, area);
}

/// Draw the input line and place the cursor when focused.
fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let p = &app.palette;
    let prompt = &app.widget.config().prompt;
    let input = app.widget.input();

    let line = if input.buffer().is_empty() && !input.is_focused() {
        Line::from(Span::styled(
            format!("{} Type a command...", prompt),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled(prompt.clone(), Style::default().fg(p.prompt)),
            Span::raw(" "),
            Span::styled(input.buffer().to_string(), Style::default().fg(p.command)),
        ])
    };

    let widget = Paragraph::new(line).style(Style::default().bg(p.window_bg)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border)),
    );
    frame.render_widget(widget, area);

    if input.is_focused() {
        let offset = prompt.chars().count() + 1 + input.cursor_column();
        let cursor_x = (area.x + 1 + offset as u16).min(area.right().saturating_sub(2));
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}
