//! Line-oriented rendering for the REPL and `exec`.

use crossterm::style::Stylize;
use portfolio_core::{Line, Output, TranscriptEntry};

use crate::theme::ansi_color;

/// Render one fragment line, optionally with ANSI colors.
fn render_line(line: &Line, color: bool) -> String {
    let mut out = "  ".repeat(line.indent as usize);
    for span in &line.spans {
        match ansi_color(span.tone).filter(|_| color) {
            Some(c) => out.push_str(&span.text.as_str().with(c).to_string()),
            None => out.push_str(&span.text),
        }
    }
    out
}

/// Render output as text lines.
pub fn render_output(output: &Output, color: bool) -> String {
    if !color {
        return output.to_plain_text();
    }
    output
        .lines()
        .iter()
        .map(|line| render_line(line, color))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a transcript entry: the echoed prompt line (skipped for system
/// entries) followed by the output.
pub fn render_entry(entry: &TranscriptEntry, prompt: &str, color: bool) -> String {
    let mut parts = Vec::new();
    if !entry.is_system() {
        let prompt = if color {
            prompt.blue().to_string()
        } else {
            prompt.to_string()
        };
        parts.push(format!("{} {}", prompt, entry.command));
    }
    if let Some(output) = &entry.output {
        parts.push(render_output(output, color));
    }
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use portfolio_core::Tone;

    fn entry(command: &str, output: Output) -> TranscriptEntry {
        TranscriptEntry {
            command: command.to_string(),
            output: Some(output),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_plain_entry() {
        let e = entry("exit", Output::text("Goodbye!"));
        assert_eq!(render_entry(&e, "kane@portfolio:~$", false), "kane@portfolio:~$ exit\nGoodbye!");
    }

    #[test]
    fn test_system_entry_has_no_prompt() {
        let e = entry("", Output::text("Welcome"));
        assert_eq!(render_entry(&e, "$", false), "Welcome");
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let out = Output::fragment([Line::styled("Title", Tone::Heading).indented(1)]);
        let rendered = render_output(&out, true);
        assert!(rendered.starts_with("  "));
        assert!(rendered.contains("Title"));
    }
}
