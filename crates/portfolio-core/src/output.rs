//! Renderable command output.
//!
//! Output is either a plain string or a structured fragment of styled lines.
//! Hosts decide how tones map to colors; line-oriented hosts can flatten any
//! output to plain text.

use std::fmt;

/// Semantic color of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Default foreground
    #[default]
    Plain,
    /// Section headings (green)
    Heading,
    /// Command names and titles (blue)
    Label,
    /// Quotes and tech stacks (yellow)
    Highlight,
    /// Errors and warnings (red)
    Alert,
    /// Secondary text (gray)
    Muted,
}

/// A run of text sharing one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    /// Create a span with the given tone.
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One line of a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    /// Indent level (two columns per level when flattened)
    pub indent: u8,
    pub spans: Vec<Span>,
}

impl Line {
    /// A line made of a single span.
    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            indent: 0,
            spans: vec![Span::new(text, tone)],
        }
    }

    /// A line made of a single plain span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Tone::Plain)
    }

    /// An empty spacer line.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Append another span to this line.
    pub fn with(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.spans.push(Span::new(text, tone));
        self
    }

    /// Set the indent level.
    pub fn indented(mut self, level: u8) -> Self {
        self.indent = level;
        self
    }

    /// Text of the line without indentation.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Output of a command, as displayed in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Fragment(Vec<Line>),
}

impl Output {
    /// Plain text output.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Structured output from a list of lines.
    pub fn fragment(lines: impl IntoIterator<Item = Line>) -> Self {
        Self::Fragment(lines.into_iter().collect())
    }

    /// View the output as styled lines.
    ///
    /// Plain text becomes one `Plain` line per text line.
    pub fn lines(&self) -> Vec<Line> {
        match self {
            Self::Text(text) => text.lines().map(Line::plain).collect(),
            Self::Fragment(lines) => lines.clone(),
        }
    }

    /// Flatten to plain text, one line per fragment line.
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Fragment(lines) => lines
                .iter()
                .map(|line| format!("{}{}", "  ".repeat(line.indent as usize), line.text()))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Whether any span of the output contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Self::Text(text) => text.contains(needle),
            Self::Fragment(lines) => lines.iter().any(|l| l.text().contains(needle)),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_text())
    }
}

impl From<&str> for Output {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
