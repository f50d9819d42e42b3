//! Canned responses for the portfolio vocabulary.

use chrono::Local;

use super::{Behavior, CommandDefinition, RenderContext};
use crate::output::{Line, Output, Tone};

/// Definitions in the order `help` lists them.
pub(super) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("help", "Show available commands", Behavior::Pure(help)),
        CommandDefinition::new("about", "Learn about Kane", Behavior::Pure(about)),
        CommandDefinition::new("projects", "View my projects", Behavior::Pure(projects)),
        CommandDefinition::new("skills", "Check my technical skills", Behavior::Pure(skills)),
        CommandDefinition::new("contact", "Get my contact information", Behavior::Pure(contact)),
        CommandDefinition::new("echos", "Learn about my OS project", Behavior::Pure(echos)),
        CommandDefinition::new("kanedev", "My company vision", Behavior::Pure(kanedev)),
        CommandDefinition::new("whoami", "Display current user info", Behavior::Pure(whoami)),
        CommandDefinition::new("date", "Show current date and time", Behavior::Pure(date)),
        CommandDefinition::new("clear", "Clear the terminal", Behavior::Clearing),
        CommandDefinition::new("exit", "Close terminal", Behavior::Exiting),
    ]
}

/// Entry shown when an empty terminal opens.
pub fn welcome() -> Output {
    Output::fragment([
        Line::styled("Welcome to Kane's Portfolio Terminal! 🚀", Tone::Heading),
        Line::styled("Type 'help' to see available commands.", Tone::Muted),
        Line::styled("Use ↑/↓ arrows to navigate command history.", Tone::Muted),
    ])
}

/// Output of `exit`.
pub fn farewell() -> Output {
    Output::text("Goodbye! 👋")
}

/// Notice for input matching no command. `raw` is quoted as typed.
pub fn not_found(raw: &str) -> Output {
    Output::fragment([
        Line::styled(format!("Command not found: {}", raw), Tone::Alert),
        Line::styled("Type 'help' for available commands", Tone::Muted),
    ])
}

fn help(ctx: &RenderContext<'_>) -> Output {
    let mut lines = vec![Line::styled("Available commands:", Tone::Heading)];
    lines.extend(ctx.commands.iter().filter(|c| c.name != "help").map(|c| {
        Line::styled(c.name, Tone::Label)
            .with(format!(" - {}", c.description), Tone::Plain)
            .indented(2)
    }));
    Output::Fragment(lines)
}

fn about(_: &RenderContext<'_>) -> Output {
    Output::fragment([
        Line::styled("Kane (Kyaw Gaung) - Junior Developer", Tone::Heading),
        Line::plain("🎓 Fresh graduate with Bachelor's degree + HND"),
        Line::plain("💻 Passionate about full stack development"),
        Line::plain("🚀 Building echOS from scratch"),
        Line::plain("🎯 Dream: Running KANEDEV software company"),
        Line::plain("🐛 Fun fact: I actually enjoy debugging!"),
    ])
}

fn projects(_: &RenderContext<'_>) -> Output {
    let entries = [
        (
            "KODEX",
            "AI-powered documentation platform",
            "React, TypeScript, AI Integration",
        ),
        (
            "Wallnance Tycoon",
            "Trading strategy game with crypto simulation",
            "React Native, Expo, Crypto APIs",
        ),
        (
            "echOS",
            "Custom OS built from scratch",
            "Assembly, C, Custom Kernel",
        ),
    ];

    let mut lines = vec![Line::styled("Featured Projects:", Tone::Heading)];
    for (i, (name, summary, tech)) in entries.iter().enumerate() {
        if i > 0 {
            lines.push(Line::blank());
        }
        lines.push(Line::styled(*name, Tone::Label).indented(2));
        lines.push(Line::styled(*summary, Tone::Muted).indented(2));
        lines.push(Line::styled(format!("Tech: {}", tech), Tone::Highlight).indented(2));
    }
    Output::Fragment(lines)
}

/// Ten-cell bar, e.g. `████████░░ 80%`.
fn skill_bar(percent: u8) -> String {
    let filled = (percent as usize / 10).min(10);
    format!("{}{} {}%", "█".repeat(filled), "░".repeat(10 - filled), percent)
}

fn skills(_: &RenderContext<'_>) -> Output {
    let skills = [
        ("Full Stack Development", 80),
        ("DevOps & System Programming", 25),
        ("Problem Solving", 85),
        ("Learning & Adaptation", 90),
    ];

    let mut lines = vec![Line::styled("Technical Skills:", Tone::Heading)];
    lines.extend(
        skills
            .iter()
            .map(|(name, pct)| Line::plain(format!("{}: {}", name, skill_bar(*pct))).indented(2)),
    );
    lines.push(Line::blank());
    lines.push(Line::styled("Languages & Technologies:", Tone::Label));
    lines.push(Line::plain("React, TypeScript, Node.js, Assembly, C, Python").indented(2));
    Output::Fragment(lines)
}

fn contact(_: &RenderContext<'_>) -> Output {
    Output::fragment([
        Line::styled("Contact Information:", Tone::Heading),
        Line::plain("📧 Email: saikyawgaung@gmail.com").indented(2),
        Line::plain("🐙 GitHub: github.com/Azyura203").indented(2),
        Line::plain("💼 LinkedIn: linkedin.com/in/saikyawgaung").indented(2),
        Line::plain("🌐 Portfolio: kyawgaung-kanedev.netlify.app").indented(2),
        Line::blank(),
        Line::styled("💡 Currently open to opportunities!", Tone::Heading),
    ])
}

fn echos(_: &RenderContext<'_>) -> Output {
    Output::fragment([
        Line::styled("echOS - Custom Operating System", Tone::Alert),
        Line::plain("🔧 Built from scratch using Assembly and C"),
        Line::plain("🧠 Custom kernel with memory management"),
        Line::plain("💻 GRUB bootloader integration"),
        Line::plain("🖥️ Basic shell interface"),
        Line::plain("📊 Status: v1.4.0-beta (In Development)"),
        Line::blank(),
        Line::styled("\"Pure code. Zero dependencies. From bits to boot.\"", Tone::Highlight),
    ])
}

fn kanedev(_: &RenderContext<'_>) -> Output {
    Output::fragment([
        Line::styled("KANEDEV - Software Company Vision", Tone::Label),
        Line::plain("🚀 Building innovative software solutions"),
        Line::plain("👥 Collaborative culture with passionate developers"),
        Line::plain("💡 Focus on quality and user experience"),
        Line::plain("📈 Growth mindset and continuous learning"),
        Line::blank(),
        Line::styled(
            "\"Dreams don't work unless you do.\" - KANEDEV mantra",
            Tone::Heading,
        ),
    ])
}

fn whoami(_: &RenderContext<'_>) -> Output {
    Output::fragment([
        Line::plain("kane@portfolio:~$ whoami"),
        Line::styled("Kyaw Gaung (Kane)", Tone::Heading),
        Line::styled(
            "Junior Developer | echOS Creator | Future KANEDEV Founder",
            Tone::Muted,
        ),
    ])
}

/// Local time in the `10/16/2026, 3:04:05 PM` style.
fn date(ctx: &RenderContext<'_>) -> Output {
    Output::Text(
        ctx.now
            .with_timezone(&Local)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_bar() {
        assert_eq!(skill_bar(80), "████████░░ 80%");
        assert_eq!(skill_bar(25), "██░░░░░░░░ 25%");
        assert_eq!(skill_bar(100), "██████████ 100%");
    }

    #[test]
    fn test_not_found_tones() {
        let Output::Fragment(lines) = not_found("foo") else {
            panic!("not_found should be a fragment");
        };
        assert_eq!(lines[0].spans[0].tone, Tone::Alert);
        assert_eq!(lines[0].text(), "Command not found: foo");
    }

    #[test]
    fn test_definitions_are_lowercase() {
        for def in definitions() {
            assert_eq!(def.name, def.name.to_lowercase());
        }
    }
}
