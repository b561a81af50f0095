use std::env;

use atty::Stream;
use color_eyre::owo_colors::OwoColorize;

use crate::CommandStatus;

pub struct Style {
    enabled: bool,
}

impl Style {
    #[must_use]
    pub fn new(force_no_color: bool, is_tty: bool) -> Self {
        let env_no_color = env::var_os("NO_COLOR").is_some();
        Self {
            enabled: !(force_no_color || env_no_color) && is_tty,
        }
    }

    /// Styling for messages written to stderr.
    #[must_use]
    pub fn for_stderr(force_no_color: bool) -> Self {
        Self::new(force_no_color, atty::is(Stream::Stderr))
    }

    #[must_use]
    pub fn for_stdout(force_no_color: bool) -> Self {
        Self::new(force_no_color, atty::is(Stream::Stdout))
    }

    #[must_use]
    pub fn status(&self, status: CommandStatus, text: &str) -> String {
        let (symbol, tone) = match status {
            CommandStatus::Ok => ("✔", Tone::Green),
            CommandStatus::UserError => ("✗", Tone::Yellow),
            CommandStatus::Failure => ("✖", Tone::Red),
        };
        let line = format!("{symbol} {text}");
        self.paint(&line, tone)
    }

    #[must_use]
    pub fn hint(&self, hint: &str) -> String {
        let line = format!("Hint: {hint}");
        if !self.enabled {
            return line;
        }
        line.cyan().to_string()
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match tone {
            Tone::Green => text.green().bold().to_string(),
            Tone::Yellow => text.yellow().bold().to_string(),
            Tone::Red => text.red().bold().to_string(),
        }
    }
}

enum Tone {
    Green,
    Yellow,
    Red,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_without_tty() {
        let style = Style::new(false, false);
        assert_eq!(
            style.status(CommandStatus::UserError, "KiCad Python not found on macOS"),
            "✗ KiCad Python not found on macOS"
        );
        assert_eq!(style.hint("set KICAD_PYTHON"), "Hint: set KICAD_PYTHON");
    }

    #[test]
    fn forced_no_color_wins_over_tty() {
        let style = Style::new(true, true);
        assert_eq!(style.status(CommandStatus::Ok, "done"), "✔ done");
    }
}
