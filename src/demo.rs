//! Demonstration flow
//!
//! Runs the three patterns in order and writes a human-readable transcript to
//! any [`Write`] sink:
//!
//! 1. **Interpreter**: parse and evaluate an arithmetic expression.
//! 2. **Snapshots**: type text, save, type more, restore the saved state.
//! 3. **Observer**: two channels subscribe to a hub and receive news, then
//!    one unsubscribes before a final update.
//!
//! Colours come from [`crate::theme::DEFAULT_THEME`] and are skipped entirely
//! when [`DemoConfig::color`] is off, leaving plain text.

use crate::expression::{self, ParseError};
use crate::notify::{Channel, NotificationHub, Transcript};
use crate::snapshot::{History, HistoryError, TextBuffer};
use crate::theme::DEFAULT_THEME;
use crossterm::style::{style, Color, Stylize};
use std::io::{self, Write};
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_EXPRESSION: &str = "5 + 2 - 3";

const HEADLINES: [&str; 2] = [
    "Latest news: The weather has improved.",
    "Breaking news: A storm is expected.",
];
const FOLLOW_UP: &str = "Update: The storm has passed.";

/// Errors that abort the demonstration
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("could not parse expression")]
    Parse(#[from] ParseError),

    #[error("history lookup failed")]
    History(#[from] HistoryError),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

/// Resolved settings for a demo run
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub expression: String,
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            expression: DEFAULT_EXPRESSION.to_string(),
            color: true,
        }
    }
}

/// Colour only when nothing opts out and stdout is an interactive terminal
pub fn color_enabled(no_color_flag: bool, no_color_env: bool, stdout_is_tty: bool) -> bool {
    !no_color_flag && !no_color_env && stdout_is_tty
}

/// Writes optionally coloured lines
struct Printer<'w, W: Write> {
    out: &'w mut W,
    color: bool,
}

impl<W: Write> Printer<'_, W> {
    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        let title = if self.color {
            style(title).with(DEFAULT_THEME.heading).bold().to_string()
        } else {
            title.to_string()
        };
        writeln!(self.out, "{}", title)
    }

    fn field(&mut self, label: &str, value: &str) -> io::Result<()> {
        let label = self.paint(label, DEFAULT_THEME.label);
        let value = self.paint(value, DEFAULT_THEME.value);
        writeln!(self.out, "{} {}", label, value)
    }

    fn line(&mut self, text: &str, color: Color) -> io::Result<()> {
        let text = self.paint(text, color);
        writeln!(self.out, "{}", text)
    }

    fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}

/// Run all three sections, writing to `out`
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<(), DemoError> {
    let mut printer = Printer {
        out,
        color: config.color,
    };

    interpreter_section(&mut printer, &config.expression)?;
    printer.blank()?;
    snapshot_section(&mut printer)?;
    printer.blank()?;
    observer_section(&mut printer)?;

    info!("demo complete");
    Ok(())
}

fn interpreter_section<W: Write>(
    printer: &mut Printer<'_, W>,
    input: &str,
) -> Result<(), DemoError> {
    printer.heading("Interpreter")?;

    let expr = expression::parse(input)?;
    debug!(operands = expr.operand_count(), tree = %expr, "parsed");
    let value = expr.evaluate();

    printer.field(&format!("Result '{}':", input), &value.to_string())?;
    Ok(())
}

fn snapshot_section<W: Write>(printer: &mut Printer<'_, W>) -> Result<(), DemoError> {
    printer.heading("Snapshots")?;

    let mut buffer = TextBuffer::new();
    let mut history = History::new();

    buffer.append("hello");
    history.save(buffer.capture());
    buffer.append("world!");
    printer.field("Current text:", buffer.text())?;

    buffer.restore(history.get(0)?);
    debug!(bytes = buffer.len(), snapshots = history.len(), "restored snapshot 0");
    printer.field("After restore:", buffer.text())?;
    Ok(())
}

fn observer_section<W: Write>(printer: &mut Printer<'_, W>) -> Result<(), DemoError> {
    printer.heading("Observer")?;

    let transcript = Transcript::shared();
    let first = Rc::new(Channel::new("Channel 1", Rc::clone(&transcript)));
    let second = Rc::new(Channel::new("Channel 2", Rc::clone(&transcript)));

    let mut hub = NotificationHub::new();
    hub.subscribe(first.clone());
    hub.subscribe(second);

    for headline in HEADLINES {
        hub.publish(headline);
    }
    hub.unsubscribe(&first);
    hub.publish(FOLLOW_UP);

    let lines = transcript.borrow_mut().drain();
    for line in &lines {
        printer.line(line, DEFAULT_THEME.channel)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(expression: &str) -> DemoConfig {
        DemoConfig {
            expression: expression.to_string(),
            color: false,
        }
    }

    #[test]
    fn test_interpreter_section_uses_config_expression() {
        let mut out = Vec::new();
        run(&mut out, &plain("10 - 4")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Result '10 - 4': 6"));
    }

    #[test]
    fn test_bad_expression_aborts() {
        let mut out = Vec::new();
        let err = run(&mut out, &plain("5 * 2")).unwrap_err();
        assert!(matches!(err, DemoError::Parse(_)));
    }

    #[test]
    fn test_color_requires_terminal() {
        assert!(color_enabled(false, false, true));
        // Piped output stays plain
        assert!(!color_enabled(false, false, false));
        assert!(!color_enabled(true, false, true));
        assert!(!color_enabled(false, true, true));
    }

    #[test]
    fn test_color_output_has_escape_codes() {
        let mut out = Vec::new();
        run(&mut out, &DemoConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
    }
}
