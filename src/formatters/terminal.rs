//! Human-oriented terminal formatter

use super::{escape_logfmt_key, format_logfmt_value, sanitize_message};
use crate::core::{Formatter, Record, TimestampFormat};
use colored::Colorize;

/// Width messages are padded to when context follows them
const MESSAGE_JUSTIFY: usize = 40;

/// Column-aligned output for interactive terminals
///
/// Example: `INFO  [01-08|10:30:45.123] server started                 port=8080`
#[derive(Debug, Clone)]
pub struct TerminalFormat {
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl TerminalFormat {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::Custom("%m-%d|%H:%M:%S%.3f".to_string()),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Format a record as one terminal line, without the trailing newline
    pub fn format_line(&self, record: &Record) -> String {
        let color = record.level.color_code();
        let level = if self.use_colors {
            record.level.to_label().color(color).to_string()
        } else {
            record.level.to_label().to_string()
        };
        let message = sanitize_message(&record.message);

        let mut line = format!(
            "{} [{}] {}",
            level,
            self.timestamp_format.format(&record.time),
            message
        );

        if record.context.is_empty() {
            return line;
        }

        let width = message.chars().count();
        if width < MESSAGE_JUSTIFY {
            line.push_str(&" ".repeat(MESSAGE_JUSTIFY - width));
        }

        for (key, value) in record.pairs() {
            let key = escape_logfmt_key(key);
            let key = if self.use_colors {
                key.as_str().color(color).to_string()
            } else {
                key
            };
            line.push(' ');
            line.push_str(&key);
            line.push('=');
            line.push_str(&format_logfmt_value(value));
        }

        line
    }
}

impl Default for TerminalFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TerminalFormat {
    fn format(&self, record: &Record) -> Vec<u8> {
        let mut line = self.format_line(record);
        line.push('\n');
        line.into_bytes()
    }
}
