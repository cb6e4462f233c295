//! Record formatters
//!
//! Provides different output formats for records:
//! - Logfmt: machine-parsable `key=value` lines
//! - Terminal: human-oriented, column-aligned and optionally coloured
//! - Json: one JSON object per line

pub mod json;
pub mod logfmt;
#[cfg(feature = "console")]
pub mod terminal;

pub use json::JsonFormat;
pub use logfmt::LogfmtFormat;
#[cfg(feature = "console")]
pub use terminal::TerminalFormat;

pub use crate::core::{format_func, FormatFunc, Formatter};

use crate::core::Value;

/// Render a value for a `key=value` line
///
/// Strings and errors are quoted when they would otherwise be ambiguous;
/// floats keep three decimals.
pub(crate) fn format_logfmt_value(value: &Value) -> String {
    match value {
        Value::Str(s) | Value::Error(s) => escape_logfmt_value(s),
        Value::Float(f) => format!("{:.3}", f),
        other => escape_logfmt_value(&other.to_string()),
    }
}

/// Escape a logfmt key (keep only characters that cannot break the pair)
pub(crate) fn escape_logfmt_key(key: &Value) -> String {
    let key = key.to_string();
    let escaped: String = key
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '=' && *c != '"' && !c.is_control())
        .collect();
    if escaped.is_empty() {
        "_".to_string()
    } else {
        escaped
    }
}

/// Escape a logfmt value (quote if it contains spaces, quotes, `=` or control chars)
pub(crate) fn escape_logfmt_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c == ' ' || c == '=' || c == '"' || c.is_control());
    if needs_quotes {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

/// Quote a logfmt value
pub(crate) fn quote_logfmt_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Escape line breaks and tabs so a message cannot forge extra log lines
pub(crate) fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
