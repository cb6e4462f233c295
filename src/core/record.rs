//! Log record structure

use super::log_level::LogLevel;
use super::value::Value;
use chrono::{DateTime, Utc};
use std::fmt;
use std::panic::Location;

pub const TIME_KEY: &str = "t";
pub const LEVEL_KEY: &str = "lvl";
pub const MESSAGE_KEY: &str = "msg";
pub const ERROR_KEY: &str = "LOG_ERROR";

/// Source position of the code that emitted a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl CallSite {
    /// The location of the caller, following `#[track_caller]` frames
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Labels a formatter uses for the time, level and message fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordKeyNames {
    pub time: String,
    pub level: String,
    pub message: String,
}

impl Default for RecordKeyNames {
    fn default() -> Self {
        Self {
            time: TIME_KEY.to_string(),
            level: LEVEL_KEY.to_string(),
            message: MESSAGE_KEY.to_string(),
        }
    }
}

/// One log event, as handed to a handler chain
///
/// `context` is a flat sequence: keys at even positions, values at odd
/// positions. Records built by a logger always have an even-length context.
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub context: Vec<Value>,
    pub call: CallSite,
    pub key_names: RecordKeyNames,
}

impl Record {
    #[track_caller]
    pub fn new(level: LogLevel, message: impl Into<String>, context: Vec<Value>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            context,
            call: CallSite::caller(),
            key_names: RecordKeyNames::default(),
        }
    }

    #[must_use]
    pub fn with_call_site(mut self, call: CallSite) -> Self {
        self.call = call;
        self
    }

    #[must_use]
    pub fn with_key_names(mut self, key_names: RecordKeyNames) -> Self {
        self.key_names = key_names;
        self
    }

    /// Iterate the context as `(key, value)` pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.context.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Value of the first pair whose key is the string `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_site_is_caller() {
        let record = Record::new(LogLevel::Info, "here", Vec::new());
        assert_eq!(record.call.file, file!());
        assert_eq!(record.call.line, line!() - 2);
    }

    #[test]
    fn test_pairs_and_get() {
        let record = Record::new(
            LogLevel::Debug,
            "pairs",
            vec![Value::from("a"), Value::from(1), Value::from("b"), Value::from(2)],
        );
        assert_eq!(record.pairs().count(), 2);
        assert_eq!(record.get("b"), Some(&Value::Int(2)));
        assert_eq!(record.get("c"), None);
    }

    #[test]
    fn test_default_key_names() {
        let names = RecordKeyNames::default();
        assert_eq!(names.time, "t");
        assert_eq!(names.level, "lvl");
        assert_eq!(names.message, "msg");
    }
}
