//! Logfmt formatter

use super::{escape_logfmt_key, escape_logfmt_value, format_logfmt_value};
use crate::core::{Formatter, Record, TimestampFormat};

/// Machine-parsable `key=value` lines
///
/// Example: `t=2025-01-08T10:30:45+0000 lvl=info msg="request done" status=200`
///
/// Time, level and message come first under the record's key names,
/// followed by the context pairs in order.
#[derive(Debug, Clone)]
pub struct LogfmtFormat {
    timestamp_format: TimestampFormat,
}

impl LogfmtFormat {
    pub fn new() -> Self {
        Self {
            timestamp_format: TimestampFormat::Iso8601Offset,
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Format a record as a single logfmt line, without the trailing newline
    pub fn format_line(&self, record: &Record) -> String {
        let names = &record.key_names;
        let mut parts = Vec::with_capacity(3 + record.context.len() / 2);

        parts.push(format!(
            "{}={}",
            names.time,
            escape_logfmt_value(&self.timestamp_format.format(&record.time))
        ));
        parts.push(format!("{}={}", names.level, record.level.to_str()));
        parts.push(format!(
            "{}={}",
            names.message,
            escape_logfmt_value(&record.message)
        ));

        for (key, value) in record.pairs() {
            parts.push(format!(
                "{}={}",
                escape_logfmt_key(key),
                format_logfmt_value(value)
            ));
        }

        parts.join(" ")
    }
}

impl Default for LogfmtFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for LogfmtFormat {
    fn format(&self, record: &Record) -> Vec<u8> {
        let mut line = self.format_line(record);
        line.push('\n');
        line.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, RecordKeyNames, Value};
    use chrono::TimeZone;

    fn fixed_record(context: Vec<Value>) -> Record {
        let mut record = Record::new(LogLevel::Info, "hello", context);
        record.time = chrono::Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        record
    }

    #[test]
    fn test_logfmt_line() {
        let record = fixed_record(vec![Value::from("user"), Value::from("alice")]);
        let output = String::from_utf8(LogfmtFormat::new().format(&record)).unwrap();
        assert_eq!(output, "t=2025-01-08T10:30:45+0000 lvl=info msg=hello user=alice\n");
    }

    #[test]
    fn test_logfmt_quotes_message_with_spaces() {
        let mut record = fixed_record(Vec::new());
        record.message = "request processed".to_string();
        let line = LogfmtFormat::new().format_line(&record);
        assert!(line.contains("msg=\"request processed\""));
    }

    #[test]
    fn test_logfmt_escape_special_chars() {
        let record = fixed_record(vec![
            Value::from("query"),
            Value::from("SELECT * FROM users WHERE id=1"),
            Value::from("missing"),
            Value::Null,
        ]);
        let line = LogfmtFormat::new().format_line(&record);
        assert!(line.contains("query=\"SELECT * FROM users WHERE id=1\""));
        assert!(line.contains("missing=nil"));
    }

    #[test]
    fn test_logfmt_uses_record_key_names() {
        let record = fixed_record(Vec::new()).with_key_names(RecordKeyNames {
            time: "ts".to_string(),
            level: "level".to_string(),
            message: "message".to_string(),
        });
        let line = LogfmtFormat::new()
            .with_timestamp_format(TimestampFormat::UnixMillis)
            .format_line(&record);
        assert_eq!(line, "ts=1736332245000 level=info message=hello");
    }
}
