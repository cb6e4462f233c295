//! JSON formatter

use crate::core::{Formatter, Record, TimestampFormat};

/// One JSON object per record
///
/// Example: `{"t":"2025-01-08T10:30:45.123Z","lvl":"info","msg":"done","status":200}`
///
/// Non-string context keys are rendered to strings. A later pair with the
/// same key overwrites an earlier one.
#[derive(Debug, Clone, Default)]
pub struct JsonFormat {
    pretty: bool,
    timestamp_format: TimestampFormat,
}

impl JsonFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit indented, multi-line objects
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Build the JSON object for a record
    pub fn to_json(&self, record: &Record) -> serde_json::Value {
        let names = &record.key_names;
        let mut json_obj = serde_json::Map::new();

        let time = if self.timestamp_format.is_numeric() {
            serde_json::Value::Number(record.time.timestamp_millis().into())
        } else {
            serde_json::Value::String(self.timestamp_format.format(&record.time))
        };
        json_obj.insert(names.time.clone(), time);
        json_obj.insert(
            names.level.clone(),
            serde_json::Value::String(record.level.to_str().to_string()),
        );
        json_obj.insert(
            names.message.clone(),
            serde_json::Value::String(record.message.clone()),
        );

        for (key, value) in record.pairs() {
            json_obj.insert(key.to_string(), value.to_json_value());
        }

        serde_json::Value::Object(json_obj)
    }
}

impl Formatter for JsonFormat {
    fn format(&self, record: &Record) -> Vec<u8> {
        let json = self.to_json(record);
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(&json)
        } else {
            serde_json::to_vec(&json)
        }
        .unwrap_or_default();
        bytes.push(b'\n');
        bytes
    }
}
