//! Record time rendering
//!
//! Every formatter takes one of these to decide how the `t` field looks.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// How a formatter renders a record's time
///
/// ```
/// use rust_structured_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::default().format(&Utc::now());
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// `2025-01-08T10:30:45+0000`, the logfmt default
    Iso8601Offset,

    /// `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Milliseconds since the epoch, rendered as a bare number
    UnixMillis,

    /// Any chrono strftime pattern, e.g. `%m-%d|%H:%M:%S%.3f`
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, time: &DateTime<Utc>) -> String {
        match self {
            Self::Iso8601 => time.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::Iso8601Offset => time.format("%Y-%m-%dT%H:%M:%S%z").to_string(),
            Self::Rfc3339 => time.to_rfc3339_opts(SecondsFormat::Micros, false),
            Self::UnixMillis => time.timestamp_millis().to_string(),
            Self::Custom(pattern) => time.format(pattern).to_string(),
        }
    }

    /// True when the rendered form should be emitted as a number, not a string
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        *self == Self::UnixMillis
    }
}
