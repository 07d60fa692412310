//! Date helpers for trip events.
//!
//! - Serde: `DateTime<Utc>` is written as RFC3339 and read from RFC3339 or a
//!   Unix timestamp (seconds or milliseconds).
//! - Formatting: compact duration strings used by the list rows.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Timestamps above this value are read as milliseconds.
const MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from RFC3339 or a Unix timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Number(i64),
    }

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        RawTimestamp::Number(ts) => {
            let parsed = if ts > MILLIS_THRESHOLD {
                DateTime::from_timestamp_millis(ts)
            } else {
                DateTime::from_timestamp(ts, 0)
            };
            parsed.ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
    }
}

/// Formats a duration the way list rows show it: `30M`, `02H 05M`, `01D 02H 05M`.
///
/// Negative durations are shown as zero.
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    let total_minutes = duration.num_minutes().max(0);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{days:02}D {hours:02}H {minutes:02}M")
    } else if hours > 0 {
        format!("{hours:02}H {minutes:02}M")
    } else {
        format!("{minutes:02}M")
    }
}

/// Short day label, e.g. `MAR 18`
#[must_use]
pub fn format_day(dt: DateTime<Utc>) -> String {
    dt.format("%b %d").to_string().to_uppercase()
}

/// Time of day, e.g. `14:30`
#[must_use]
pub fn format_time(dt: DateTime<Utc>) -> String {
    dt.format("%H:%M").to_string()
}
