use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as DeError;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Timestamp normalized to UTC.
///
/// Upstream documents carry timestamps in mixed shapes (RFC3339 with an
/// offset, or a naive `YYYY-MM-DD HH:MM:SS`); everything is converted to a
/// UTC instant before any differencing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

const NAIVE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Strict RFC3339 parse; offsets are normalized to UTC.
    pub fn parse(input: &str) -> Option<Self> {
        OffsetDateTime::parse(input, &Rfc3339)
            .ok()
            .map(|parsed| Self(parsed.to_offset(UtcOffset::UTC)))
    }

    /// Lenient parse for upstream per-instrument timestamps.
    ///
    /// Accepts RFC3339 or a naive `YYYY-MM-DD HH:MM:SS` (assumed UTC when no
    /// zone is given). Returns `None` on anything else so the caller can
    /// substitute its own fallback.
    pub fn parse_upstream(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if let Some(parsed) = Self::parse(trimmed) {
            return Some(parsed);
        }
        PrimitiveDateTime::parse(trimmed, NAIVE_FORMAT)
            .ok()
            .map(|naive| Self(naive.assume_utc()))
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    /// Signed elapsed time from `past` up to `self`.
    pub fn since(self, past: Self) -> Duration {
        self.0 - past.0
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }

    #[cfg(test)]
    pub(crate) fn from_unix(seconds: i64) -> Self {
        Self(OffsetDateTime::from_unix_timestamp(seconds).expect("valid unix timestamp"))
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| D::Error::custom("timestamp must be RFC3339"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_normalizes_offset() {
        let parsed = UtcDateTime::parse("2024-01-01T01:00:00+01:00").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn parses_naive_upstream_timestamp_as_utc() {
        let parsed = UtcDateTime::parse_upstream("2024-05-01 12:34:56").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2024-05-01T12:34:56Z");
    }

    #[test]
    fn rejects_garbage_upstream_timestamp() {
        assert!(UtcDateTime::parse_upstream("امروز").is_none());
        assert!(UtcDateTime::parse_upstream("").is_none());
    }
}
