// src/types/mod.rs
//! Typed records for everything crossing the API boundary

pub mod application;
pub mod auth;
pub mod job;

pub use application::{Application, ApplicationStatus};
pub use auth::{RegisterRequest, TokenResponse};
pub use job::{Job, JobDraft, JobFilter};

/// Serde helper for the API's loosely formatted timestamps.
///
/// The server emits RFC 3339 with offset, naive datetimes without offset,
/// or bare dates depending on the field, so parsing tries all three before
/// failing fast on anything else.
pub mod flexible_datetime {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
        None
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {raw}"))),
        }
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            None => serializer.serialize_none(),
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::parse;
        use chrono::{TimeZone, Utc};

        #[test]
        fn test_parse_rfc3339() {
            let expected = Utc.with_ymd_and_hms(2025, 1, 10, 8, 30, 0).unwrap();
            assert_eq!(parse("2025-01-10T08:30:00Z"), Some(expected));
            assert_eq!(parse("2025-01-10T09:30:00+01:00"), Some(expected));
        }

        #[test]
        fn test_parse_naive_datetime() {
            let expected = Utc.with_ymd_and_hms(2025, 1, 10, 8, 30, 0).unwrap();
            assert_eq!(parse("2025-01-10T08:30:00"), Some(expected));
            assert_eq!(
                parse("2025-01-10T08:30:00.123456"),
                Some(expected + chrono::Duration::microseconds(123_456))
            );
        }

        #[test]
        fn test_parse_bare_date() {
            let expected = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
            assert_eq!(parse("2025-01-10"), Some(expected));
        }

        #[test]
        fn test_parse_garbage_fails() {
            assert_eq!(parse("next tuesday"), None);
        }
    }
}
