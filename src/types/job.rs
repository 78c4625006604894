// src/types/job.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::flexible_datetime;

/// A job posting as returned by the API. Owned server-side; the client
/// never mutates one in place, only replaces or deletes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default, with = "flexible_datetime")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /jobs`. Optional fields serialize as `null` so the
/// server applies its own defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub salary_range: Option<String>,
    pub deadline: Option<NaiveDate>,
}

/// Transient listing filter; lives only for the duration of one command.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
}

impl JobFilter {
    /// Query pairs for `GET /jobs`; empty values are dropped entirely
    /// rather than sent as blank parameters.
    pub fn as_query(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        for (key, value) in [
            ("search", &self.search),
            ("category", &self.category),
            ("priority", &self.priority),
        ] {
            if let Some(value) = value.as_deref() {
                if !value.is_empty() {
                    pairs.push((key, value));
                }
            }
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.as_query().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_drops_empty_values() {
        let filter = JobFilter {
            search: Some("rust".to_string()),
            category: Some(String::new()),
            priority: None,
        };
        assert_eq!(filter.as_query(), vec![("search", "rust")]);
    }

    #[test]
    fn test_empty_filter() {
        assert!(JobFilter::default().is_empty());
    }

    #[test]
    fn test_job_deserializes_with_missing_optionals() {
        let job: Job = serde_json::from_str(
            r#"{"id": 3, "title": "Engineer", "company": "Acme", "created_at": "2025-01-02T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(job.title, "Engineer");
        assert!(job.deadline.is_none());
        assert!(job.created_at.is_some());
    }

    #[test]
    fn test_job_deadline_accepts_bare_date() {
        let job: Job = serde_json::from_str(
            r#"{"id": 1, "title": "Engineer", "company": "Acme", "deadline": "2025-01-10"}"#,
        )
        .unwrap();
        assert_eq!(
            job.deadline.unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2025-01-10 00:00"
        );
    }

    #[test]
    fn test_draft_serializes_nulls() {
        let draft = JobDraft {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value["deadline"].is_null());
        assert!(value["category"].is_null());
    }
}
