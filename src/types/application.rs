// src/types/application.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::flexible_datetime;

/// Tracked pursuit of a specific job. `job_id` is a non-owning
/// back-reference; the referenced job may have been deleted since.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub status: ApplicationStatus,
    #[serde(default, with = "flexible_datetime")]
    pub applied_at: Option<DateTime<Utc>>,
}

/// Closed status enum. An unknown value coming back from the API is a
/// deserialization error surfaced at the fetch boundary, never a silent
/// extra bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Saved,
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Saved,
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
    ];

    /// Wire spelling, also used for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Saved => "SAVED",
            ApplicationStatus::Applied => "APPLIED",
            ApplicationStatus::Interview => "INTERVIEW",
            ApplicationStatus::Offer => "OFFER",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    /// In flight: submitted or interviewing.
    pub fn is_active(&self) -> bool {
        matches!(self, ApplicationStatus::Applied | ApplicationStatus::Interview)
    }

    /// Terminal: the process reached an outcome.
    pub fn is_completed(&self) -> bool {
        matches!(self, ApplicationStatus::Offer | ApplicationStatus::Rejected)
    }

    /// Counts toward the success rate: got past the screen.
    pub fn is_successful(&self) -> bool {
        matches!(self, ApplicationStatus::Interview | ApplicationStatus::Offer)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_spelling() {
        let json = serde_json::to_string(&ApplicationStatus::Interview).unwrap();
        assert_eq!(json, "\"INTERVIEW\"");
        let back: ApplicationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ApplicationStatus::Interview);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<ApplicationStatus, _> = serde_json::from_str("\"GHOSTED\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_status_classification() {
        assert!(ApplicationStatus::Applied.is_active());
        assert!(ApplicationStatus::Interview.is_active());
        assert!(ApplicationStatus::Offer.is_completed());
        assert!(ApplicationStatus::Rejected.is_completed());
        assert!(ApplicationStatus::Interview.is_successful());
        assert!(!ApplicationStatus::Saved.is_active());
        assert!(!ApplicationStatus::Rejected.is_successful());
    }

    #[test]
    fn test_application_tolerates_missing_applied_at() {
        let app: Application =
            serde_json::from_str(r#"{"id": 1, "job_id": 2, "status": "SAVED"}"#).unwrap();
        assert!(app.applied_at.is_none());
    }
}
