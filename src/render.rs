// src/render.rs
//! Terminal rendering - pure string builders so every view is testable

use chrono::{DateTime, Duration, Utc};

use crate::deadlines::{DeadlineEntry, Urgency};
use crate::stats::DashboardStats;
use crate::types::{Application, ApplicationStatus, Job};

const UNKNOWN_JOB: &str = "Unknown Job";
const UNKNOWN_COMPANY: &str = "Unknown Company";

/// One job listing card.
pub fn job_card(job: &Job, now: DateTime<Utc>) -> String {
    let mut lines = Vec::new();

    let mut title = format!("#{} {} @ {}", job.id, job.title, job.company);
    if let Some(priority) = &job.priority {
        title.push_str(&format!(" [{}]", priority));
    }
    lines.push(title);

    if let Some(category) = &job.category {
        lines.push(format!("    Category: {}", category));
    }
    if let Some(location) = &job.location {
        lines.push(format!("    Location: {}", location));
    }
    if let Some(salary) = &job.salary_range {
        lines.push(format!("    Salary: {}", salary));
    }
    if let Some(deadline) = job.deadline {
        let urgent = deadline <= now + Duration::days(7);
        let marker = if urgent { " (urgent)" } else { "" };
        lines.push(format!(
            "    Deadline: {}{}",
            deadline.format("%Y-%m-%d"),
            marker
        ));
    }
    lines.push(format!(
        "    URL: {}",
        job.url.as_deref().unwrap_or("No URL provided")
    ));
    if let Some(notes) = &job.notes {
        lines.push(format!("    Notes: {}", notes));
    }

    lines.join("\n")
}

/// One tracked-application row. The referenced job may be gone; render the
/// fallback labels instead of failing.
pub fn application_row(application: &Application, jobs: &[Job]) -> String {
    let job = jobs.iter().find(|job| job.id == application.job_id);
    let title = job.map(|j| j.title.as_str()).unwrap_or(UNKNOWN_JOB);
    let company = job.map(|j| j.company.as_str()).unwrap_or(UNKNOWN_COMPANY);

    format!(
        "#{} {} @ {} - {}",
        application.id, title, company, application.status
    )
}

/// Dashboard overview cards.
pub fn overview(stats: &DashboardStats) -> String {
    [
        format!("Total jobs:             {}", stats.total_jobs),
        format!("Active applications:    {}", stats.active_applications),
        format!("Completed applications: {}", stats.completed_applications),
        format!("Success rate:           {}%", stats.success_rate),
    ]
    .join("\n")
}

/// Per-status breakdown, all five statuses always listed.
pub fn status_breakdown(stats: &DashboardStats) -> String {
    ApplicationStatus::ALL
        .iter()
        .map(|status| {
            format!(
                "  {:<10} {}",
                status.as_str(),
                stats.status_counts.get(status).copied().unwrap_or(0)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One upcoming-deadline row.
pub fn deadline_line(entry: &DeadlineEntry) -> String {
    match entry {
        DeadlineEntry::Placeholder => {
            "  No upcoming deadlines - add deadlines to your jobs to see them here".to_string()
        }
        DeadlineEntry::Due(due) => {
            let marker = match due.urgency {
                Urgency::Urgent => "!!",
                Urgency::Warning => " !",
                Urgency::Normal => "  ",
            };
            let date = due
                .job
                .deadline
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            format!(
                "{} {} at {} - {} (due {})",
                marker, due.job.title, due.job.company, due.label, date
            )
        }
    }
}

/// Recent-activity feed: the latest few jobs and applications, capped at
/// five lines. Empty collections get a welcome line instead.
pub fn recent_activity(jobs: &[Job], applications: &[Application]) -> Vec<String> {
    if jobs.is_empty() && applications.is_empty() {
        return vec!["Welcome to CareerBuddy! Start by adding your first job.".to_string()];
    }

    let mut activities = Vec::new();

    for job in jobs.iter().take(3) {
        let time = job
            .created_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Recently".to_string());
        activities.push(format!(
            "  Added \"{}\" at {} ({})",
            job.title, job.company, time
        ));
    }

    for application in applications.iter().take(3) {
        if let Some(job) = jobs.iter().find(|job| job.id == application.job_id) {
            let time = application
                .applied_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "Recently".to_string());
            activities.push(format!(
                "  Applied to \"{}\" at {} ({})",
                job.title, job.company, time
            ));
        }
    }

    activities.truncate(5);
    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn job(id: i64) -> Job {
        Job {
            id,
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            url: None,
            notes: None,
            category: None,
            priority: None,
            salary_range: None,
            deadline: None,
            created_at: None,
        }
    }

    fn application(id: i64, job_id: i64) -> Application {
        Application {
            id,
            job_id,
            status: ApplicationStatus::Saved,
            applied_at: None,
        }
    }

    #[test]
    fn test_application_row_with_known_job() {
        let row = application_row(&application(1, 7), &[job(7)]);
        assert_eq!(row, "#1 Engineer @ Acme - SAVED");
    }

    #[test]
    fn test_application_row_falls_back_on_missing_job() {
        let row = application_row(&application(1, 99), &[job(7)]);
        assert_eq!(row, "#1 Unknown Job @ Unknown Company - SAVED");
    }

    #[test]
    fn test_status_breakdown_lists_all_statuses() {
        let stats = DashboardStats::compute(&[], &[]);
        let breakdown = status_breakdown(&stats);
        for status in ApplicationStatus::ALL {
            assert!(breakdown.contains(status.as_str()));
        }
    }

    #[test]
    fn test_job_card_marks_urgent_deadline() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let mut j = job(1);
        j.deadline = Some(now + Duration::days(3));
        assert!(job_card(&j, now).contains("(urgent)"));

        j.deadline = Some(now + Duration::days(30));
        assert!(!job_card(&j, now).contains("(urgent)"));
    }

    #[test]
    fn test_recent_activity_empty_state() {
        let lines = recent_activity(&[], &[]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Welcome"));
    }

    #[test]
    fn test_recent_activity_caps_at_five() {
        let jobs: Vec<Job> = (0..4).map(job).collect();
        let applications: Vec<Application> =
            (0..4).map(|i| application(i, i)).collect();
        let lines = recent_activity(&jobs, &applications);
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_recent_activity_skips_orphaned_applications() {
        let lines = recent_activity(&[job(1)], &[application(1, 99)]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Added"));
    }
}
