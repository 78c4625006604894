// src/calendar.rs
//! iCalendar export for job deadlines. Building the calendar text is pure;
//! saving the file is the only side effect and lives in `save_export`.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, LocalResult, NaiveDate, TimeZone, Utc};
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

use crate::types::Job;

pub const MEDIA_TYPE: &str = "text/calendar; charset=utf-8";
const PROD_ID: &str = "-//CareerBuddy//Job Application Deadline//EN";
const UID_DOMAIN: &str = "careerbuddy.app";
const START_HOUR: u32 = 9;
const END_HOUR: u32 = 17;

/// A built calendar document, ready for delivery.
#[derive(Debug, Clone)]
pub struct CalendarExport {
    pub file_name: String,
    pub media_type: &'static str,
    pub content: String,
}

/// Build the deadline event for a job. Fails up front when the job has no
/// deadline; nothing is generated in that case.
pub fn deadline_event(job: &Job) -> Result<CalendarExport> {
    let deadline = job.deadline.ok_or_else(|| {
        anyhow::anyhow!(
            "No deadline set for \"{}\" at {}. Add a deadline first.",
            job.title,
            job.company
        )
    })?;

    let (start, end) = deadline_window(deadline)?;
    let uid = event_uid();
    let content = build_event(job, &uid, start, end);

    Ok(CalendarExport {
        file_name: format!("Application Deadline - {} - {}.ics", job.company, job.title),
        media_type: MEDIA_TYPE,
        content,
    })
}

/// The event spans 09:00 to 17:00 local time on the deadline's date,
/// expressed as UTC instants.
pub fn deadline_window(deadline: DateTime<Utc>) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let date = deadline.with_timezone(&Local).date_naive();
    Ok((local_hour(date, START_HOUR)?, local_hour(date, END_HOUR)?))
}

fn local_hour(date: NaiveDate, hour: u32) -> Result<DateTime<Utc>> {
    let naive = date
        .and_hms_opt(hour, 0, 0)
        .with_context(|| format!("Invalid hour {} on {}", hour, date))?;

    let local = match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        // DST gap or fold: take the earliest valid instant.
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => anyhow::bail!("Local time {} does not exist", naive),
    };

    Ok(local.with_timezone(&Utc))
}

/// Unique per generated event: epoch millis plus a random alphanumeric
/// suffix, tagged with a fixed domain.
pub fn event_uid() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}@{}",
        Utc::now().timestamp_millis(),
        &suffix[..9],
        UID_DOMAIN
    )
}

/// UTC-basic timestamp: `YYYYMMDDTHHMMSSZ`, sub-second precision dropped.
pub fn ical_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Assemble the VCALENDAR document. Pure: caller supplies UID and the
/// already-computed UTC window. Lines are joined with CRLF as the format
/// requires.
pub fn build_event(job: &Job, uid: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let summary = format!("Application Deadline - {} at {}", job.title, job.company);
    let location = job.location.as_deref().unwrap_or("Remote");

    let lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PROD_ID),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", uid),
        format!("DTSTART:{}", ical_timestamp(start)),
        format!("DTEND:{}", ical_timestamp(end)),
        format!("SUMMARY:{}", escape_text(&summary)),
        format!("DESCRIPTION:{}", escape_text(&description(job))),
        format!("LOCATION:{}", escape_text(location)),
        "STATUS:CONFIRMED".to_string(),
        "TRANSP:OPAQUE".to_string(),
        "BEGIN:VALARM".to_string(),
        "TRIGGER:-P1D".to_string(),
        "ACTION:DISPLAY".to_string(),
        "DESCRIPTION:Reminder: Application deadline tomorrow!".to_string(),
        "END:VALARM".to_string(),
        "BEGIN:VALARM".to_string(),
        "TRIGGER:-PT2H".to_string(),
        "ACTION:DISPLAY".to_string(),
        "DESCRIPTION:Reminder: Application deadline in 2 hours!".to_string(),
        "END:VALARM".to_string(),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    lines.join("\r\n")
}

/// Multi-line event body. Optional fields are skipped outright so the text
/// carries no blank placeholder lines.
fn description(job: &Job) -> String {
    let mut parts = vec![
        "Job Application Deadline".to_string(),
        String::new(),
        format!("Position: {}", job.title),
        format!("Company: {}", job.company),
    ];

    if let Some(location) = &job.location {
        parts.push(format!("Location: {}", location));
    }
    if let Some(salary) = &job.salary_range {
        parts.push(format!("Salary: {}", salary));
    }
    if let Some(url) = &job.url {
        parts.push(format!("Job URL: {}", url));
    }
    if let Some(notes) = &job.notes {
        parts.push(format!("Notes: {}", notes));
    }

    parts.push(String::new());
    parts.push(format!(
        "Priority: {}",
        job.priority.as_deref().unwrap_or("MEDIUM")
    ));
    parts.push(format!(
        "Category: {}",
        job.category.as_deref().unwrap_or("Not specified")
    ));
    parts.push(String::new());
    parts.push("Don't forget to submit your application!".to_string());

    parts.join("\n")
}

/// Escape TEXT property values per RFC 5545: backslash, semicolon, comma,
/// and literal newlines.
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Write the export into `dir` and return the final path.
pub async fn save_export(export: &CalendarExport, dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let path = dir.join(&export.file_name);
    tokio::fs::write(&path, &export.content)
        .await
        .with_context(|| format!("Failed to write calendar file: {}", path.display()))?;

    info!("Calendar event written to {}", path.display());
    Ok(path)
}
