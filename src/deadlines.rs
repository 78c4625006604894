// src/deadlines.rs
//! Upcoming-deadline selection for the dashboard

use chrono::{DateTime, Utc};

use crate::types::Job;

const MAX_UPCOMING: usize = 5;
const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Urgent,
    Warning,
    Normal,
}

#[derive(Debug, Clone)]
pub struct UpcomingDeadline {
    pub job: Job,
    pub days_until: i64,
    pub urgency: Urgency,
    pub label: String,
}

/// One dashboard row. The placeholder stands in when no job carries a
/// deadline, so the section never renders empty.
#[derive(Debug, Clone, PartialEq)]
pub enum DeadlineEntry {
    Placeholder,
    Due(UpcomingDeadline),
}

impl PartialEq for UpcomingDeadline {
    fn eq(&self, other: &Self) -> bool {
        self.job.id == other.job.id
            && self.days_until == other.days_until
            && self.urgency == other.urgency
            && self.label == other.label
    }
}

/// Jobs with a deadline, soonest first (stable on ties), capped at five.
/// Restartable: the returned iterator is Clone.
pub fn upcoming_deadlines(
    jobs: &[Job],
    now: DateTime<Utc>,
) -> impl Iterator<Item = DeadlineEntry> + Clone {
    // Sorting forces collecting the dated jobs; classification stays lazy.
    let mut dated: Vec<(DateTime<Utc>, Job)> = jobs
        .iter()
        .filter_map(|job| job.deadline.map(|deadline| (deadline, job.clone())))
        .collect();
    dated.sort_by_key(|(deadline, _)| *deadline);

    let placeholder = dated.is_empty().then_some(DeadlineEntry::Placeholder);

    placeholder.into_iter().chain(
        dated
            .into_iter()
            .take(MAX_UPCOMING)
            .map(move |(deadline, job)| {
                let days_until = days_until(deadline, now);
                let (urgency, label) = classify(days_until);
                DeadlineEntry::Due(UpcomingDeadline {
                    job,
                    days_until,
                    urgency,
                    label,
                })
            }),
    )
}

fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (deadline - now).num_seconds() as f64;
    (seconds / SECONDS_PER_DAY).ceil() as i64
}

fn classify(days_until: i64) -> (Urgency, String) {
    if days_until < 0 {
        (Urgency::Urgent, "Overdue!".to_string())
    } else if days_until <= 1 {
        (Urgency::Urgent, "Due today!".to_string())
    } else if days_until <= 3 {
        (Urgency::Urgent, format!("{} days left", days_until))
    } else if days_until <= 7 {
        (Urgency::Warning, format!("{} days left", days_until))
    } else {
        (Urgency::Normal, format!("{} days left", days_until))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn job(id: i64, title: &str, deadline: Option<DateTime<Utc>>) -> Job {
        Job {
            id,
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            url: None,
            notes: None,
            category: None,
            priority: None,
            salary_range: None,
            deadline,
            created_at: None,
        }
    }

    fn collect(jobs: &[Job]) -> Vec<DeadlineEntry> {
        upcoming_deadlines(jobs, now()).collect()
    }

    #[test]
    fn test_no_deadlines_yields_single_placeholder() {
        let jobs = vec![job(1, "a", None), job(2, "b", None)];
        assert_eq!(collect(&jobs), vec![DeadlineEntry::Placeholder]);
        assert_eq!(collect(&[]), vec![DeadlineEntry::Placeholder]);
    }

    #[test]
    fn test_sorted_soonest_first_and_capped_at_five() {
        let jobs: Vec<Job> = (0..7)
            .map(|i| job(i, "j", Some(now() + Duration::days(10 - i))))
            .collect();
        let entries = collect(&jobs);

        assert_eq!(entries.len(), 5);
        let ids: Vec<i64> = entries
            .iter()
            .map(|e| match e {
                DeadlineEntry::Due(d) => d.job.id,
                DeadlineEntry::Placeholder => panic!("unexpected placeholder"),
            })
            .collect();
        assert_eq!(ids, vec![6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_deadlines() {
        let shared = now() + Duration::days(4);
        let jobs = vec![
            job(10, "first", Some(shared)),
            job(20, "second", Some(shared)),
            job(30, "third", Some(shared)),
        ];
        let ids: Vec<i64> = collect(&jobs)
            .into_iter()
            .map(|e| match e {
                DeadlineEntry::Due(d) => d.job.id,
                DeadlineEntry::Placeholder => panic!("unexpected placeholder"),
            })
            .collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_urgency_classification() {
        let cases = [
            (Duration::days(-2), Urgency::Urgent, "Overdue!"),
            (Duration::hours(6), Urgency::Urgent, "Due today!"),
            (Duration::days(3), Urgency::Urgent, "3 days left"),
            (Duration::days(6), Urgency::Warning, "6 days left"),
            (Duration::days(30), Urgency::Normal, "30 days left"),
        ];

        for (offset, urgency, label) in cases {
            let jobs = vec![job(1, "j", Some(now() + offset))];
            match collect(&jobs).remove(0) {
                DeadlineEntry::Due(entry) => {
                    assert_eq!(entry.urgency, urgency, "offset {:?}", offset);
                    assert_eq!(entry.label, label, "offset {:?}", offset);
                }
                DeadlineEntry::Placeholder => panic!("unexpected placeholder"),
            }
        }
    }

    #[test]
    fn test_iterator_is_restartable() {
        let jobs = vec![job(1, "j", Some(now() + Duration::days(2)))];
        let iter = upcoming_deadlines(&jobs, now());
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }
}
