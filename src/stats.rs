// src/stats.rs
//! Derived dashboard statistics - pure, recomputed from scratch on every call

use std::collections::BTreeMap;

use crate::types::{Application, ApplicationStatus, Job};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_jobs: usize,
    pub active_applications: usize,
    pub completed_applications: usize,
    /// Integer percentage in [0, 100]; 0 when there are no applications.
    pub success_rate: u32,
    /// Always carries all five status keys, defaulting to 0.
    pub status_counts: BTreeMap<ApplicationStatus, usize>,
}

impl DashboardStats {
    pub fn compute(jobs: &[Job], applications: &[Application]) -> Self {
        let active_applications = applications
            .iter()
            .filter(|app| app.status.is_active())
            .count();

        let completed_applications = applications
            .iter()
            .filter(|app| app.status.is_completed())
            .count();

        let successful = applications
            .iter()
            .filter(|app| app.status.is_successful())
            .count();

        let success_rate = if applications.is_empty() {
            0
        } else {
            (successful as f64 / applications.len() as f64 * 100.0).round() as u32
        };

        let mut status_counts: BTreeMap<ApplicationStatus, usize> =
            ApplicationStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for app in applications {
            if let Some(count) = status_counts.get_mut(&app.status) {
                *count += 1;
            }
        }

        Self {
            total_jobs: jobs.len(),
            active_applications,
            completed_applications,
            success_rate,
            status_counts,
        }
    }
}
