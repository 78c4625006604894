// src/commands/dashboard.rs
use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::config::ConfigManager;
use crate::deadlines::upcoming_deadlines;
use crate::render;
use crate::stats::DashboardStats;

use super::authenticated_client;

pub async fn handle(config: &ConfigManager) -> Result<()> {
    let (client, session) = authenticated_client(config).await?;

    let (jobs, applications) = client.fetch_jobs_and_applications().await?;
    info!(
        "Dashboard data: {} jobs, {} applications",
        jobs.len(),
        applications.len()
    );

    let stats = DashboardStats::compute(&jobs, &applications);

    if let Some(email) = session.email.as_deref() {
        println!("Dashboard for {}", email);
        println!();
    }

    println!("Overview");
    println!("{}", render::overview(&stats));
    println!();

    println!("Applications by status");
    println!("{}", render::status_breakdown(&stats));
    println!();

    println!("Upcoming deadlines");
    for entry in upcoming_deadlines(&jobs, Utc::now()) {
        println!("{}", render::deadline_line(&entry));
    }
    println!();

    println!("Recent activity");
    for line in render::recent_activity(&jobs, &applications) {
        println!("{}", line);
    }

    Ok(())
}
