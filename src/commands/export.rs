// src/commands/export.rs
use anyhow::Result;
use std::path::PathBuf;

use crate::calendar;
use crate::config::ConfigManager;
use crate::types::JobFilter;

use super::authenticated_client;

pub async fn handle(job_id: i64, output: Option<PathBuf>, config: &ConfigManager) -> Result<()> {
    let (client, _session) = authenticated_client(config).await?;

    let jobs = client.list_jobs(&JobFilter::default()).await?;
    let job = jobs
        .iter()
        .find(|job| job.id == job_id)
        .ok_or_else(|| anyhow::anyhow!("Job #{} not found", job_id))?;

    let export = calendar::deadline_event(job)?;
    let dir = output.unwrap_or_else(|| config.environment.export_path.clone());
    let path = calendar::save_export(&export, &dir).await?;

    println!("✓ Calendar event written to {}", path.display());
    println!("  Import it into your calendar app.");

    Ok(())
}
