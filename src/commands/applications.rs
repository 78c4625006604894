// src/commands/applications.rs
use anyhow::Result;
use clap::Subcommand;
use tracing::info;

use crate::config::ConfigManager;
use crate::render;
use crate::types::ApplicationStatus;

use super::authenticated_client;

#[derive(Subcommand)]
pub enum AppsCommand {
    /// List tracked applications
    List,
    /// Start tracking a job posting
    Track { job_id: i64 },
    /// Update an application's status
    Status {
        id: i64,
        #[arg(value_enum)]
        status: ApplicationStatus,
    },
    /// Stop tracking an application
    Delete { id: i64 },
}

pub async fn handle(command: AppsCommand, config: &ConfigManager) -> Result<()> {
    let (client, _session) = authenticated_client(config).await?;

    match command {
        AppsCommand::List => {
            // Jobs are fetched alongside so each row can resolve its
            // title/company.
            let (jobs, applications) = client.fetch_jobs_and_applications().await?;
            info!(
                "Fetched {} applications across {} jobs",
                applications.len(),
                jobs.len()
            );

            if applications.is_empty() {
                println!("No tracked applications. Track one with `careerbuddy apps track <job-id>`.");
                return Ok(());
            }

            for application in &applications {
                println!("{}", render::application_row(application, &jobs));
            }
        }

        AppsCommand::Track { job_id } => {
            let application = client.track_job(job_id).await?;
            println!(
                "✓ Tracking job #{} as application #{} ({})",
                job_id, application.id, application.status
            );
        }

        AppsCommand::Status { id, status } => {
            let application = client.set_application_status(id, status).await?;
            println!("✓ Application #{} is now {}", application.id, application.status);
        }

        AppsCommand::Delete { id } => {
            client.delete_application(id).await?;
            println!("✓ Application #{} deleted", id);
        }
    }

    Ok(())
}
