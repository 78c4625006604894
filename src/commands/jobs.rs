// src/commands/jobs.rs
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use tracing::info;

use crate::config::ConfigManager;
use crate::render;
use crate::types::{JobDraft, JobFilter};

use super::authenticated_client;

#[derive(Subcommand)]
pub enum JobsCommand {
    /// List job postings, optionally filtered
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        priority: Option<String>,
    },
    /// Add a new job posting
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        salary_range: Option<String>,
        /// Application deadline as YYYY-MM-DD
        #[arg(long)]
        deadline: Option<NaiveDate>,
    },
    /// Delete a job posting
    Delete { id: i64 },
}

pub async fn handle(command: JobsCommand, config: &ConfigManager) -> Result<()> {
    let (client, _session) = authenticated_client(config).await?;

    match command {
        JobsCommand::List {
            search,
            category,
            priority,
        } => {
            let filter = JobFilter {
                search,
                category,
                priority,
            };
            let jobs = client.list_jobs(&filter).await?;
            info!("Fetched {} jobs", jobs.len());

            if jobs.is_empty() {
                if filter.is_empty() {
                    println!("No jobs yet. Add one with `careerbuddy jobs add`.");
                } else {
                    println!("No jobs match the current filters.");
                }
                return Ok(());
            }

            let now = Utc::now();
            for job in &jobs {
                println!("{}", render::job_card(job, now));
            }
        }

        JobsCommand::Add {
            title,
            company,
            location,
            url,
            notes,
            category,
            priority,
            salary_range,
            deadline,
        } => {
            let draft = JobDraft {
                title,
                company,
                location,
                url,
                notes,
                category,
                priority,
                salary_range,
                deadline,
            };
            let job = client.create_job(&draft).await?;
            println!("✓ Job added: #{} {} @ {}", job.id, job.title, job.company);
        }

        JobsCommand::Delete { id } => {
            client.delete_job(id).await?;
            println!("✓ Job #{} deleted", id);
        }
    }

    Ok(())
}
