// src/commands/mod.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::api_client::ApiClient;
use crate::config::ConfigManager;
use crate::session::{Session, SessionStore};

pub mod applications;
pub mod auth;
pub mod dashboard;
pub mod export;
pub mod jobs;

#[derive(Parser)]
#[command(name = "careerbuddy")]
#[command(about = "Track job postings and applications from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in, register, or inspect the current session
    #[command(subcommand)]
    Auth(auth::AuthCommand),
    /// Browse and manage job postings
    #[command(subcommand)]
    Jobs(jobs::JobsCommand),
    /// Manage tracked applications
    #[command(subcommand)]
    Apps(applications::AppsCommand),
    /// Show aggregate statistics, deadlines, and recent activity
    Dashboard,
    /// Export a job's deadline as an .ics calendar event
    Export {
        job_id: i64,
        /// Directory for the .ics file (defaults to the exports directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub async fn handle_command(cli: Cli, config: &ConfigManager) -> Result<()> {
    match cli.command {
        Command::Auth(command) => auth::handle(command, config).await,
        Command::Jobs(command) => jobs::handle(command, config).await,
        Command::Apps(command) => applications::handle(command, config).await,
        Command::Dashboard => dashboard::handle(config).await,
        Command::Export { job_id, output } => export::handle(job_id, output, config).await,
    }
}

/// Client carrying the persisted bearer token. Refuses to proceed logged
/// out - data loading is suppressed entirely without a token.
pub(crate) async fn authenticated_client(config: &ConfigManager) -> Result<(ApiClient, Session)> {
    let store = SessionStore::new(&config.environment.session_path);
    let session = store.load().await?;

    if !session.is_authenticated() {
        anyhow::bail!("Not logged in. Run `careerbuddy auth login` first.");
    }

    let client = ApiClient::new(
        config.service.api_base_url.clone(),
        config.service.timeout_seconds,
    )?
    .with_token(session.token.clone());

    Ok((client, session))
}
