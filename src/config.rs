// src/config.rs
//! Unified configuration management for the CLI

use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub base_dir: PathBuf,
    pub session_path: PathBuf,
    pub export_path: PathBuf,
    pub log_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

impl ConfigManager {
    /// Load all configurations
    pub fn load() -> Result<Self> {
        let environment = Self::load_environment()?;
        let service = Self::load_service();

        Ok(Self {
            environment,
            service,
        })
    }

    /// Load environment configuration
    fn load_environment() -> Result<EnvironmentConfig> {
        let base_dir = match std::env::var("CAREERBUDDY_HOME") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .context("Failed to get current directory")?
                .join(".careerbuddy"),
        };

        Ok(EnvironmentConfig {
            session_path: base_dir.join("session.toml"),
            export_path: base_dir.join("exports"),
            log_path: base_dir.join("careerbuddy.log"),
            base_dir,
        })
    }

    /// Load service configuration
    fn load_service() -> ServiceConfig {
        let api_base_url = std::env::var("CAREERBUDDY_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        ServiceConfig {
            api_base_url,
            timeout_seconds: 30,
        }
    }

    /// Ensure all required directories exist
    pub async fn ensure_directories(&self) -> Result<()> {
        for dir in [&self.environment.base_dir, &self.environment.export_path] {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }
}
