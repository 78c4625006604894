// src/commands/auth.rs
use anyhow::Result;
use clap::Subcommand;
use tracing::info;

use crate::api_client::ApiClient;
use crate::config::ConfigManager;
use crate::session::{Session, SessionStore};
use crate::types::RegisterRequest;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a new account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        full_name: Option<String>,
    },
    /// Clear the persisted session
    Logout,
    /// Show who is currently logged in
    Whoami,
}

pub async fn handle(command: AuthCommand, config: &ConfigManager) -> Result<()> {
    let store = SessionStore::new(&config.environment.session_path);
    let client = ApiClient::new(
        config.service.api_base_url.clone(),
        config.service.timeout_seconds,
    )?;

    match command {
        AuthCommand::Login { email, password } => {
            let token = client.login(&email, &password).await?;
            store
                .save(&Session::authenticated(token.access_token, email.clone()))
                .await?;
            info!("Session stored for {}", email);
            println!("✓ Logged in as {}", email);
        }

        AuthCommand::Register {
            email,
            password,
            confirm_password,
            full_name,
        } => {
            validate_password(&password, &confirm_password)?;
            client
                .register(&RegisterRequest {
                    email: email.clone(),
                    password,
                    full_name,
                })
                .await?;
            println!("✓ Account created successfully! Log in with `careerbuddy auth login`.");
        }

        AuthCommand::Logout => {
            store.clear().await?;
            println!("✓ Logged out");
        }

        AuthCommand::Whoami => {
            let session = store.load().await?;
            match session.email.as_deref().filter(|_| session.is_authenticated()) {
                Some(email) => println!("Logged in as {}", email),
                None => println!("Not logged in"),
            }
        }
    }

    Ok(())
}

/// Client-side checks before anything is sent to the API.
fn validate_password(password: &str, confirm: &str) -> Result<()> {
    if password != confirm {
        anyhow::bail!("Passwords do not match");
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        anyhow::bail!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_must_match() {
        let err = validate_password("longenough", "different").unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }

    #[test]
    fn test_password_minimum_length() {
        let err = validate_password("short", "short").unwrap_err();
        assert!(err.to_string().contains("at least 8"));
        assert!(validate_password("12345678", "12345678").is_ok());
    }
}
