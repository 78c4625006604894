// src/api_client.rs
//! HTTP client for the tracker API - all JSON except the OAuth2 token form

use anyhow::{Context, Result};
use reqwest::Method;
use tracing::{error, trace};

use crate::types::{
    Application, ApplicationStatus, Job, JobDraft, JobFilter, RegisterRequest, TokenResponse,
};

const AUTH_TOKEN_ENDPOINT: &str = "/auth/token";
const AUTH_REGISTER_ENDPOINT: &str = "/auth/register";
const JOBS_ENDPOINT: &str = "/jobs";
const APPLICATIONS_ENDPOINT: &str = "/applications";

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create new API client with configuration
    pub fn new(base_url: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Attach a bearer token; every subsequent request carries it.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// 1. Login - OAuth2 password flow, form-encoded
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        let url = format!("{}{}", self.base_url, AUTH_TOKEN_ENDPOINT);
        trace!("Requesting token from {}", url);

        let response = self
            .client
            .post(&url)
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .context("Failed to reach authentication service")?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<TokenResponse>()
                .await
                .context("Failed to parse token response")
        } else {
            error!("Login rejected with status {}", status);
            anyhow::bail!("Invalid email or password")
        }
    }

    /// 2. Register a new account
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let url = format!("{}{}", self.base_url, AUTH_REGISTER_ENDPOINT);
        trace!("Registering account via {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to reach registration service")?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Registration failed: {} {}", status, error_text);

            if error_text.contains("already registered") {
                anyhow::bail!("An account with this email already exists")
            }
            anyhow::bail!("Registration failed with status {}: {}", status, error_text)
        }
    }

    /// 3. List jobs, optionally filtered
    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let url = format!("{}{}", self.base_url, JOBS_ENDPOINT);

        let response = self
            .request(Method::GET, &url)
            .query(&filter.as_query())
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        Self::parse_json(response).await
    }

    /// 4. Create a job posting
    pub async fn create_job(&self, draft: &JobDraft) -> Result<Job> {
        self.post_json(JOBS_ENDPOINT, draft).await
    }

    /// 5. Delete a job posting
    pub async fn delete_job(&self, id: i64) -> Result<()> {
        self.delete(&format!("{}/{}", JOBS_ENDPOINT, id)).await
    }

    /// 6. List tracked applications
    pub async fn list_applications(&self) -> Result<Vec<Application>> {
        self.get(APPLICATIONS_ENDPOINT).await
    }

    /// Unfiltered jobs and applications fetched concurrently. The two
    /// resources are independent; no ordering is guaranteed between them.
    pub async fn fetch_jobs_and_applications(&self) -> Result<(Vec<Job>, Vec<Application>)> {
        let filter = JobFilter::default();
        tokio::try_join!(self.list_jobs(&filter), self.list_applications())
    }

    /// 7. Start tracking a job
    pub async fn track_job(&self, job_id: i64) -> Result<Application> {
        self.post_json(APPLICATIONS_ENDPOINT, &serde_json::json!({ "job_id": job_id }))
            .await
    }

    /// 8. Update an application's status
    pub async fn set_application_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> Result<Application> {
        self.put_json(
            &format!("{}/{}", APPLICATIONS_ENDPOINT, id),
            &serde_json::json!({ "status": status }),
        )
        .await
    }

    /// 9. Stop tracking an application
    pub async fn delete_application(&self, id: i64) -> Result<()> {
        self.delete(&format!("{}/{}", APPLICATIONS_ENDPOINT, id))
            .await
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Generic GET request
    async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        Self::parse_json(response).await
    }

    /// Generic POST request with JSON
    async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .request(Method::POST, &url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        Self::parse_json(response).await
    }

    /// Generic PUT request with JSON
    async fn put_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .request(Method::PUT, &url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to PUT to {}", url))?;

        Self::parse_json(response).await
    }

    /// Generic DELETE request - success is a bodyless 204
    async fn delete(&self, endpoint: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .request(Method::DELETE, &url)
            .send()
            .await
            .with_context(|| format!("Failed to DELETE {}", url))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }

    async fn parse_json<R>(response: reqwest::Response) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let status = response.status();
        trace!("Response status: {}", status);

        if status.is_success() {
            let response_text = response
                .text()
                .await
                .context("Failed to read response text")?;

            serde_json::from_str(&response_text).with_context(|| {
                format!("Failed to parse API response. Raw response: {}", response_text)
            })
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("API error response: {} {}", status, error_text);
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Port 9 (discard) refuses connections immediately, so the concurrent
    // fetch exercises both futures without a live server.
    #[tokio::test]
    async fn test_concurrent_fetch_surfaces_connection_errors() {
        let client = ApiClient::new("http://127.0.0.1:9".to_string(), 1).unwrap();
        let result = client.fetch_jobs_and_applications().await;
        assert!(result.is_err());
    }
}
