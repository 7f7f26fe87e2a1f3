//! Loading the job catalog from the built-in set, a local file or a URL.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use jobboard_core::{mock_catalog, validate_catalog, CatalogError, JobPosting};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// A catalog document is either a bare array of postings or `{ "jobs": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<JobPosting>),
    Wrapped { jobs: Vec<JobPosting> },
}

impl CatalogDocument {
    fn into_jobs(self) -> Vec<JobPosting> {
        match self {
            CatalogDocument::Bare(jobs) | CatalogDocument::Wrapped { jobs } => jobs,
        }
    }
}

/// Reads a `.json`, `.yaml` or `.yml` catalog file and validates its ids.
pub fn load_catalog(path: impl AsRef<Path>) -> anyhow::Result<Vec<JobPosting>> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let document: CatalogDocument = if is_yaml {
        serde_yaml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?
    } else {
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?
    };
    let jobs = document.into_jobs();
    validate_catalog(&jobs).with_context(|| format!("validating {}", path.display()))?;
    Ok(jobs)
}

/// Where the catalog comes from. It is loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    BuiltIn,
    File(PathBuf),
    Remote(String),
}

impl CatalogSource {
    /// `None` or an empty setting selects the built-in catalog; `http(s)://` selects a URL.
    pub fn from_setting(setting: Option<&str>) -> Self {
        match setting.map(str::trim) {
            None | Some("") => CatalogSource::BuiltIn,
            Some(s) if s.starts_with("http://") || s.starts_with("https://") => {
                CatalogSource::Remote(s.to_string())
            }
            Some(s) => CatalogSource::File(PathBuf::from(s)),
        }
    }

    pub async fn load(&self) -> anyhow::Result<Vec<JobPosting>> {
        let jobs = match self {
            CatalogSource::BuiltIn => mock_catalog(),
            CatalogSource::File(path) => load_catalog(path)?,
            CatalogSource::Remote(url) => CatalogFetcher::new(HttpClientConfig::default())?
                .fetch(url)
                .await
                .with_context(|| format!("fetching catalog from {url}"))?,
        };
        info!(source = ?self, postings = jobs.len(), "catalog loaded");
        Ok(jobs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDisposition {
    Retryable,
    NonRetryable,
}

pub fn classify_status(status: StatusCode) -> RetryDisposition {
    if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
        RetryDisposition::Retryable
    } else {
        RetryDisposition::NonRetryable
    }
}

pub fn classify_reqwest_error(err: &reqwest::Error) -> RetryDisposition {
    if err.is_timeout() || err.is_connect() || err.is_request() {
        RetryDisposition::Retryable
    } else {
        RetryDisposition::NonRetryable
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BackoffPolicy {
    pub max_retries: usize,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl BackoffPolicy {
    pub fn delay_for_attempt(&self, attempt_index: usize) -> Duration {
        let factor = 1u32.checked_shl(attempt_index as u32).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub user_agent: Option<String>,
    pub backoff: BackoffPolicy,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            user_agent: Some(format!("jobboard/{}", env!("CARGO_PKG_VERSION"))),
            backoff: BackoffPolicy::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed after retries: {0}")]
    Request(#[from] reqwest::Error),
    #[error("http status {status} for {url}")]
    HttpStatus { status: u16, url: String },
    #[error("catalog body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("catalog failed validation: {0}")]
    Invalid(#[from] CatalogError),
}

/// Fetches a JSON catalog over HTTP, retrying transient failures with capped
/// exponential backoff.
#[derive(Debug)]
pub struct CatalogFetcher {
    client: reqwest::Client,
    backoff: BackoffPolicy,
}

impl CatalogFetcher {
    pub fn new(config: HttpClientConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(config.timeout);
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build().context("building reqwest client")?;
        Ok(Self {
            client,
            backoff: config.backoff,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Vec<JobPosting>, FetchError> {
        let mut attempt = 0;
        loop {
            match self.client.get(url).send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        let body = resp.bytes().await?;
                        let jobs = serde_json::from_slice::<CatalogDocument>(&body)?.into_jobs();
                        validate_catalog(&jobs)?;
                        return Ok(jobs);
                    }
                    if classify_status(status) == RetryDisposition::Retryable
                        && attempt < self.backoff.max_retries
                    {
                        warn!(%status, attempt, "retrying catalog fetch");
                        tokio::time::sleep(self.backoff.delay_for_attempt(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(FetchError::HttpStatus {
                        status: status.as_u16(),
                        url: resp.url().to_string(),
                    });
                }
                Err(err) => {
                    if classify_reqwest_error(&err) == RetryDisposition::Retryable
                        && attempt < self.backoff.max_retries
                    {
                        warn!(error = %err, attempt, "retrying catalog fetch");
                        tokio::time::sleep(self.backoff.delay_for_attempt(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(FetchError::Request(err));
                }
            }
        }
    }
}
