//! Fetching a domain's response headers over HTTPS.
//!
//! # Responsibilities
//! - Turn a bare domain into the `https://<domain>/` URL that gets inspected
//! - Build the HTTP client from configuration
//! - Return the raw response headers for the checks in `response.rs`
//!
//! # Design Decisions
//! - Redirects are not followed unless configured; the domain itself must send HSTS
//! - Only headers are kept, the body is dropped unread

use std::time::Duration;

use hyper::header::HeaderMap;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::HttpConfig;

/// Errors raised before a response is available for checking.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid domain `{0}`")]
    InvalidDomain(String),

    #[error("invalid URL for `{domain}`: {source}")]
    Url {
        domain: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Normalize a domain and build the URL that is inspected.
pub fn domain_url(domain: &str) -> Result<Url, CheckError> {
    let normalized = domain.trim().trim_end_matches('.').to_ascii_lowercase();
    if normalized.is_empty()
        || normalized
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | ':' | '?' | '#' | '@'))
    {
        return Err(CheckError::InvalidDomain(domain.to_string()));
    }

    Url::parse(&format!("https://{}/", normalized)).map_err(|source| CheckError::Url {
        domain: domain.to_string(),
        source,
    })
}

/// Build the HTTP client used for every check in one run.
pub fn build_client(config: &HttpConfig) -> Result<reqwest::Client, CheckError> {
    let redirect = if config.follow_redirects {
        reqwest::redirect::Policy::limited(10)
    } else {
        reqwest::redirect::Policy::none()
    };

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .redirect(redirect)
        .build()
        .map_err(CheckError::Client)
}

/// Fetch `https://<domain>/` and return its response headers.
pub async fn fetch_headers(client: &reqwest::Client, domain: &str) -> Result<HeaderMap, CheckError> {
    let url = domain_url(domain)?;
    let res = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| CheckError::Request {
            url: url.to_string(),
            source,
        })?;

    debug!(url = %url, status = %res.status(), "fetched response");
    Ok(res.headers().clone())
}
