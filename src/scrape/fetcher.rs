//! HTTP fetcher for source pages
//!
//! This module handles the single network operation of the pipeline:
//! - Building an HTTP client with the configured timeout
//! - GET requests for stat pages
//! - Error classification (timeout vs. transport vs. upstream status)

use crate::config::ScrapeConfig;
use crate::GridrankError;
use reqwest::Client;
use std::time::Duration;

/// Raw markup fetched from a source page
///
/// Produced per fetch call and consumed by the parse step; nothing outlives
/// the request that created it.
#[derive(Debug)]
pub struct RawDocument {
    /// Response body
    pub body: String,

    /// HTTP status code
    pub status: u16,

    /// Final URL after redirects
    pub final_url: String,
}

/// Builds an HTTP client with the configured total-request timeout
///
/// The timeout bounds the whole request (connect, headers, body) so one slow
/// upstream page cannot stall unrelated requests indefinitely.
///
/// # Arguments
///
/// * `config` - The scrape pipeline configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &ScrapeConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!("gridrank/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one source page
///
/// Returns the body on any 2xx response. Non-success statuses and transport
/// failures come back as errors carrying the locator; the caller decides how
/// to surface them. A single failed fetch is final — there are no retries.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page to fetch
///
/// # Returns
///
/// * `Ok(RawDocument)` - Successfully fetched the page
/// * `Err(GridrankError)` - Timeout, transport failure, or non-2xx status
pub async fn fetch_document(client: &Client, url: &str) -> Result<RawDocument, GridrankError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return Err(GridrankError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| classify_error(url, e))?;

    Ok(RawDocument {
        body,
        status: status.as_u16(),
        final_url,
    })
}

/// Classifies a reqwest error into the crate taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> GridrankError {
    if error.is_timeout() {
        GridrankError::Timeout {
            url: url.to_string(),
        }
    } else {
        GridrankError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
