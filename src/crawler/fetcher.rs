//! HTTP-backed sources
//!
//! This module implements the source traits over HTTP:
//! - Building the shared HTTP client with the configured user agent and timeout
//! - `GoogleSuggest`: autocomplete JSON endpoint
//! - `GoogleSearch`: search result page, scraped for hits
//! - `FixedPopularity`: constant label, no I/O
//! - Error classification into `SourceError`

use crate::config::{Config, SourcesConfig};
use crate::crawler::parser::{parse_search_results, parse_suggestions};
use crate::crawler::sources::{
    PopularitySource, SearchSource, SourceError, Sources, SuggestionSource,
};
use crate::state::SearchHit;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use keyword_ripple::config::SourcesConfig;
/// use keyword_ripple::crawler::build_http_client;
///
/// let client = build_http_client(&SourcesConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &SourcesConfig) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(config.request_timeout);

    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the HTTP sources described by the configuration
///
/// # Returns
///
/// * `Ok(Sources)` - Suggest, popularity and search sources sharing one client
/// * `Err(RippleError::Reqwest)` - The HTTP client could not be built
pub fn http_sources(config: &Config) -> crate::Result<Sources> {
    let client = build_http_client(&config.sources)?;

    Ok(Sources::new(
        Arc::new(GoogleSuggest::new(client.clone(), config.sources.suggest_url.clone())),
        Arc::new(FixedPopularity::new(config.popularity.label.clone())),
        Arc::new(GoogleSearch::new(
            client,
            config.sources.search_url.clone(),
            config.sources.language.clone(),
        )),
    ))
}

/// Sends a GET request and returns the body of a 200 response
///
/// # Error Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | Non-200 status | `Status` |
/// | Timeout | `Timeout` |
/// | Connection or body error | `Network` |
async fn fetch_text(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<String, SourceError> {
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

fn classify_error(url: &str, error: reqwest::Error) -> SourceError {
    if error.is_timeout() {
        SourceError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        SourceError::Network {
            url: url.to_string(),
            message: "Connection refused".to_string(),
        }
    } else {
        SourceError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

/// Autocomplete endpoint speaking the `client=firefox` JSON format
#[derive(Debug, Clone)]
pub struct GoogleSuggest {
    client: Client,
    url: String,
}

impl GoogleSuggest {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl SuggestionSource for GoogleSuggest {
    async fn suggest(&self, text: &str) -> Result<Vec<String>, SourceError> {
        let body = fetch_text(
            &self.client,
            &self.url,
            &[("client", "firefox"), ("q", text)],
        )
        .await?;

        parse_suggestions(&body).map_err(|e| SourceError::Malformed {
            url: self.url.clone(),
            message: e.to_string(),
        })
    }
}

/// Web-search result page scraper
#[derive(Debug, Clone)]
pub struct GoogleSearch {
    client: Client,
    url: String,
    language: String,
}

impl GoogleSearch {
    pub fn new(client: Client, url: String, language: String) -> Self {
        Self {
            client,
            url,
            language,
        }
    }
}

#[async_trait]
impl SearchSource for GoogleSearch {
    async fn search(&self, keyword: &str) -> Result<Vec<SearchHit>, SourceError> {
        let body = fetch_text(
            &self.client,
            &self.url,
            &[("q", keyword), ("hl", self.language.as_str())],
        )
        .await?;

        Ok(parse_search_results(&body))
    }
}

/// Reports the same popularity label for every keyword
#[derive(Debug, Clone)]
pub struct FixedPopularity {
    label: String,
}

impl FixedPopularity {
    pub fn new(label: String) -> Self {
        Self { label }
    }
}

#[async_trait]
impl PopularitySource for FixedPopularity {
    async fn popularity(&self, _keyword: &str) -> Result<String, SourceError> {
        Ok(self.label.clone())
    }
}
