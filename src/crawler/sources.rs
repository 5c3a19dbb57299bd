//! External source interfaces
//!
//! The engine reaches the outside world only through these three traits. Each
//! call is a suspension point; a failure is reported as `SourceError` and the
//! caller decides how to degrade.

use crate::state::SearchHit;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Failure of a single external fetch
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Malformed response from {url}: {message}")]
    Malformed { url: String, message: String },
}

/// Autocomplete suggestions for a partial query
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self, text: &str) -> Result<Vec<String>, SourceError>;
}

/// Popularity label for a keyword
#[async_trait]
pub trait PopularitySource: Send + Sync {
    async fn popularity(&self, keyword: &str) -> Result<String, SourceError>;
}

/// Web-search hits for a keyword
#[async_trait]
pub trait SearchSource: Send + Sync {
    async fn search(&self, keyword: &str) -> Result<Vec<SearchHit>, SourceError>;
}

/// Shared handle to the three sources, cloned into every fan-out task
#[derive(Clone)]
pub struct Sources {
    pub suggestions: Arc<dyn SuggestionSource>,
    pub popularity: Arc<dyn PopularitySource>,
    pub search: Arc<dyn SearchSource>,
}

impl Sources {
    pub fn new(
        suggestions: Arc<dyn SuggestionSource>,
        popularity: Arc<dyn PopularitySource>,
        search: Arc<dyn SearchSource>,
    ) -> Self {
        Self {
            suggestions,
            popularity,
            search,
        }
    }
}

impl std::fmt::Debug for Sources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sources").finish_non_exhaustive()
    }
}
