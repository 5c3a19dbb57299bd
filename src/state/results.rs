//! Result records accumulated by a crawl session
//!
//! Field names on the wire follow the export format: a suggestion's popularity
//! is written as `volume`, cluster members as `results` and a hit's URL as
//! `link`.

use serde::{Deserialize, Serialize};

/// A single web-search result before clustering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Result title
    pub title: String,

    /// Result URL as returned by the search source
    #[serde(rename = "link")]
    pub url: String,

    /// Result snippet text
    pub snippet: String,
}

impl SearchHit {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }
}

/// A group of search hits sharing the same originating domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Domain key shared by every member
    pub domain: String,

    /// Hits in the order they were returned by the search source
    #[serde(rename = "results")]
    pub members: Vec<SearchHit>,

    /// Always equal to `members.len()`
    #[serde(rename = "cluster_size")]
    pub size: usize,
}

impl Cluster {
    /// Creates a cluster, deriving `size` from the member list
    pub fn new(domain: String, members: Vec<SearchHit>) -> Self {
        let size = members.len();
        Self {
            domain,
            members,
            size,
        }
    }
}

/// One enriched suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    /// Suggestion phrase returned by the suggestion source
    pub suggestion: String,

    /// Human-readable popularity label, or the unavailable sentinel
    #[serde(rename = "volume")]
    pub popularity: String,

    /// Search hits for the suggestion, grouped by domain
    pub clusters: Vec<Cluster>,
}

/// Outcome of one advanced combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The combination sent to the suggestion source
    pub query: String,

    /// Enriched suggestions, possibly empty
    #[serde(rename = "suggestions_data")]
    pub suggestions: Vec<SuggestionResult>,
}
