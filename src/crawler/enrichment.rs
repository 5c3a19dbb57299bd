//! Enrichment fan-out
//!
//! Turns suggestion strings into `SuggestionResult`s. The popularity and
//! search fetches for one suggestion run concurrently, and every suggestion of
//! a batch is enriched concurrently with its siblings.

use crate::crawler::cluster::cluster_hits;
use crate::crawler::Sources;
use crate::state::SuggestionResult;
use futures::future::join_all;

/// Maximum number of search hits kept per suggestion
pub const MAX_SEARCH_HITS: usize = 5;

/// Popularity shown when the popularity source fails
pub const POPULARITY_UNAVAILABLE: &str = "N/A";

/// Enriches a single suggestion
///
/// Never fails: a popularity failure yields [`POPULARITY_UNAVAILABLE`] and a
/// search failure yields an empty cluster list.
pub async fn enrich_suggestion(sources: &Sources, suggestion: String) -> SuggestionResult {
    let (popularity, hits) = tokio::join!(
        sources.popularity.popularity(&suggestion),
        sources.search.search(&suggestion)
    );

    let popularity = popularity.unwrap_or_else(|e| {
        tracing::warn!("Popularity unavailable for {:?}: {}", suggestion, e);
        POPULARITY_UNAVAILABLE.to_string()
    });

    let mut hits = hits.unwrap_or_else(|e| {
        tracing::warn!("Search failed for {:?}: {}", suggestion, e);
        Vec::new()
    });
    hits.truncate(MAX_SEARCH_HITS);

    tracing::debug!(
        "Enriched {:?}: popularity {}, {} hits",
        suggestion,
        popularity,
        hits.len()
    );

    SuggestionResult {
        suggestion,
        popularity,
        clusters: cluster_hits(hits),
    }
}

/// Enriches every suggestion of one combination
///
/// Waits for the whole batch; output order matches input order.
pub async fn enrich_all(sources: &Sources, suggestions: Vec<String>) -> Vec<SuggestionResult> {
    join_all(
        suggestions
            .into_iter()
            .map(|suggestion| enrich_suggestion(sources, suggestion)),
    )
    .await
}
