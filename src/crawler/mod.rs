//! Crawler module for walking the suggestion space
//!
//! This module contains the core crawling logic, including:
//! - The combination enumerator over the Persian alphabet
//! - The source traits and their HTTP implementations
//! - Per-suggestion enrichment fan-out and domain clustering
//! - The crawl engine that owns the live session

mod cluster;
mod coordinator;
mod enrichment;
mod enumerator;
mod fetcher;
mod parser;
mod sources;

pub use cluster::cluster_hits;
pub use coordinator::CrawlEngine;
pub use enrichment::{enrich_all, enrich_suggestion, MAX_SEARCH_HITS, POPULARITY_UNAVAILABLE};
pub use enumerator::{combination_at, ALPHABET};
pub use fetcher::{build_http_client, http_sources, FixedPopularity, GoogleSearch, GoogleSuggest};
pub use parser::{parse_search_results, parse_suggestions, SuggestParseError, MISSING_SNIPPET};
pub use sources::{PopularitySource, SearchSource, SourceError, Sources, SuggestionSource};

use crate::state::AdvanceOutcome;
use crate::SessionError;
use std::time::Instant;

/// Drives a started session until it completes or `keep_going` returns false
///
/// This is the headless counterpart of a polling client: it calls `advance`
/// with the session's own parameters in a loop and logs progress every 10
/// combinations.
///
/// # Returns
///
/// * `Ok(Some(AdvanceOutcome))` - Outcome of the last successful advance
/// * `Ok(None)` - The session was not running when the loop started
/// * `Err(SessionError)` - An advance was rejected for a reason other than
///   the session having stopped
pub async fn run_to_completion<F>(
    engine: &CrawlEngine,
    seed_text: &str,
    suffix_length: i64,
    mut keep_going: F,
) -> Result<Option<AdvanceOutcome>, SessionError>
where
    F: FnMut() -> bool,
{
    let start_time = Instant::now();
    let mut last = None;

    while keep_going() {
        let outcome = match engine.advance(seed_text, suffix_length).await {
            Ok(outcome) => outcome,
            Err(SessionError::NotRunning) => break,
            Err(e) => return Err(e),
        };

        if outcome.progress % 10 == 0 || outcome.complete {
            let rate = outcome.progress as f64 / start_time.elapsed().as_secs_f64().max(0.001);
            tracing::info!(
                "Progress: {}/{} combinations, {:.2} combinations/sec",
                outcome.progress,
                outcome.total,
                rate
            );
        }

        let complete = outcome.complete;
        last = Some(outcome);
        if complete {
            break;
        }
    }

    Ok(last)
}
