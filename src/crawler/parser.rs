//! Response parsers for the suggestion and search endpoints
//!
//! This module handles:
//! - Autocomplete JSON: `[query, [suggestion, ...], ...]`
//! - Search result pages: one hit per `div.g` block

use crate::crawler::enrichment::MAX_SEARCH_HITS;
use crate::state::SearchHit;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Snippet used when a result block carries none
pub const MISSING_SNIPPET: &str = "No description available";

/// Why an autocomplete body could not be read
#[derive(Debug, Error)]
pub enum SuggestParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a suggestion array at index 1")]
    MissingSuggestions,
}

/// Parses an autocomplete response body
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The suggestion list (second element of the array)
/// * `Err(SuggestParseError::Json)` - Body is not JSON
/// * `Err(SuggestParseError::MissingSuggestions)` - No array at index 1
///
/// # Example
///
/// ```
/// use keyword_ripple::crawler::parse_suggestions;
///
/// let body = r#"["x", ["x a", "x b"]]"#;
/// assert_eq!(parse_suggestions(body).unwrap(), vec!["x a", "x b"]);
/// ```
pub fn parse_suggestions(body: &str) -> Result<Vec<String>, SuggestParseError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let list = value
        .get(1)
        .and_then(|v| v.as_array())
        .ok_or(SuggestParseError::MissingSuggestions)?;

    Ok(list
        .iter()
        .filter_map(|item| item.as_str())
        .map(str::to_string)
        .collect())
}

/// Extracts up to [`MAX_SEARCH_HITS`] hits from a search result page
///
/// # Extraction Rules
///
/// - Each `div.g` block is a candidate
/// - Title: text of the first `h3`
/// - URL: `href` of the first `a` (empty if the anchor has none)
/// - Snippet: text of the first `div.VwiC3b`, or [`MISSING_SNIPPET`]
/// - Blocks without a title or an anchor are skipped
pub fn parse_search_results(html: &str) -> Vec<SearchHit> {
    let document = Html::parse_document(html);

    let (Ok(block), Ok(title), Ok(link), Ok(snippet)) = (
        Selector::parse("div.g"),
        Selector::parse("h3"),
        Selector::parse("a"),
        Selector::parse("div.VwiC3b"),
    ) else {
        return Vec::new();
    };

    let mut hits = Vec::new();
    for element in document.select(&block) {
        if hits.len() >= MAX_SEARCH_HITS {
            break;
        }

        let Some(title_elem) = element.select(&title).next() else {
            continue;
        };
        let Some(link_elem) = element.select(&link).next() else {
            continue;
        };

        let snippet_text = element
            .select(&snippet)
            .next()
            .map(text_of)
            .unwrap_or_else(|| MISSING_SNIPPET.to_string());

        hits.push(SearchHit {
            title: text_of(title_elem),
            url: link_elem.value().attr("href").unwrap_or("").to_string(),
            snippet: snippet_text,
        });
    }

    hits
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
