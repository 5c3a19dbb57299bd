//! Output module for exporting crawl results
//!
//! This module handles:
//! - Flattening accumulated results into export rows
//! - Writing rows as CSV files with timestamped names
//! - Computing and printing crawl statistics

mod csv_export;
pub mod stats;

pub use csv_export::{export_file_name, render_csv, write_csv, CSV_HEADERS};
pub use stats::{print_statistics, CrawlStatistics};

use crate::state::QueryResult;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No results to export")]
    Empty,

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize clusters: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One exported line: a suggestion with its popularity and clusters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub keyword: String,
    pub popularity: String,
    /// JSON text of the suggestion's cluster list
    pub clusters: String,
}

/// Flattens query results into one row per suggestion
///
/// Rows follow the order of `results` and, within a query, the order of its
/// suggestions. Queries that produced no suggestions contribute no rows.
pub fn export_rows(results: &[QueryResult]) -> Vec<ExportRow> {
    results
        .iter()
        .flat_map(|result| result.suggestions.iter())
        .map(|suggestion| ExportRow {
            keyword: suggestion.suggestion.clone(),
            popularity: suggestion.popularity.clone(),
            clusters: serde_json::to_string(&suggestion.clusters).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Cluster, SearchHit, SuggestionResult};

    fn suggestion(name: &str, clusters: Vec<Cluster>) -> SuggestionResult {
        SuggestionResult {
            suggestion: name.to_string(),
            popularity: "10K+".to_string(),
            clusters,
        }
    }

    #[test]
    fn test_export_rows_flatten_in_order() {
        let results = vec![
            QueryResult {
                query: "x ا".to_string(),
                suggestions: vec![suggestion("first", vec![]), suggestion("second", vec![])],
            },
            QueryResult {
                query: "x ب".to_string(),
                suggestions: vec![],
            },
            QueryResult {
                query: "x پ".to_string(),
                suggestions: vec![suggestion("third", vec![])],
            },
        ];

        let keywords: Vec<String> = export_rows(&results)
            .into_iter()
            .map(|row| row.keyword)
            .collect();
        assert_eq!(keywords, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_export_rows_serialize_clusters() {
        let cluster = Cluster::new(
            "a.com".to_string(),
            vec![SearchHit::new("T", "https://a.com/", "S")],
        );
        let results = vec![QueryResult {
            query: "x ا".to_string(),
            suggestions: vec![suggestion("kw", vec![cluster.clone()])],
        }];

        let rows = export_rows(&results);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].popularity, "10K+");

        let parsed: Vec<Cluster> = serde_json::from_str(&rows[0].clusters).unwrap();
        assert_eq!(parsed, vec![cluster]);
        assert!(rows[0].clusters.contains("\"cluster_size\":1"));
    }

    #[test]
    fn test_export_rows_empty() {
        assert!(export_rows(&[]).is_empty());
    }
}
