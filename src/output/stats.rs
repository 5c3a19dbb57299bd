//! Statistics over accumulated crawl results
//!
//! This module summarizes a session's results for display after a headless
//! crawl.

use crate::crawler::POPULARITY_UNAVAILABLE;
use crate::state::QueryResult;
use std::collections::HashMap;

/// How many domains `print_statistics` lists
const TOP_DOMAINS: usize = 10;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of combinations processed
    pub combinations: usize,

    /// Combinations that produced at least one suggestion
    pub productive_combinations: usize,

    /// Total suggestions across all combinations
    pub suggestions: usize,

    /// Suggestions whose popularity could not be fetched
    pub popularity_unavailable: usize,

    /// Total search hits across all suggestions
    pub search_hits: usize,

    /// Hit count per domain, most frequent first (ties by name)
    pub domains: Vec<(String, usize)>,
}

impl CrawlStatistics {
    /// Computes statistics from a session's results
    pub fn from_results(results: &[QueryResult]) -> Self {
        let mut stats = Self {
            combinations: results.len(),
            ..Self::default()
        };
        let mut domain_hits: HashMap<&str, usize> = HashMap::new();

        for result in results {
            if !result.suggestions.is_empty() {
                stats.productive_combinations += 1;
            }

            for suggestion in &result.suggestions {
                stats.suggestions += 1;
                if suggestion.popularity == POPULARITY_UNAVAILABLE {
                    stats.popularity_unavailable += 1;
                }

                for cluster in &suggestion.clusters {
                    stats.search_hits += cluster.size;
                    *domain_hits.entry(cluster.domain.as_str()).or_insert(0) += cluster.size;
                }
            }
        }

        let mut domains: Vec<(String, usize)> = domain_hits
            .into_iter()
            .map(|(domain, hits)| (domain.to_string(), hits))
            .collect();
        domains.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        stats.domains = domains;

        stats
    }

    pub fn unique_domains(&self) -> usize {
        self.domains.len()
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Combinations processed: {}", stats.combinations);
    println!(
        "  Combinations with suggestions: {}",
        stats.productive_combinations
    );
    println!("  Suggestions: {}", stats.suggestions);
    println!("  Search hits: {}", stats.search_hits);
    println!("  Unique domains: {}", stats.unique_domains());
    if stats.popularity_unavailable > 0 {
        println!("  Popularity unavailable: {}", stats.popularity_unavailable);
    }
    println!();

    if !stats.domains.is_empty() {
        println!("Top Domains:");
        for (domain, hits) in stats.domains.iter().take(TOP_DOMAINS) {
            let percentage = (*hits as f64 / stats.search_hits as f64) * 100.0;
            println!("  {}: {} ({:.1}%)", domain, hits, percentage);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Cluster, SearchHit, SuggestionResult};

    fn cluster(domain: &str, size: usize) -> Cluster {
        Cluster::new(
            domain.to_string(),
            (0..size)
                .map(|i| SearchHit::new("t", format!("https://{}/{}", domain, i), "s"))
                .collect(),
        )
    }

    #[test]
    fn test_statistics_from_results() {
        let results = vec![
            QueryResult {
                query: "x ا".to_string(),
                suggestions: vec![
                    SuggestionResult {
                        suggestion: "one".to_string(),
                        popularity: "10K+".to_string(),
                        clusters: vec![cluster("a.com", 2), cluster("b.com", 1)],
                    },
                    SuggestionResult {
                        suggestion: "two".to_string(),
                        popularity: POPULARITY_UNAVAILABLE.to_string(),
                        clusters: vec![cluster("b.com", 2)],
                    },
                ],
            },
            QueryResult {
                query: "x ب".to_string(),
                suggestions: vec![],
            },
        ];

        let stats = CrawlStatistics::from_results(&results);
        assert_eq!(stats.combinations, 2);
        assert_eq!(stats.productive_combinations, 1);
        assert_eq!(stats.suggestions, 2);
        assert_eq!(stats.popularity_unavailable, 1);
        assert_eq!(stats.search_hits, 5);
        assert_eq!(
            stats.domains,
            vec![("b.com".to_string(), 3), ("a.com".to_string(), 2)]
        );
        assert_eq!(stats.unique_domains(), 2);
    }

    #[test]
    fn test_statistics_of_nothing() {
        assert_eq!(
            CrawlStatistics::from_results(&[]),
            CrawlStatistics::default()
        );
    }
}
