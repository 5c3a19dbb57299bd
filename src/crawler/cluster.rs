//! Cluster builder
//!
//! Groups search hits by domain key and ranks the groups by size.

use crate::state::{Cluster, SearchHit};
use crate::url::domain_key;
use std::collections::HashMap;

/// Groups `hits` by originating domain
///
/// Every hit lands in exactly one cluster. Clusters are ordered by size,
/// largest first; clusters of equal size keep the order in which their domain
/// was first seen.
pub fn cluster_hits(hits: Vec<SearchHit>) -> Vec<Cluster> {
    let mut order: Vec<(String, Vec<SearchHit>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for hit in hits {
        let domain = domain_key(&hit.url);
        match index.get(&domain) {
            Some(&slot) => order[slot].1.push(hit),
            None => {
                index.insert(domain.clone(), order.len());
                order.push((domain, vec![hit]));
            }
        }
    }

    let mut clusters: Vec<Cluster> = order
        .into_iter()
        .map(|(domain, members)| Cluster::new(domain, members))
        .collect();

    // Equal sizes keep first-seen order
    clusters.sort_by(|a, b| b.size.cmp(&a.size));
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(url: &str) -> SearchHit {
        SearchHit::new(format!("title {}", url), url, "snippet")
    }

    #[test]
    fn test_groups_by_domain_and_ranks() {
        let clusters = cluster_hits(vec![
            hit("https://a.com/1"),
            hit("https://a.com/2"),
            hit("https://b.com"),
        ]);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].domain, "a.com");
        assert_eq!(clusters[0].size, 2);
        assert_eq!(clusters[1].domain, "b.com");
        assert_eq!(clusters[1].size, 1);
    }

    #[test]
    fn test_larger_cluster_moves_ahead() {
        let clusters = cluster_hits(vec![
            hit("https://b.com/1"),
            hit("https://a.com/1"),
            hit("https://a.com/2"),
        ]);

        assert_eq!(clusters[0].domain, "a.com");
        assert_eq!(clusters[1].domain, "b.com");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let clusters = cluster_hits(vec![
            hit("https://c.com/1"),
            hit("https://a.com/1"),
            hit("https://b.com/1"),
            hit("https://a.com/2"),
            hit("https://c.com/2"),
        ]);

        let domains: Vec<&str> = clusters.iter().map(|c| c.domain.as_str()).collect();
        assert_eq!(domains, vec!["c.com", "a.com", "b.com"]);
    }

    #[test]
    fn test_members_keep_input_order() {
        let clusters = cluster_hits(vec![
            hit("https://a.com/2"),
            hit("https://b.com/1"),
            hit("https://a.com/1"),
        ]);

        let urls: Vec<&str> = clusters[0].members.iter().map(|h| h.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.com/2", "https://a.com/1"]);
    }

    #[test]
    fn test_partition_is_exact() {
        let hits = vec![
            hit("https://a.com/1"),
            hit("not a url"),
            hit("https://b.com/1"),
            hit("not a url"),
            hit("https://a.com/3"),
        ];
        let clusters = cluster_hits(hits.clone());

        let total: usize = clusters.iter().map(|c| c.size).sum();
        assert_eq!(total, hits.len());
        for cluster in &clusters {
            assert_eq!(cluster.size, cluster.members.len());
        }
        assert!(clusters.windows(2).all(|w| w[0].size >= w[1].size));

        for h in &hits {
            let holding = clusters
                .iter()
                .filter(|c| c.domain == domain_key(&h.url))
                .count();
            assert_eq!(holding, 1);
        }
    }

    #[test]
    fn test_unparseable_url_is_its_own_key() {
        let clusters = cluster_hits(vec![hit("not a url"), hit("not a url")]);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].domain, "not a url");
        assert_eq!(clusters[0].size, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(cluster_hits(vec![]).is_empty());
    }
}
