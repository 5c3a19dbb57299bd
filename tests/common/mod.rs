//! In-memory sources shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use keyword_ripple::crawler::{
    PopularitySource, SearchSource, SourceError, Sources, SuggestionSource,
};
use keyword_ripple::{CrawlEngine, SearchHit};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Returns `count` suggestions `"{text} {i}"`; fails for texts in `fail_on`
pub struct EchoSuggestions {
    pub count: usize,
    pub fail_on: Vec<String>,
    pub calls: AtomicUsize,
}

impl EchoSuggestions {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            fail_on: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SuggestionSource for EchoSuggestions {
    async fn suggest(&self, text: &str) -> Result<Vec<String>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on.iter().any(|t| t == text) {
            return Err(SourceError::Status {
                url: text.to_string(),
                status: 500,
            });
        }
        Ok((0..self.count).map(|i| format!("{} {}", text, i)).collect())
    }
}

pub struct StaticPopularity;

#[async_trait]
impl PopularitySource for StaticPopularity {
    async fn popularity(&self, _keyword: &str) -> Result<String, SourceError> {
        Ok("10K+".to_string())
    }
}

/// Two a.com hits and one b.com hit; fails for keywords ending in `fail_suffix`
pub struct StubSearch {
    pub fail_suffix: Option<String>,
}

#[async_trait]
impl SearchSource for StubSearch {
    async fn search(&self, keyword: &str) -> Result<Vec<SearchHit>, SourceError> {
        if let Some(suffix) = &self.fail_suffix {
            if keyword.ends_with(suffix.as_str()) {
                return Err(SourceError::Timeout {
                    url: keyword.to_string(),
                });
            }
        }
        Ok(vec![
            SearchHit::new("one", "https://a.com/1", "first"),
            SearchHit::new("two", "https://b.com/", "second"),
            SearchHit::new("three", "https://a.com/2", "third"),
        ])
    }
}

/// Blocks every call until released, announcing when a call has begun
pub struct GatedSuggestions {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

#[async_trait]
impl SuggestionSource for GatedSuggestions {
    async fn suggest(&self, text: &str) -> Result<Vec<String>, SourceError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(vec![format!("{} late", text)])
    }
}

pub fn sources_with(suggestions: Arc<dyn SuggestionSource>, fail_suffix: Option<&str>) -> Sources {
    Sources::new(
        suggestions,
        Arc::new(StaticPopularity),
        Arc::new(StubSearch {
            fail_suffix: fail_suffix.map(str::to_string),
        }),
    )
}

/// Engine whose every combination yields `count` suggestions
pub fn echo_engine(count: usize) -> CrawlEngine {
    CrawlEngine::new(sources_with(Arc::new(EchoSuggestions::new(count)), None))
}
