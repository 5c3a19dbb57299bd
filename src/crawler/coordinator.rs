//! Crawl engine - owns the live session and drives it one combination at a time
//!
//! Every call that changes the session holds the state lock only for the
//! read-modify-write of the session itself; the lock is never held across a
//! source call. Whole `advance` calls are serialized by a separate gate, so two
//! polls can never process the same index.
//!
//! `start` and `cancel` bump a generation counter. An advance that was in
//! flight when the session was replaced finishes its fan-out and then finds a
//! newer generation; its result is dropped and the caller sees `NotRunning`.

use crate::crawler::enrichment::enrich_all;
use crate::crawler::Sources;
use crate::output::{export_rows, ExportRow};
use crate::state::{AdvanceOutcome, QueryResult, Session, SessionSnapshot, SessionStatus};
use crate::{SessionError, SessionResult};
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Default)]
struct EngineState {
    session: Session,
    generation: u64,
}

/// Process-wide crawl engine
#[derive(Debug)]
pub struct CrawlEngine {
    sources: Sources,
    state: RwLock<EngineState>,
    advance_gate: Mutex<()>,
}

impl CrawlEngine {
    /// Creates an engine with an empty Idle session
    pub fn new(sources: Sources) -> Self {
        Self {
            sources,
            state: RwLock::new(EngineState::default()),
            advance_gate: Mutex::new(()),
        }
    }

    /// Replaces the live session with a fresh Running one
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Total number of combinations in the new session
    /// * `Err(SessionError::InvalidArgument)` - `suffix_length` is not 1 or 2;
    ///   the previous session is left as it was
    pub async fn start(&self, seed_text: &str, suffix_length: i64) -> SessionResult<usize> {
        let session = Session::start(seed_text, suffix_length)?;
        let total = session.total();

        let mut state = self.state.write().await;
        state.session = session;
        state.generation += 1;

        tracing::info!(
            "Started session for {:?} with {}-letter suffixes ({} combinations)",
            seed_text,
            suffix_length,
            total
        );
        Ok(total)
    }

    /// Processes the next combination of the live session
    ///
    /// # Flow
    ///
    /// 1. Validate status and parameters, pick the combination at `progress`
    /// 2. Fetch suggestions (a failure counts as no suggestions)
    /// 3. Enrich every suggestion concurrently
    /// 4. Append the `QueryResult` and move progress forward by one
    ///
    /// # Returns
    ///
    /// * `Ok(AdvanceOutcome)` - The stored result with updated progress
    /// * `Err(SessionError::NotRunning)` - Session is Idle, Paused, Complete,
    ///   or was replaced while this advance was in flight
    /// * `Err(SessionError::ParameterMismatch)` - Stale client parameters
    pub async fn advance(
        &self,
        seed_text: &str,
        suffix_length: i64,
    ) -> SessionResult<AdvanceOutcome> {
        let _gate = self.advance_gate.lock().await;

        let (combination, generation) = {
            let state = self.state.read().await;
            let combination = state
                .session
                .next_combination(seed_text, suffix_length)
                .inspect_err(|e| match e {
                    SessionError::NotRunning => {
                        tracing::debug!("Advance requested while not running")
                    }
                    other => tracing::warn!("Advance rejected: {}", other),
                })?;
            (combination, state.generation)
        };

        tracing::debug!("Fetching suggestions for {:?}", combination);
        let suggestions = match self.sources.suggestions.suggest(&combination).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!("Suggestion fetch failed for {:?}: {}", combination, e);
                Vec::new()
            }
        };
        tracing::debug!("{} suggestions for {:?}", suggestions.len(), combination);

        let enriched = enrich_all(&self.sources, suggestions).await;

        let mut state = self.state.write().await;
        if state.generation != generation {
            tracing::info!(
                "Discarding result for {:?}: session was replaced",
                combination
            );
            return Err(SessionError::NotRunning);
        }

        let outcome = state.session.record(QueryResult {
            query: combination,
            suggestions: enriched,
        });

        if outcome.complete {
            tracing::info!("Session complete after {} combinations", outcome.progress);
        }

        Ok(outcome)
    }

    /// Suspends the live session
    pub async fn pause(&self) -> SessionResult<SessionStatus> {
        let mut state = self.state.write().await;
        state.session.pause()?;
        tracing::info!("Session paused at {}", state.session.progress());
        Ok(state.session.status())
    }

    /// Resumes a paused session
    pub async fn resume(&self) -> SessionResult<SessionStatus> {
        let mut state = self.state.write().await;
        state.session.resume()?;
        tracing::info!("Session resumed at {}", state.session.progress());
        Ok(state.session.status())
    }

    /// Discards the live session, leaving the empty Idle one
    pub async fn cancel(&self) -> SessionStatus {
        let mut state = self.state.write().await;
        state.session = Session::default();
        state.generation += 1;
        tracing::info!("Session cancelled");
        state.session.status()
    }

    /// Current status and progress
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.session.snapshot()
    }

    /// Clone of the accumulated results
    pub async fn results(&self) -> Vec<QueryResult> {
        self.state.read().await.session.results().to_vec()
    }

    /// Flattens the accumulated results into export rows
    ///
    /// Returns `None` when nothing has been accumulated yet.
    pub async fn export_rows(&self) -> Option<Vec<ExportRow>> {
        let state = self.state.read().await;
        let results = state.session.results();
        if results.is_empty() {
            return None;
        }
        Some(export_rows(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::sources::{PopularitySource, SearchSource, SourceError, SuggestionSource};
    use crate::state::SearchHit;
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Two suggestions per combination
    struct Echo;

    #[async_trait]
    impl SuggestionSource for Echo {
        async fn suggest(&self, text: &str) -> Result<Vec<String>, SourceError> {
            Ok(vec![format!("{} one", text), format!("{} two", text)])
        }
    }

    #[async_trait]
    impl PopularitySource for Echo {
        async fn popularity(&self, _keyword: &str) -> Result<String, SourceError> {
            Ok("10K+".to_string())
        }
    }

    #[async_trait]
    impl SearchSource for Echo {
        async fn search(&self, keyword: &str) -> Result<Vec<SearchHit>, SourceError> {
            Ok(vec![SearchHit::new(keyword, "https://a.com/", "")])
        }
    }

    fn engine() -> CrawlEngine {
        let echo = Arc::new(Echo);
        CrawlEngine::new(Sources::new(echo.clone(), echo.clone(), echo))
    }

    #[tokio::test]
    async fn test_start_returns_total() {
        let engine = engine();
        assert_eq!(engine.start("x", 1).await, Ok(32));
        assert_eq!(engine.start("x", 2).await, Ok(1024));
    }

    #[tokio::test]
    async fn test_bad_start_keeps_previous_session() {
        let engine = engine();
        engine.start("x", 1).await.unwrap();
        engine.advance("x", 1).await.unwrap();

        assert_eq!(
            engine.start("x", 5).await,
            Err(SessionError::InvalidArgument(5))
        );
        assert_eq!(
            engine.start("x", 300).await,
            Err(SessionError::InvalidArgument(300))
        );
        assert_eq!(
            engine.start("x", -1).await,
            Err(SessionError::InvalidArgument(-1))
        );
        let snapshot = engine.snapshot().await;
        assert_eq!(snapshot.status, SessionStatus::Running);
        assert_eq!(snapshot.progress, 1);
    }

    #[tokio::test]
    async fn test_advance_stores_enriched_result() {
        let engine = engine();
        engine.start("x", 1).await.unwrap();

        let outcome = engine.advance("x", 1).await.unwrap();
        assert_eq!(outcome.query_result.query, "x ا");
        assert_eq!(outcome.query_result.suggestions.len(), 2);
        assert_eq!(outcome.progress, 1);
        assert_eq!(outcome.total, 32);
        assert!(!outcome.complete);

        let results = engine.results().await;
        assert_eq!(results, vec![outcome.query_result]);
    }

    #[tokio::test]
    async fn test_advance_on_idle_engine() {
        let engine = engine();
        assert_eq!(engine.advance("x", 1).await, Err(SessionError::NotRunning));
    }

    #[tokio::test]
    async fn test_start_replaces_session() {
        let engine = engine();
        engine.start("x", 1).await.unwrap();
        engine.advance("x", 1).await.unwrap();
        engine.start("y", 2).await.unwrap();

        let snapshot = engine.snapshot().await;
        assert_eq!(snapshot.seed_text, "y");
        assert_eq!(snapshot.progress, 0);
        assert!(engine.results().await.is_empty());
        assert!(matches!(
            engine.advance("x", 1).await,
            Err(SessionError::ParameterMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_export_rows_empty_session() {
        let engine = engine();
        assert!(engine.export_rows().await.is_none());

        engine.start("x", 1).await.unwrap();
        assert!(engine.export_rows().await.is_none());

        engine.advance("x", 1).await.unwrap();
        let rows = engine.export_rows().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].keyword, "x ا one");
    }
}
