//! The crawl session and its transitions
//!
//! `Session` is a plain value: every transition is a method that either
//! succeeds or returns a `SessionError` without touching any field. Starting a
//! crawl builds a brand new value instead of resetting fields one by one, and
//! cancelling replaces the session with `Session::default()`.

use crate::crawler::combination_at;
use crate::state::{QueryResult, SessionStatus, SuffixLength};
use crate::{SessionError, SessionResult};
use serde::Serialize;

/// The single live crawl session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    seed_text: String,
    suffix_length: SuffixLength,
    status: SessionStatus,
    progress: usize,
    results: Vec<QueryResult>,
}

/// Returned by a successful advance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvanceOutcome {
    pub query_result: QueryResult,
    pub progress: usize,
    pub total: usize,
    pub complete: bool,
}

/// Read-only view of the session for status polling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub seed_text: String,
    pub suffix_length: SuffixLength,
    pub progress: usize,
    pub total: usize,
    pub complete: bool,
}

impl Session {
    /// Builds a fresh Running session
    ///
    /// # Returns
    ///
    /// * `Ok(Session)` - Session with zero progress and no results
    /// * `Err(SessionError::InvalidArgument)` - `suffix_length` is not 1 or 2
    pub fn start(seed_text: impl Into<String>, suffix_length: i64) -> SessionResult<Self> {
        let suffix_length = SuffixLength::try_from(suffix_length)?;
        Ok(Self {
            seed_text: seed_text.into(),
            suffix_length,
            status: SessionStatus::Running,
            progress: 0,
            results: Vec::new(),
        })
    }

    pub fn seed_text(&self) -> &str {
        &self.seed_text
    }

    pub fn suffix_length(&self) -> SuffixLength {
        self.suffix_length
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn results(&self) -> &[QueryResult] {
        &self.results
    }

    /// Size of the combination space for this session
    pub fn total(&self) -> usize {
        self.suffix_length.total_combinations()
    }

    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Complete
    }

    /// Validates an advance request and returns the combination to process
    ///
    /// The status check comes first, so a poll against a paused or finished
    /// session reports `NotRunning` even when its parameters are stale.
    pub fn next_combination(&self, text: &str, suffix_length: i64) -> SessionResult<String> {
        if !self.status.accepts_advance() {
            return Err(SessionError::NotRunning);
        }

        if text != self.seed_text || suffix_length != i64::from(self.suffix_length.as_u8()) {
            return Err(SessionError::ParameterMismatch {
                text: text.to_string(),
                suffix_length,
            });
        }

        combination_at(&self.seed_text, self.suffix_length, self.progress)
    }

    /// Appends the outcome of one combination and moves progress forward by one
    ///
    /// Only called for a session that was Running when the combination was
    /// picked. A pause that lands while the fan-out is in flight still lets
    /// the result in; the status stays Paused unless this was the last one.
    pub fn record(&mut self, query_result: QueryResult) -> AdvanceOutcome {
        self.results.push(query_result.clone());
        self.progress += 1;

        let total = self.total();
        let complete = self.progress >= total;
        if complete {
            self.status = SessionStatus::Complete;
        }

        AdvanceOutcome {
            query_result,
            progress: self.progress,
            total,
            complete,
        }
    }

    /// Suspends a running session; a no-op on a paused one
    pub fn pause(&mut self) -> SessionResult<()> {
        match self.status {
            SessionStatus::Running | SessionStatus::Paused => {
                self.status = SessionStatus::Paused;
                Ok(())
            }
            SessionStatus::Idle | SessionStatus::Complete => Err(SessionError::NotRunning),
        }
    }

    /// Resumes a paused session; a no-op on a running one
    ///
    /// An Idle session has no seed or progress to resume from and a Complete
    /// one has nothing left to do, so both are rejected.
    pub fn resume(&mut self) -> SessionResult<()> {
        match self.status {
            SessionStatus::Paused | SessionStatus::Running => {
                self.status = SessionStatus::Running;
                Ok(())
            }
            status @ (SessionStatus::Idle | SessionStatus::Complete) => {
                Err(SessionError::InvalidState(status))
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let total = if self.status == SessionStatus::Idle {
            0
        } else {
            self.total()
        };

        SessionSnapshot {
            status: self.status,
            seed_text: self.seed_text.clone(),
            suffix_length: self.suffix_length,
            progress: self.progress,
            total,
            complete: self.is_complete(),
        }
    }
}
