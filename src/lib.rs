//! Keyword-Ripple: suggestion-space explorer
//!
//! This crate walks the keyword space formed by appending one or two Persian
//! letters to a seed phrase, collects autocomplete suggestions for every
//! combination, and enriches each suggestion with a popularity label and a set
//! of web-search hits clustered by domain.

pub mod config;
pub mod crawler;
pub mod output;
pub mod server;
pub mod state;
pub mod url;

use thiserror::Error;

/// Error type for the crate's composite entry points
#[derive(Debug, Error)]
pub enum RippleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Source error: {0}")]
    Source(#[from] crawler::SourceError),

    #[error("Export error: {0}")]
    Export(#[from] output::ExportError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors produced by the crawl session state machine
///
/// None of these are faults: every variant leaves the session untouched and
/// usable. `NotRunning` in particular is the normal answer to a poll that
/// arrives after a pause, a cancel or completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Suffix length must be 1 or 2, got {0}")]
    InvalidArgument(i64),

    #[error("Session is not running")]
    NotRunning,

    #[error("Request parameters ({text:?}, {suffix_length}) do not match the live session")]
    ParameterMismatch { text: String, suffix_length: i64 },

    #[error("No session to resume (status: {0})")]
    InvalidState(state::SessionStatus),

    #[error("Combination index {index} is out of range (total {total})")]
    OutOfRange { index: usize, total: usize },
}

/// Result type alias for Keyword-Ripple operations
pub type Result<T> = std::result::Result<T, RippleError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for session operations
pub type SessionResult<T> = std::result::Result<T, SessionError>;

// Re-export commonly used types
pub use config::Config;
pub use crate::url::domain_key;
pub use crawler::{combination_at, CrawlEngine, Sources, ALPHABET};
pub use state::{
    Cluster, QueryResult, SearchHit, Session, SessionSnapshot, SessionStatus, SuffixLength,
    SuggestionResult,
};
