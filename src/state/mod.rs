//! State module for the crawl session
//!
//! This module holds the session value, its status machine, and the result
//! records it accumulates.
//!
//! # Components
//!
//! - `SessionStatus`: Idle, Running, Paused or Complete
//! - `Session`: seed, suffix length, progress and accumulated `QueryResult`s
//! - `QueryResult`, `SuggestionResult`, `Cluster`, `SearchHit`: the result records

mod results;
mod session;
mod session_state;

// Re-export main types
pub use results::{Cluster, QueryResult, SearchHit, SuggestionResult};
pub use session::{AdvanceOutcome, Session, SessionSnapshot};
pub use session_state::{SessionStatus, SuffixLength};
