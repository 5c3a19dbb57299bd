/// Session status and suffix-length definitions
///
/// This module defines the states a crawl session moves through and the
/// enumeration width chosen at start.
use crate::crawler::ALPHABET;
use crate::SessionError;
use serde::Serialize;
use std::fmt;

/// Represents the current status of the crawl session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// No session has been started, or the last one was cancelled
    #[default]
    Idle,

    /// Session accepts `advance` calls
    Running,

    /// Session is suspended; progress and results are kept
    Paused,

    /// Every combination has been processed (terminal until the next start)
    Complete,
}

impl SessionStatus {
    /// Returns true if `advance` is permitted in this status
    pub fn accepts_advance(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns true if this session holds a seed and progress context
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    /// Returns the lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Number of alphabet characters appended to the seed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SuffixLength {
    #[default]
    One,
    Two,
}

impl SuffixLength {
    /// Size of the combination space for this suffix length
    ///
    /// `|alphabet|` for one character, `|alphabet|²` for two.
    pub fn total_combinations(&self) -> usize {
        match self {
            Self::One => ALPHABET.len(),
            Self::Two => ALPHABET.len() * ALPHABET.len(),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl TryFrom<i64> for SuffixLength {
    type Error = SessionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(SessionError::InvalidArgument(other)),
        }
    }
}

impl Serialize for SuffixLength {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl fmt::Display for SuffixLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_advance() {
        assert!(SessionStatus::Running.accepts_advance());

        assert!(!SessionStatus::Idle.accepts_advance());
        assert!(!SessionStatus::Paused.accepts_advance());
        assert!(!SessionStatus::Complete.accepts_advance());
    }

    #[test]
    fn test_is_active() {
        assert!(SessionStatus::Running.is_active());
        assert!(SessionStatus::Paused.is_active());

        assert!(!SessionStatus::Idle.is_active());
        assert!(!SessionStatus::Complete.is_active());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SessionStatus::Idle), "idle");
        assert_eq!(format!("{}", SessionStatus::Running), "running");
        assert_eq!(format!("{}", SessionStatus::Paused), "paused");
        assert_eq!(format!("{}", SessionStatus::Complete), "complete");
    }

    #[test]
    fn test_default_status_is_idle() {
        assert_eq!(SessionStatus::default(), SessionStatus::Idle);
    }

    #[test]
    fn test_total_combinations() {
        assert_eq!(SuffixLength::One.total_combinations(), 32);
        assert_eq!(SuffixLength::Two.total_combinations(), 1024);
    }

    #[test]
    fn test_suffix_length_from_integer() {
        assert_eq!(SuffixLength::try_from(1), Ok(SuffixLength::One));
        assert_eq!(SuffixLength::try_from(2), Ok(SuffixLength::Two));
        assert_eq!(
            SuffixLength::try_from(0),
            Err(SessionError::InvalidArgument(0))
        );
        assert_eq!(
            SuffixLength::try_from(3),
            Err(SessionError::InvalidArgument(3))
        );
        assert_eq!(
            SuffixLength::try_from(300),
            Err(SessionError::InvalidArgument(300))
        );
        assert_eq!(
            SuffixLength::try_from(-1),
            Err(SessionError::InvalidArgument(-1))
        );
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&SessionStatus::Paused).unwrap();
        assert_eq!(json, "\"paused\"");
    }
}
