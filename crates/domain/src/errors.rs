//! Error types used throughout the timeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Uptimebar
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "snake_case")]
pub enum TimelineError {
    #[error("Invalid window: start {start} is after end {end}")]
    InvalidWindow { start: DateTime<Utc>, end: DateTime<Utc> },

    #[error("Downtime #{index} ends before it starts")]
    InvertedDowntime { index: usize },

    #[error("Downtime #{index} starts before downtime #{previous}")]
    UnorderedDowntime { index: usize, previous: usize },

    #[error("Downtime #{index} overlaps the downtime before it")]
    OverlappingDowntime { index: usize },

    #[error("Downtime #{index} lies entirely outside the window")]
    DowntimeOutsideWindow { index: usize },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TimelineError {
    /// True when the error was caused by the window or downtime data handed in
    /// by the caller, as opposed to a bad configuration.
    pub fn is_input_fault(&self) -> bool {
        !matches!(self, Self::InvalidColor(_) | Self::Config(_))
    }

    /// Index of the offending downtime, if the error refers to one.
    pub fn downtime_index(&self) -> Option<usize> {
        match self {
            Self::InvertedDowntime { index }
            | Self::UnorderedDowntime { index, .. }
            | Self::OverlappingDowntime { index }
            | Self::DowntimeOutsideWindow { index } => Some(*index),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for TimelineError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for TimelineError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TimelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Error returned when a status string does not name a known variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind}: {value}")]
pub struct ParseStatusError {
    pub kind: &'static str,
    pub value: String,
}

/// Result type alias for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;
