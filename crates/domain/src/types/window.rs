//! Time window type
//!
//! A window is a pair of absolute instants. The checked constructor is used
//! for caller-supplied windows; derived intervals go through [`TimeWindow::span`]
//! because malformed downtime input can legitimately produce inverted spans.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{MICROS_PER_SECOND, MILLIS_PER_SECOND, NANOS_PER_SECOND};
use crate::errors::{Result, TimelineError};

/// Closed span of time `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create a window, rejecting `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        let window = Self::span(start, end);
        window.validate()?;
        Ok(window)
    }

    /// Create a span without checking ordering.
    pub const fn span(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Reject inverted windows.
    pub fn validate(&self) -> Result<()> {
        if self.is_inverted() {
            return Err(TimelineError::InvalidWindow { start: self.start, end: self.end });
        }
        Ok(())
    }

    /// Signed duration; negative for inverted spans.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Duration in fractional seconds at nanosecond resolution.
    pub fn duration_secs_f64(&self) -> f64 {
        delta_secs_f64(self.duration())
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the two spans share at least one instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Signed `delta` in fractional seconds.
///
/// Uses nanoseconds when they fit in an `i64`, then microseconds, then
/// milliseconds for spans of several centuries.
pub fn delta_secs_f64(delta: TimeDelta) -> f64 {
    if let Some(nanos) = delta.num_nanoseconds() {
        nanos as f64 / NANOS_PER_SECOND
    } else if let Some(micros) = delta.num_microseconds() {
        micros as f64 / MICROS_PER_SECOND
    } else {
        delta.num_milliseconds() as f64 / MILLIS_PER_SECOND
    }
}
