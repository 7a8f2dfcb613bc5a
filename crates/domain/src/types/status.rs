//! Availability status and derived status intervals

use std::sync::Arc;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::downtime::DowntimeInterval;
use super::window::TimeWindow;
use crate::impl_status_conversions;

/// Up or down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum AvailabilityStatus {
    Up,
    Down,
}

impl_status_conversions!(AvailabilityStatus {
    Up => "up",
    Down => "down",
});

/// A gap-free, typed sub-interval of the window
///
/// Produced only by the interval compiler. `source` is set exactly for Down
/// intervals and points at the downtime the interval was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StatusInterval {
    pub status: AvailabilityStatus,
    pub interval: TimeWindow,
    pub source: Option<Arc<DowntimeInterval>>,
}

impl StatusInterval {
    pub const fn up(interval: TimeWindow) -> Self {
        Self { status: AvailabilityStatus::Up, interval, source: None }
    }

    pub const fn down(interval: TimeWindow, source: Arc<DowntimeInterval>) -> Self {
        Self { status: AvailabilityStatus::Down, interval, source: Some(source) }
    }

    pub fn duration(&self) -> TimeDelta {
        self.interval.duration()
    }

    /// Signed duration in fractional seconds, nanosecond resolution.
    pub fn duration_secs_f64(&self) -> f64 {
        self.interval.duration_secs_f64()
    }

    pub fn is_down(&self) -> bool {
        self.status == AvailabilityStatus::Down
    }
}

/// Up/down totals over a compiled interval sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AvailabilitySummary {
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub up_millis: i64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub down_millis: i64,
    pub downtime_count: usize,
}

impl AvailabilitySummary {
    /// Fraction of the covered time that was up, in `[0, 1]` for well-formed
    /// input. `None` when nothing was covered.
    pub fn up_ratio(&self) -> Option<f64> {
        let total = self.up_millis + self.down_millis;
        if total <= 0 {
            return None;
        }
        Some(self.up_millis as f64 / total as f64)
    }
}
