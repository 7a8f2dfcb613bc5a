//! Downtime interval type
//!
//! Downtimes are handed around as `Arc<DowntimeInterval>` so that a tap can
//! report the exact interval the caller supplied, not a recomputed copy.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use super::window::TimeWindow;

/// A caller-supplied span during which the monitored target was down
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DowntimeInterval {
    pub id: Uuid, // UUIDv7
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DowntimeInterval {
    /// Create a downtime with a fresh UUIDv7 identifier.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { id: Uuid::now_v7(), start, end }
    }

    /// Create a downtime with a caller-chosen identifier.
    pub const fn with_id(id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { id, start, end }
    }

    /// Convenience constructor returning the shared handle used by the
    /// timeline.
    pub fn shared(start: DateTime<Utc>, end: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self::new(start, end))
    }

    pub const fn span(&self) -> TimeWindow {
        TimeWindow::span(self.start, self.end)
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DowntimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "start: {} end: {}",
            self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.end.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}
