//! Sample data for demos, benches and tests

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use uptimebar_domain::constants::{MILLIS_PER_SECOND, SECONDS_PER_DAY};
use uptimebar_domain::{DowntimeInterval, TimeWindow};

/// A window plus the downtimes inside it
#[derive(Debug, Clone)]
pub struct SampleTimeline {
    pub window: TimeWindow,
    pub downtimes: Vec<Arc<DowntimeInterval>>,
}

/// `days` as a duration, rounded to the millisecond.
pub fn days(days: f64) -> Duration {
    let millis = days * SECONDS_PER_DAY as f64 * MILLIS_PER_SECOND;
    Duration::milliseconds(millis.round() as i64)
}

/// Two weeks ending at `now` with two outages: `now-12d .. now-11.2d` and
/// `now-8d .. now-6.7d`.
pub fn two_week_sample(now: DateTime<Utc>) -> SampleTimeline {
    let window = TimeWindow::span(now - days(14.0), now);
    let downtimes = vec![
        DowntimeInterval::shared(now - days(12.0), now - days(11.2)),
        DowntimeInterval::shared(now - days(8.0), now - days(6.7)),
    ];
    SampleTimeline { window, downtimes }
}
