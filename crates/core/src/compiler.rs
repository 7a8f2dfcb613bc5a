//! Interval compiler - turns a window plus downtimes into up/down intervals
//!
//! The output tiles `[window.start, window.end]` without gaps for well-formed
//! input. The compiler is deliberately literal about its input:
//!
//! - downtimes are not sorted,
//! - a downtime reaching past `window.end` is not clipped,
//! - a downtime starting before `window.start` only contributes the part
//!   inside the window (the first interval starts at `window.start`).
//!
//! Mis-ordered input therefore yields inverted intervals downstream; use
//! [`crate::validation`] to reject it up front.

use std::sync::Arc;

use tracing::trace;
use uptimebar_domain::{AvailabilitySummary, DowntimeInterval, StatusInterval, TimeWindow};

/// Compiles downtime lists into status intervals
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalCompiler;

impl IntervalCompiler {
    pub const fn new() -> Self {
        Self
    }

    /// Build the ordered up/down sequence for `window`.
    ///
    /// # Algorithm
    /// 1. No downtimes: a single Up interval equal to the window.
    /// 2. First downtime starting at or before the window start: the sequence
    ///    opens Down on `[window.start, first.end]`. Otherwise it opens Up on
    ///    `[window.start, first.start]` followed by the first downtime.
    /// 3. Each later downtime adds Up `[previous_end, d.start]` then Down
    ///    `[d.start, d.end]`.
    /// 4. A trailing Up `[last_end, window.end]` closes the sequence when the
    ///    last end falls strictly before the window end.
    ///
    /// Every Down interval carries the `Arc` of the downtime it came from.
    pub fn compile(
        &self,
        window: &TimeWindow,
        downtimes: &[Arc<DowntimeInterval>],
    ) -> Vec<StatusInterval> {
        let Some((first, rest)) = downtimes.split_first() else {
            return vec![StatusInterval::up(*window)];
        };

        let mut intervals = Vec::with_capacity(downtimes.len() * 2 + 1);

        if first.start <= window.start {
            intervals.push(StatusInterval::down(
                TimeWindow::span(window.start, first.end),
                Arc::clone(first),
            ));
        } else {
            intervals.push(StatusInterval::up(TimeWindow::span(window.start, first.start)));
            intervals.push(StatusInterval::down(first.span(), Arc::clone(first)));
        }

        let mut previous_end = first.end;
        for downtime in rest {
            intervals.push(StatusInterval::up(TimeWindow::span(previous_end, downtime.start)));
            intervals.push(StatusInterval::down(downtime.span(), Arc::clone(downtime)));
            previous_end = downtime.end;
        }

        if previous_end < window.end {
            intervals.push(StatusInterval::up(TimeWindow::span(previous_end, window.end)));
        }

        trace!(
            downtimes = downtimes.len(),
            intervals = intervals.len(),
            "Compiled status intervals"
        );

        intervals
    }

    /// Total up and down time across a compiled sequence.
    ///
    /// Inverted intervals contribute negative time, mirroring how they lay
    /// out. Totals saturate at the `i64` bounds.
    pub fn summarize(&self, intervals: &[StatusInterval]) -> AvailabilitySummary {
        intervals.iter().fold(AvailabilitySummary::default(), |mut summary, interval| {
            let millis = interval.duration().num_milliseconds();
            if interval.is_down() {
                summary.down_millis = summary.down_millis.saturating_add(millis);
                summary.downtime_count += 1;
            } else {
                summary.up_millis = summary.up_millis.saturating_add(millis);
            }
            summary
        })
    }
}

/// Shorthand for [`IntervalCompiler::compile`].
pub fn compile(window: &TimeWindow, downtimes: &[Arc<DowntimeInterval>]) -> Vec<StatusInterval> {
    IntervalCompiler::new().compile(window, downtimes)
}
