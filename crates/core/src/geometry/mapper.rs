//! Segment geometry mapper - proportional layout and hit-testing
//!
//! Durations map linearly onto `[0, total_width]`. Segments are laid out
//! back to back: each one starts where the previous one ended and the cursor
//! advances by exactly one segment width. Accumulated floating error is not
//! reconciled against `total_width`.

use std::sync::Arc;

use tracing::trace;
use uptimebar_domain::constants::PIXEL_EPSILON;
use uptimebar_domain::{DowntimeInterval, Segment, StatusInterval, TimeWindow};

/// Maps status intervals to pixel segments
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentGeometryMapper;

impl SegmentGeometryMapper {
    pub const fn new() -> Self {
        Self
    }

    /// Lay `intervals` out across `total_width` pixels, using the span they
    /// cover (`last.end - first.start`) as the reference duration.
    pub fn layout(&self, intervals: &[StatusInterval], total_width: f64) -> Vec<Segment> {
        let (Some(first), Some(last)) = (intervals.first(), intervals.last()) else {
            return Vec::new();
        };
        let covered = TimeWindow::span(first.interval.start, last.interval.end);
        self.layout_in_window(intervals, &covered, total_width)
    }

    /// Lay `intervals` out against an explicit reference window.
    ///
    /// This is what the widget uses: a downtime running past `window.end`
    /// then maps past `total_width`, which the overflow policy deals with.
    /// When the reference duration is not positive every segment collapses
    /// to zero width at pixel 0.
    pub fn layout_in_window(
        &self,
        intervals: &[StatusInterval],
        window: &TimeWindow,
        total_width: f64,
    ) -> Vec<Segment> {
        let window_secs = window.duration_secs_f64();

        let mut cursor = 0.0_f64;
        intervals
            .iter()
            .map(|interval| {
                let span = if window_secs > 0.0 {
                    total_width * (interval.duration_secs_f64() / window_secs)
                } else {
                    0.0
                };
                let segment = Segment {
                    status: interval.status,
                    pixel_start: cursor,
                    pixel_end: cursor + span,
                    source: interval.source.clone(),
                };
                cursor += span;
                trace!(
                    status = %segment.status,
                    start = segment.pixel_start,
                    end = segment.pixel_end,
                    "Laid out segment"
                );
                segment
            })
            .collect()
    }

    /// Clamp every edge into `[0, total_width]`.
    ///
    /// Returns `true` when at least one edge moved by more than
    /// [`PIXEL_EPSILON`]; accumulated rounding at the right edge is clamped
    /// silently.
    pub fn clip_to_width(&self, segments: &mut [Segment], total_width: f64) -> bool {
        let limit = total_width.max(0.0);
        let mut clipped = false;
        for segment in segments.iter_mut() {
            let start = segment.pixel_start.clamp(0.0, limit);
            let end = segment.pixel_end.clamp(0.0, limit);
            clipped |= (start - segment.pixel_start).abs() > PIXEL_EPSILON
                || (end - segment.pixel_end).abs() > PIXEL_EPSILON;
            segment.pixel_start = start;
            segment.pixel_end = end;
        }
        clipped
    }

    /// Source of the first Down segment strictly containing `x`.
    pub fn hit_test(&self, segments: &[Segment], x: f64) -> Option<Arc<DowntimeInterval>> {
        segments
            .iter()
            .filter(|segment| segment.is_down())
            .find(|segment| segment.contains_x(x))
            .and_then(|segment| segment.source.clone())
    }
}

/// Shorthand for [`SegmentGeometryMapper::layout`].
pub fn layout(intervals: &[StatusInterval], total_width: f64) -> Vec<Segment> {
    SegmentGeometryMapper::new().layout(intervals, total_width)
}

/// Shorthand for [`SegmentGeometryMapper::hit_test`].
pub fn hit_test(segments: &[Segment], x: f64) -> Option<Arc<DowntimeInterval>> {
    SegmentGeometryMapper::new().hit_test(segments, x)
}
