//! Horizontal timeline widget - render and tap handling
//!
//! The host calls [`HorizontalTimeline::render`] whenever the widget area is
//! invalidated and [`HorizontalTimeline::handle_tap`] for each tap. Both run
//! on the host's UI thread; `render` takes `&mut self` and `handle_tap` takes
//! `&self`, so they can never interleave.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};
use uptimebar_domain::{
    AvailabilitySummary, DowntimeInterval, PixelPoint, PixelSize, Result, Segment, TimeWindow,
    TimelineConfig,
};

use super::frame::plan_frame;
use super::ports::{DowntimeTapListener, RenderSurface};
use crate::geometry::SegmentCache;

/// Outcome of a successful render
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderReport {
    /// Cache generation holding this render's segments
    pub generation: u64,
    pub segment_count: usize,
    pub downtime_count: usize,
    pub clipped: bool,
    pub summary: AvailabilitySummary,
}

/// Horizontal up/down timeline widget
pub struct HorizontalTimeline {
    window: TimeWindow,
    downtimes: Vec<Arc<DowntimeInterval>>,
    config: TimelineConfig,
    listener: Option<Arc<dyn DowntimeTapListener>>,
    cache: SegmentCache,
    needs_render: bool,
}

impl HorizontalTimeline {
    /// Create a timeline over `window` with no downtimes.
    pub fn new(window: TimeWindow, config: TimelineConfig) -> Self {
        Self {
            window,
            downtimes: Vec::new(),
            config,
            listener: None,
            cache: SegmentCache::new(),
            needs_render: true,
        }
    }

    /// Set the downtimes shown by the timeline
    pub fn with_downtimes<I>(mut self, downtimes: I) -> Self
    where
        I: IntoIterator<Item = Arc<DowntimeInterval>>,
    {
        self.set_downtimes(downtimes);
        self
    }

    /// Register the receiver for downtime taps
    pub fn with_listener(mut self, listener: Arc<dyn DowntimeTapListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn set_window(&mut self, window: TimeWindow) {
        self.window = window;
        self.needs_render = true;
    }

    pub fn set_downtimes<I>(&mut self, downtimes: I)
    where
        I: IntoIterator<Item = Arc<DowntimeInterval>>,
    {
        self.downtimes = downtimes.into_iter().collect();
        self.needs_render = true;
    }

    pub fn set_config(&mut self, config: TimelineConfig) {
        self.config = config;
        self.needs_render = true;
    }

    pub fn set_listener(&mut self, listener: Option<Arc<dyn DowntimeTapListener>>) {
        self.listener = listener;
    }

    pub const fn window(&self) -> &TimeWindow {
        &self.window
    }

    pub fn downtimes(&self) -> &[Arc<DowntimeInterval>] {
        &self.downtimes
    }

    pub const fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Segments retained from the last render.
    pub fn segments(&self) -> &[Segment] {
        self.cache.segments()
    }

    /// True after construction or any input change until the next
    /// successful render. Taps keep using the previous segments meanwhile.
    pub const fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Paint the timeline onto `surface` and retain the segments.
    ///
    /// On error nothing is painted and the retained segments are dropped, so
    /// later taps miss until a render succeeds.
    pub fn render(&mut self, surface: &mut dyn RenderSurface, size: PixelSize) -> Result<RenderReport> {
        let frame = match plan_frame(&self.window, &self.downtimes, size, &self.config) {
            Ok(frame) => frame,
            Err(err) => {
                warn!(error = %err, "Timeline render rejected");
                self.cache.clear();
                return Err(err);
            }
        };

        surface.fill_background(frame.background, frame.size);
        for command in &frame.commands {
            surface.draw_line(command);
        }

        let segment_count = frame.segments.len();
        self.cache.replace(frame.segments);
        self.needs_render = false;

        let report = RenderReport {
            generation: self.cache.generation(),
            segment_count,
            downtime_count: self.downtimes.len(),
            clipped: frame.clipped,
            summary: frame.summary,
        };
        debug!(
            generation = report.generation,
            segments = report.segment_count,
            width = size.width,
            height = size.height,
            "Rendered timeline"
        );
        Ok(report)
    }

    /// Resolve a tap against the last render.
    ///
    /// Fires the listener and returns the interval when `point` lies strictly
    /// inside a Down segment; otherwise returns `None` and fires nothing.
    pub fn handle_tap(&self, point: PixelPoint) -> Option<Arc<DowntimeInterval>> {
        let hit = self.cache.hit_test(point);
        debug!(x = point.x, y = point.y, hit = ?hit.as_ref().map(|d| d.id), "Timeline tapped");

        if let (Some(interval), Some(listener)) = (hit.as_ref(), self.listener.as_ref()) {
            listener.downtime_tapped(interval);
        }
        hit
    }
}

impl fmt::Debug for HorizontalTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HorizontalTimeline")
            .field("window", &self.window)
            .field("downtimes", &self.downtimes.len())
            .field("config", &self.config)
            .field("has_listener", &self.listener.is_some())
            .field("cache_generation", &self.cache.generation())
            .field("needs_render", &self.needs_render)
            .finish()
    }
}
