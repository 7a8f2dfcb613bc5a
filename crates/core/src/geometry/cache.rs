//! Retained segment list shared between render and tap handling
//!
//! Contract: the render path is the only writer and replaces the whole list
//! through `&mut self`; the tap path only reads through `&self`. The borrow
//! checker therefore rules out a tap observing a half-written list.

use std::sync::Arc;

use uptimebar_domain::{DowntimeInterval, PixelPoint, Segment};

use super::mapper::SegmentGeometryMapper;

/// Segments from the most recent render
#[derive(Debug, Clone, Default)]
pub struct SegmentCache {
    segments: Vec<Segment>,
    generation: u64,
}

impl SegmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in the segments of a new render.
    pub fn replace(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Drop the retained segments (a failed render leaves nothing tappable).
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of replacements so far, including clears.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn down_segment_count(&self) -> usize {
        self.segments.iter().filter(|segment| segment.is_down()).count()
    }

    /// Downtime under `point`, if any. Only the x coordinate is considered.
    pub fn hit_test(&self, point: PixelPoint) -> Option<Arc<DowntimeInterval>> {
        SegmentGeometryMapper::new().hit_test(&self.segments, point.x)
    }
}
