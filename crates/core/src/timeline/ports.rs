//! Port interfaces for the timeline widget
//!
//! These traits define the boundary between the timeline logic and the host
//! UI toolkit that actually paints pixels and recognizes gestures.

use std::sync::Arc;

use uptimebar_domain::{Color, DowntimeInterval, DrawCommand, PixelSize};

/// Drawing surface supplied by the host for the duration of one render
///
/// Only borrowed for a single call, so no thread bounds are required.
pub trait RenderSurface {
    /// Paint the whole widget area before any segment is drawn.
    fn fill_background(&mut self, color: Color, size: PixelSize);

    /// Stroke one segment.
    fn draw_line(&mut self, command: &DrawCommand);
}

/// Receiver for taps that land on a downtime segment
pub trait DowntimeTapListener: Send + Sync {
    /// Called with the exact interval the host supplied.
    fn downtime_tapped(&self, interval: &Arc<DowntimeInterval>);
}
