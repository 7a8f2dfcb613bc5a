//! Frame planning - the pure half of a render
//!
//! `plan_frame` runs validation, compilation, layout and the overflow policy
//! and returns everything a surface needs to paint, plus the segments to
//! retain for hit-testing. It touches no state.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};
use uptimebar_domain::constants::PIXEL_EPSILON;
use uptimebar_domain::{
    AvailabilitySummary, Color, DowntimeInterval, DrawCommand, OverflowPolicy, PixelPoint,
    PixelSize, Result, Segment, TimeWindow, TimelineConfig, TimelineStyle, ValidationMode,
};

use crate::compiler::IntervalCompiler;
use crate::geometry::SegmentGeometryMapper;
use crate::validation::{validate_downtimes, validate_window};

/// Everything produced for one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub size: PixelSize,
    pub background: Color,
    pub commands: Vec<DrawCommand>,
    pub segments: Vec<Segment>,
    pub summary: AvailabilitySummary,
    /// Whether the overflow policy moved any segment edge
    pub clipped: bool,
}

/// Build the frame for `window` and `downtimes` at `size`.
///
/// # Errors
/// - `InvalidWindow` whenever the window is inverted.
/// - The first malformed-downtime error in [`ValidationMode::Strict`]; in
///   [`ValidationMode::Permissive`] the error is logged and the degenerate
///   layout is produced instead.
pub fn plan_frame(
    window: &TimeWindow,
    downtimes: &[Arc<DowntimeInterval>],
    size: PixelSize,
    config: &TimelineConfig,
) -> Result<Frame> {
    validate_window(window)?;

    if let Err(err) = validate_downtimes(window, downtimes) {
        match config.validation {
            ValidationMode::Strict => return Err(err),
            ValidationMode::Permissive => {
                warn!(error = %err, "Rendering malformed downtime list");
            }
        }
    }

    let compiler = IntervalCompiler::new();
    let intervals = compiler.compile(window, downtimes);
    let summary = compiler.summarize(&intervals);

    let mapper = SegmentGeometryMapper::new();
    let mut segments = mapper.layout_in_window(&intervals, window, size.width);

    let clipped = match config.overflow {
        OverflowPolicy::Clip => mapper.clip_to_width(&mut segments, size.width),
        OverflowPolicy::Preserve => {
            if overflows(&segments, size.width) {
                warn!(width = size.width, "Segments extend past the drawable width");
            }
            false
        }
    };

    let commands = draw_commands(&segments, size, &config.style);

    debug!(
        downtimes = downtimes.len(),
        segments = segments.len(),
        clipped,
        "Planned timeline frame"
    );

    Ok(Frame {
        size,
        background: config.style.background_color,
        commands,
        segments,
        summary,
        clipped,
    })
}

/// One horizontal stroke per segment along the vertical center, as thick as
/// the widget is tall.
pub fn draw_commands(segments: &[Segment], size: PixelSize, style: &TimelineStyle) -> Vec<DrawCommand> {
    let y = size.mid_y();
    segments
        .iter()
        .map(|segment| DrawCommand {
            status: segment.status,
            from: PixelPoint::new(segment.pixel_start, y),
            to: PixelPoint::new(segment.pixel_end, y),
            color: style.color_for(segment.status),
            thickness: size.height,
        })
        .collect()
}

fn overflows(segments: &[Segment], width: f64) -> bool {
    let outside = |x: f64| x < -PIXEL_EPSILON || x > width + PIXEL_EPSILON;
    segments.iter().any(|segment| outside(segment.pixel_start) || outside(segment.pixel_end))
}
