//! Pixel-space types: points, sizes, segments and draw commands

use std::sync::Arc;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::color::Color;
use super::downtime::DowntimeInterval;
use super::status::AvailabilityStatus;

/// Point in the widget's local coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawable area handed in by the host before each render
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Vertical center line the bar is stroked along.
    pub fn mid_y(&self) -> f64 {
        self.height / 2.0
    }
}

/// Pixel-space rendering of one status interval
///
/// `source` carries the downtime behind a Down segment so hit-testing can
/// report it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Segment {
    pub status: AvailabilityStatus,
    pub pixel_start: f64,
    pub pixel_end: f64,
    pub source: Option<Arc<DowntimeInterval>>,
}

impl Segment {
    /// Signed width; negative only for inverted input.
    pub fn width(&self) -> f64 {
        self.pixel_end - self.pixel_start
    }

    /// Strict containment: both edges are excluded.
    pub fn contains_x(&self, x: f64) -> bool {
        x > self.pixel_start && x < self.pixel_end
    }

    pub fn is_down(&self) -> bool {
        self.status == AvailabilityStatus::Down
    }
}

/// One stroked line, as handed to the host surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DrawCommand {
    pub status: AvailabilityStatus,
    pub from: PixelPoint,
    pub to: PixelPoint,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub color: Color,
    pub thickness: f64,
}
