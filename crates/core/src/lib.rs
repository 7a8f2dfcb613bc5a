//! # Uptimebar Core
//!
//! Pure timeline logic - no UI toolkit dependencies.
//!
//! This crate contains:
//! - Interval compilation (window + downtimes into Up/Down intervals)
//! - Pixel geometry (proportional layout, clipping, hit-testing)
//! - The `HorizontalTimeline` widget controller and its host ports
//!
//! ## Architecture Principles
//! - Only depends on `uptimebar-domain`
//! - No drawing or gesture code
//! - Painting and tap delivery go through traits
//! - Pure, testable logic

pub mod compiler;
pub mod fixtures;
pub mod geometry;
pub mod timeline;
pub mod validation;

pub use compiler::IntervalCompiler;
pub use geometry::{SegmentCache, SegmentGeometryMapper};
pub use timeline::{
    plan_frame, DowntimeTapListener, Frame, HorizontalTimeline, RenderReport, RenderSurface,
};
pub use validation::{validate_downtimes, validate_input, validate_window};
