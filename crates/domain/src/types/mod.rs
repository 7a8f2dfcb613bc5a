//! Domain types and models
//!
//! Time-space types (windows, downtimes, status intervals) and the
//! pixel-space types the geometry mapper produces from them.

pub mod color;
pub mod downtime;
pub mod geometry;
pub mod status;
pub mod window;

pub use color::Color;
pub use downtime::DowntimeInterval;
pub use geometry::{DrawCommand, PixelPoint, PixelSize, Segment};
pub use status::{AvailabilitySummary, AvailabilityStatus, StatusInterval};
pub use window::TimeWindow;
