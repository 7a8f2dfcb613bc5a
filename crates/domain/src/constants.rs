//! Timeline constants
//!
//! Centralized location for the domain-level defaults used by the widget.

// Geometry
/// Tolerance used when comparing accumulated pixel positions.
pub const PIXEL_EPSILON: f64 = 1e-6;

// Time
pub const MILLIS_PER_SECOND: f64 = 1_000.0;
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;
pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
pub const SECONDS_PER_DAY: i64 = 86_400;
