//! # Uptimebar Domain
//!
//! Domain types and models for the Uptimebar availability timeline.
//!
//! This crate contains:
//! - Timeline data types (TimeWindow, DowntimeInterval, StatusInterval,
//!   Segment, DrawCommand)
//! - Domain error types and Result definitions
//! - Configuration structures (style, overflow and validation policies)
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Uptimebar crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
