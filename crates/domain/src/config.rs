//! Timeline configuration
//!
//! Style and policy values are passed explicitly into every render; nothing
//! here is global. Every field has a default, so partial TOML/JSON documents
//! are accepted.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::impl_status_conversions;
use crate::types::{AvailabilityStatus, Color};

/// Timeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub overflow: OverflowPolicy,
    pub validation: ValidationMode,
    pub style: TimelineStyle,
}

/// Colors used to paint the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineStyle {
    pub up_color: Color,
    pub down_color: Color,
    pub background_color: Color,
}

/// What to do with geometry that extends past the drawable width
///
/// A downtime ending after the window end produces a Down interval longer
/// than the window, so the raw layout overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Clamp every segment edge into `[0, width]`.
    #[default]
    Clip,
    /// Keep the raw proportional geometry, overflow included.
    Preserve,
}

/// How malformed downtime lists are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Reject the render with the offending error kind.
    #[default]
    Strict,
    /// Log and render the degenerate layout anyway.
    Permissive,
}

impl_status_conversions!(OverflowPolicy {
    Clip => "clip",
    Preserve => "preserve",
});

impl_status_conversions!(ValidationMode {
    Strict => "strict",
    Permissive => "permissive",
});

impl Default for TimelineStyle {
    fn default() -> Self {
        Self { up_color: Color::GREEN, down_color: Color::RED, background_color: Color::WHITE }
    }
}

impl TimelineStyle {
    /// Stroke color for a status.
    pub const fn color_for(&self, status: AvailabilityStatus) -> Color {
        match status {
            AvailabilityStatus::Up => self.up_color,
            AvailabilityStatus::Down => self.down_color,
        }
    }
}

impl TimelineConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Parse a JSON document; missing keys take their defaults.
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_style(mut self, style: TimelineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }
}
