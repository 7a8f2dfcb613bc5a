//! Input validation for windows and downtime lists
//!
//! The compiler trusts its input. These checks catch the inputs that would
//! make it produce inverted or overlapping geometry, and name the offending
//! downtime by index.

use std::sync::Arc;

use uptimebar_domain::{DowntimeInterval, Result, TimeWindow, TimelineError};

/// Check that the window is not inverted.
pub fn validate_window(window: &TimeWindow) -> Result<()> {
    window.validate()
}

/// Check a downtime list against the compiler's input contract.
///
/// Rules, applied per downtime in order (first failure wins):
/// 1. `start <= end`
/// 2. `start` is not before the previous downtime's `start`
/// 3. `start` is not before the previous downtime's `end` (touching is fine)
/// 4. the downtime shares at least one instant with the window
pub fn validate_downtimes(window: &TimeWindow, downtimes: &[Arc<DowntimeInterval>]) -> Result<()> {
    for (index, downtime) in downtimes.iter().enumerate() {
        if downtime.is_inverted() {
            return Err(TimelineError::InvertedDowntime { index });
        }

        if let Some(previous) = index.checked_sub(1).and_then(|p| downtimes.get(p)) {
            if downtime.start < previous.start {
                return Err(TimelineError::UnorderedDowntime { index, previous: index - 1 });
            }
            if downtime.start < previous.end {
                return Err(TimelineError::OverlappingDowntime { index });
            }
        }

        if !window.overlaps(&downtime.span()) {
            return Err(TimelineError::DowntimeOutsideWindow { index });
        }
    }

    Ok(())
}

/// Window check followed by the downtime checks.
pub fn validate_input(window: &TimeWindow, downtimes: &[Arc<DowntimeInterval>]) -> Result<()> {
    validate_window(window)?;
    validate_downtimes(window, downtimes)
}
