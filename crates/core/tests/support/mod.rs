//! Shared test helpers for `uptimebar-core` integration tests.
//!
//! Recording doubles for the host ports plus day-based time helpers, so the
//! scenario tests read in days the way the timeline is used.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use chrono::{DateTime, TimeZone, Utc};
use uptimebar_core::fixtures::days;
use uptimebar_core::{DowntimeTapListener, RenderSurface};
use uptimebar_domain::{Color, DowntimeInterval, DrawCommand, PixelSize, TimeWindow};

/// Install a test subscriber once per binary. Honors `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference instant for scenario tests.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap()
}

/// `now - days`, fractional days allowed.
pub fn days_ago(n: f64) -> DateTime<Utc> {
    now() - days(n)
}

/// Window of `n` days ending at [`now`].
pub fn window_of_days(n: f64) -> TimeWindow {
    TimeWindow::new(days_ago(n), now()).unwrap()
}

/// Shared downtime between two day offsets before [`now`].
pub fn downtime_days_ago(from: f64, to: f64) -> Arc<DowntimeInterval> {
    DowntimeInterval::shared(days_ago(from), days_ago(to))
}

/// Everything a render painted, in call order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub background: Option<(Color, PixelSize)>,
    pub lines: Vec<DrawCommand>,
    /// Set if a line arrives before the background
    pub out_of_order: bool,
}

impl RenderSurface for RecordingSurface {
    fn fill_background(&mut self, color: Color, size: PixelSize) {
        self.background = Some((color, size));
    }

    fn draw_line(&mut self, command: &DrawCommand) {
        if self.background.is_none() {
            self.out_of_order = true;
        }
        self.lines.push(*command);
    }
}

/// Listener that keeps every interval it was handed.
#[derive(Debug, Default)]
pub struct RecordingListener {
    tapped: Mutex<Vec<Arc<DowntimeInterval>>>,
}

impl RecordingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn tapped(&self) -> Vec<Arc<DowntimeInterval>> {
        self.tapped.lock().unwrap().clone()
    }
}

impl DowntimeTapListener for RecordingListener {
    fn downtime_tapped(&self, interval: &Arc<DowntimeInterval>) {
        self.tapped.lock().unwrap().push(Arc::clone(interval));
    }
}
