//! End-to-end timeline scenarios
//!
//! Drives compile, layout, render and tap handling through the public API
//! with recording doubles standing in for the host toolkit.

mod support;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use support::{
    days_ago, downtime_days_ago, init_tracing, now, window_of_days, RecordingListener,
    RecordingSurface,
};
use uptimebar_core::compiler::compile;
use uptimebar_core::fixtures::{days, two_week_sample};
use uptimebar_core::{DowntimeTapListener, HorizontalTimeline};
use uptimebar_domain::{
    AvailabilityStatus, Color, DowntimeInterval, OverflowPolicy, PixelPoint, PixelSize,
    TimeWindow, TimelineConfig, TimelineError, ValidationMode,
};

/// Day `x` of a 14-day window ending at `now()`.
fn day(x: f64) -> DateTime<Utc> {
    days_ago(14.0) + days(x)
}

fn two_weeks() -> TimeWindow {
    window_of_days(14.0)
}

/// 100 px per day over two weeks.
fn bar() -> PixelSize {
    PixelSize::new(1400.0, 20.0)
}

fn at(x: f64) -> PixelPoint {
    PixelPoint::new(x, 10.0)
}

// ============================================================================
// Compilation scenarios
// ============================================================================

#[test]
fn test_two_outages_compile_to_five_intervals() {
    let downtimes = vec![
        DowntimeInterval::shared(day(2.0), day(2.8)),
        DowntimeInterval::shared(day(6.0), day(7.3)),
    ];

    let intervals = compile(&two_weeks(), &downtimes);

    let expected = [
        (AvailabilityStatus::Up, day(0.0), day(2.0)),
        (AvailabilityStatus::Down, day(2.0), day(2.8)),
        (AvailabilityStatus::Up, day(2.8), day(6.0)),
        (AvailabilityStatus::Down, day(6.0), day(7.3)),
        (AvailabilityStatus::Up, day(7.3), day(14.0)),
    ];
    assert_eq!(intervals.len(), expected.len());
    for (interval, (status, start, end)) in intervals.iter().zip(expected) {
        assert_eq!(interval.status, status);
        assert_eq!(interval.interval.start, start);
        assert_eq!(interval.interval.end, end);
    }
    assert!(Arc::ptr_eq(intervals[1].source.as_ref().unwrap(), &downtimes[0]));
    assert!(Arc::ptr_eq(intervals[3].source.as_ref().unwrap(), &downtimes[1]));
}

#[test]
fn test_outage_starting_before_window_is_trimmed() {
    let downtimes = vec![DowntimeInterval::shared(day(-2.0), day(1.0))];

    let intervals = compile(&two_weeks(), &downtimes);

    assert_eq!(intervals.len(), 2);
    assert_eq!(intervals[0].status, AvailabilityStatus::Down);
    assert_eq!(intervals[0].interval, TimeWindow::span(day(0.0), day(1.0)));
    assert_eq!(intervals[1].status, AvailabilityStatus::Up);
    assert_eq!(intervals[1].interval, TimeWindow::span(day(1.0), day(14.0)));
    // The interval still reports the caller's untrimmed downtime
    assert_eq!(intervals[0].source.as_ref().unwrap().start, day(-2.0));
}

// ============================================================================
// Render + tap scenarios
// ============================================================================

#[test]
fn test_two_week_sample_renders_and_resolves_taps() {
    init_tracing();
    let sample = two_week_sample(now());
    let listener = RecordingListener::new();
    let mut timeline = HorizontalTimeline::new(sample.window, TimelineConfig::default())
        .with_downtimes(sample.downtimes.iter().cloned())
        .with_listener(listener.clone() as Arc<dyn DowntimeTapListener>);
    let mut surface = RecordingSurface::default();

    let report = timeline.render(&mut surface, bar()).unwrap();

    assert_eq!(report.segment_count, 5);
    assert_eq!(report.downtime_count, 2);
    assert!(!report.clipped);
    assert_eq!(report.summary.down_millis, days(2.1).num_milliseconds());
    assert_eq!(report.summary.up_millis, days(11.9).num_milliseconds());

    // Outages sit at 200..280 and 600..730
    let first = timeline.handle_tap(at(240.0)).unwrap();
    let second = timeline.handle_tap(at(700.0)).unwrap();
    assert!(Arc::ptr_eq(&first, &sample.downtimes[0]));
    assert!(Arc::ptr_eq(&second, &sample.downtimes[1]));

    for miss in [0.0, 100.0, 400.0, 1000.0, 1399.0, 1500.0, -5.0] {
        assert!(timeline.handle_tap(at(miss)).is_none(), "x = {miss} should miss");
    }

    let tapped = listener.tapped();
    assert_eq!(tapped.len(), 2);
    assert!(Arc::ptr_eq(&tapped[0], &sample.downtimes[0]));
    assert!(Arc::ptr_eq(&tapped[1], &sample.downtimes[1]));
}

#[test]
fn test_segment_edges_are_not_hits() {
    let downtime = DowntimeInterval::shared(day(2.0), day(3.0));
    let mut timeline = HorizontalTimeline::new(two_weeks(), TimelineConfig::default())
        .with_downtimes([Arc::clone(&downtime)]);
    timeline.render(&mut RecordingSurface::default(), bar()).unwrap();

    let segment = &timeline.segments()[1];
    assert!(timeline.handle_tap(at(segment.pixel_start)).is_none());
    assert!(timeline.handle_tap(at(segment.pixel_end)).is_none());
    assert!(timeline.handle_tap(at(segment.pixel_start + 0.5)).is_some());
}

#[test]
fn test_zero_downtimes_never_hit() {
    let listener = RecordingListener::new();
    let mut timeline = HorizontalTimeline::new(two_weeks(), TimelineConfig::default())
        .with_listener(listener.clone() as Arc<dyn DowntimeTapListener>);
    let mut surface = RecordingSurface::default();

    timeline.render(&mut surface, bar()).unwrap();

    assert_eq!(surface.lines.len(), 1);
    assert_eq!(surface.lines[0].status, AvailabilityStatus::Up);
    let mut x = -50.0;
    while x <= 1450.0 {
        assert!(timeline.handle_tap(at(x)).is_none());
        x += 12.5;
    }
    assert!(listener.tapped().is_empty());
}

#[test]
fn test_surface_receives_background_then_centered_lines() {
    let sample = two_week_sample(now());
    let mut timeline = HorizontalTimeline::new(sample.window, TimelineConfig::default())
        .with_downtimes(sample.downtimes);
    let mut surface = RecordingSurface::default();

    timeline.render(&mut surface, bar()).unwrap();

    assert!(!surface.out_of_order);
    assert_eq!(surface.background, Some((Color::WHITE, bar())));
    let colors: Vec<Color> = surface.lines.iter().map(|line| line.color).collect();
    assert_eq!(colors, [Color::GREEN, Color::RED, Color::GREEN, Color::RED, Color::GREEN]);
    for line in &surface.lines {
        assert_eq!(line.from.y, 10.0);
        assert_eq!(line.to.y, 10.0);
        assert_eq!(line.thickness, 20.0);
    }
    // Contiguous from the left edge to the right edge
    assert_eq!(surface.lines[0].from.x, 0.0);
    for pair in surface.lines.windows(2) {
        assert_eq!(pair[0].to.x, pair[1].from.x);
    }
    assert!((surface.lines[4].to.x - 1400.0).abs() < 1e-6);
}

// ============================================================================
// Configuration and validation
// ============================================================================

#[test]
fn test_toml_config_drives_render() {
    let config = TimelineConfig::from_toml_str(
        r##"
overflow = "preserve"

[style]
down_color = "#000000"
"##,
    )
    .unwrap();
    assert_eq!(config.overflow, OverflowPolicy::Preserve);

    let overflowing = downtime_days_ago(1.0, -1.0);
    let mut timeline =
        HorizontalTimeline::new(two_weeks(), config).with_downtimes([overflowing]);
    let mut surface = RecordingSurface::default();

    let report = timeline.render(&mut surface, bar()).unwrap();

    assert!(!report.clipped);
    let last = surface.lines.last().unwrap();
    assert_eq!(last.color, Color::BLACK);
    assert!((last.to.x - 1500.0).abs() < 1e-6);
}

#[test]
fn test_default_config_clips_overflow() {
    let overflowing = downtime_days_ago(1.0, -1.0);
    let mut timeline = HorizontalTimeline::new(two_weeks(), TimelineConfig::default())
        .with_downtimes([overflowing]);
    let mut surface = RecordingSurface::default();

    let report = timeline.render(&mut surface, bar()).unwrap();

    assert!(report.clipped);
    assert_eq!(surface.lines.last().unwrap().to.x, 1400.0);
    assert!(timeline.handle_tap(at(1399.0)).is_some());
}

#[test]
fn test_strict_mode_reports_overlap_and_draws_nothing() {
    init_tracing();
    let mut timeline = HorizontalTimeline::new(two_weeks(), TimelineConfig::default())
        .with_downtimes([
            DowntimeInterval::shared(day(2.0), day(4.0)),
            DowntimeInterval::shared(day(3.0), day(5.0)),
        ]);
    let mut surface = RecordingSurface::default();

    let err = timeline.render(&mut surface, bar()).unwrap_err();

    assert_eq!(err, TimelineError::OverlappingDowntime { index: 1 });
    assert!(err.is_input_fault());
    assert_eq!(err.downtime_index(), Some(1));
    assert!(surface.background.is_none());
    assert!(surface.lines.is_empty());
}

#[test]
fn test_permissive_mode_renders_unsorted_list() {
    let later = DowntimeInterval::shared(day(6.0), day(7.0));
    let earlier = DowntimeInterval::shared(day(2.0), day(3.0));
    let config = TimelineConfig::default()
        .with_validation(ValidationMode::Permissive)
        .with_overflow(OverflowPolicy::Preserve);
    let mut timeline = HorizontalTimeline::new(two_weeks(), config)
        .with_downtimes([Arc::clone(&later), Arc::clone(&earlier)]);

    let report = timeline.render(&mut RecordingSurface::default(), bar()).unwrap();

    assert_eq!(report.segment_count, 5);
    let downs: Vec<_> = timeline.segments().iter().filter(|s| s.is_down()).collect();
    assert_eq!(downs.len(), 2);
    assert!(Arc::ptr_eq(downs[0].source.as_ref().unwrap(), &later));
    assert!(Arc::ptr_eq(downs[1].source.as_ref().unwrap(), &earlier));
}

#[test]
fn test_inverted_window_is_rejected() {
    let inverted = TimeWindow::span(now(), days_ago(3.0));
    assert!(TimeWindow::new(inverted.start, inverted.end).is_err());

    let mut timeline = HorizontalTimeline::new(inverted, TimelineConfig::default());
    let err = timeline.render(&mut RecordingSurface::default(), bar()).unwrap_err();

    assert!(matches!(err, TimelineError::InvalidWindow { .. }));
    assert!(timeline.segments().is_empty());
}

#[test]
fn test_downtime_display_matches_alert_text() {
    let sample = two_week_sample(now());
    let text = sample.downtimes[0].to_string();
    assert_eq!(text, "start: 2024-09-19T12:00:00Z end: 2024-09-20T07:12:00Z");
}
