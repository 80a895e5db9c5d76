//! End-to-end pipeline tests: raw drawn points through conditioning,
//! curvature analysis and validation

use trackgen::conditioning::{condition_drawn_path, resample_path, simplify_path};
use trackgen::core::config::TrackConfig;
use trackgen::core::types::{Point2, TurnType};
use trackgen::curvature;
use trackgen::geometry;
use trackgen::validation::{can_auto_close, validate_track, ValidationError};

/// Opt-in log output for debugging test runs via RUST_LOG
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A jittery freehand circle, the typical editor input
fn drawn_circle(n: usize, radius: f32) -> Vec<Point2> {
    (0..n)
        .map(|i| {
            let a = i as f32 / n as f32 * std::f32::consts::TAU;
            let wobble = ((i * 7) % 5) as f32 * 0.3 - 0.6;
            Point2::new(a.cos() * (radius + wobble), a.sin() * (radius + wobble))
        })
        .collect()
}

#[test]
fn drawn_loop_conditions_into_valid_track() {
    init_tracing();
    let config = TrackConfig::default();
    let raw = drawn_circle(200, 60.0);
    let conditioned = condition_drawn_path(&raw, &config);
    let result = validate_track(&conditioned, None, &config);
    assert!(result.is_valid, "errors: {:?}", result.errors);
    assert!(result.stats.is_closed);
    assert!(result.stats.point_count >= config.min_point_count);
}

#[test]
fn conditioned_loop_feeds_curvature_analysis() {
    let config = TrackConfig::default();
    let raw = drawn_circle(200, 60.0);
    let conditioned = condition_drawn_path(&raw, &config);
    let data = curvature::analyze_path(&conditioned, true, &config);
    assert_eq!(data.len(), conditioned.len());
    // A radius-60 loop sits in the gentle/medium band throughout
    for d in &data {
        assert!(d.turn_type != TurnType::Hairpin);
        assert!(d.suggested_width >= config.min_track_width);
        assert!(d.suggested_width <= config.max_track_width);
    }
}

#[test]
fn unit_square_scenarios() {
    let square = vec![
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
    ];
    assert_eq!(geometry::path_length(&square, true), 40.0);
    assert!(geometry::point_in_polygon(Point2::new(5.0, 5.0), &square));
    assert!(!geometry::point_in_polygon(Point2::new(15.0, 5.0), &square));
}

#[test]
fn crossing_diagonals_scenario() {
    let a1 = Point2::new(0.0, 0.0);
    let a2 = Point2::new(10.0, 10.0);
    let b1 = Point2::new(0.0, 10.0);
    let b2 = Point2::new(10.0, 0.0);
    assert!(geometry::segments_intersect(a1, a2, b1, b2));
    let p = geometry::segment_intersection(a1, a2, b1, b2).unwrap();
    assert!((p.x - 5.0).abs() < 1e-4);
    assert!((p.z - 5.0).abs() < 1e-4);
}

#[test]
fn five_points_fail_without_masking_other_checks() {
    let config = TrackConfig::default();
    let pts = vec![
        Point2::new(0.0, 0.0),
        Point2::new(60.0, 0.0),
        Point2::new(60.0, 60.0),
        Point2::new(0.0, 60.0),
        Point2::new(-50.0, 30.0),
    ];
    let result = validate_track(&pts, None, &config);
    assert!(!result.is_valid);
    assert!(result
        .errors
        .iter()
        .any(|e| matches!(e, ValidationError::TooFewPoints { count: 5, minimum: 8 })));
    // The closure check still ran and reported independently
    assert!(result
        .errors
        .iter()
        .any(|e| matches!(e, ValidationError::NotClosed { .. })));
    // Stats are computed even for invalid input
    assert_eq!(result.stats.point_count, 5);
    assert!(result.stats.length > 0.0);
}

#[test]
fn simplification_then_resampling_preserves_shape() {
    let config = TrackConfig::default();
    let raw = drawn_circle(300, 70.0);
    let simplified = simplify_path(&raw, config.simplify_tolerance);
    assert!(simplified.len() < raw.len());
    let resampled = resample_path(&simplified, config.resample_spacing, true);
    let perimeter = geometry::path_length(&resampled, true);
    let expected = std::f32::consts::TAU * 70.0;
    assert!(
        (perimeter - expected).abs() < expected * 0.1,
        "perimeter {} vs expected {}",
        perimeter,
        expected
    );
}

#[test]
fn nearly_closed_drawing_can_auto_close() {
    let config = TrackConfig::default();
    let mut raw = drawn_circle(200, 60.0);
    // Stop drawing slightly short of the start
    raw.truncate(196);
    assert!(can_auto_close(&raw, &config));
}

#[test]
fn straight_line_cannot_auto_close() {
    let config = TrackConfig::default();
    let line: Vec<Point2> = (0..30).map(|i| Point2::new(i as f32 * 5.0, 0.0)).collect();
    assert!(!can_auto_close(&line, &config));
}
