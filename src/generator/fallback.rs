//! Deterministic fallback tracks
//!
//! Closed-form parametric layouts used when full procedural generation
//! exhausts its attempts, and as stable test fixtures. These bypass
//! the random/template machinery and feed their point sets straight
//! into curvature analysis.

use crate::core::config::TrackConfig;
use crate::core::types::{Difficulty, Point2, Waypoint};

use super::build_waypoints;

const OVAL_POINT_COUNT: usize = 64;
const FIGURE8_POINT_COUNT: usize = 64;

/// Ellipse-shaped track filling most of the world
///
/// Always validator-clean: closed, non-intersecting, with gentle and
/// medium corners only.
pub fn generate_oval_track(world_size: f32) -> Vec<Waypoint> {
    let a = world_size * 0.4;
    let b = world_size * 0.28;
    let points: Vec<Point2> = (0..OVAL_POINT_COUNT)
        .map(|i| {
            let t = i as f32 / OVAL_POINT_COUNT as f32 * std::f32::consts::TAU;
            Point2::new(t.cos() * a, t.sin() * b)
        })
        .collect();
    build_waypoints(&points, Difficulty::Medium, &TrackConfig::default())
}

/// Figure-eight track (lemniscate of Gerono)
///
/// Intentionally self-intersects at the crossing point, so it does not
/// pass the validator's intersection check. Callers wanting a
/// validator-clean fallback use the oval.
pub fn generate_figure8_track(world_size: f32) -> Vec<Waypoint> {
    let a = world_size * 0.45;
    let points: Vec<Point2> = (0..FIGURE8_POINT_COUNT)
        .map(|i| {
            let t = i as f32 / FIGURE8_POINT_COUNT as f32 * std::f32::consts::TAU;
            Point2::new(t.sin() * a, t.sin() * t.cos() * a)
        })
        .collect();
    build_waypoints(&points, Difficulty::Medium, &TrackConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_track, ValidationError};

    fn positions(waypoints: &[Waypoint]) -> Vec<Point2> {
        waypoints.iter().map(|w| w.position()).collect()
    }

    #[test]
    fn test_oval_is_validator_clean() {
        let track = generate_oval_track(200.0);
        let config = TrackConfig::default();
        let result = validate_track(&positions(&track), None, &config);
        assert!(result.is_valid, "errors: {:?}", result.errors);
        assert!(result.stats.is_closed);
    }

    #[test]
    fn test_oval_has_four_checkpoints() {
        let track = generate_oval_track(200.0);
        let checkpoints = track.iter().filter(|w| w.is_checkpoint).count();
        assert_eq!(checkpoints, 4);
        assert!(track[0].is_checkpoint);
    }

    #[test]
    fn test_figure8_self_intersects() {
        let track = generate_figure8_track(200.0);
        let config = TrackConfig::default();
        let result = validate_track(&positions(&track), None, &config);
        assert!(result
            .errors
            .iter()
            .any(|e| matches!(e, ValidationError::SelfIntersection { .. })));
    }

    #[test]
    fn test_fallbacks_are_deterministic() {
        assert_eq!(generate_oval_track(200.0), generate_oval_track(200.0));
        assert_eq!(generate_figure8_track(150.0), generate_figure8_track(150.0));
    }

    #[test]
    fn test_oval_widths_within_bounds() {
        let config = TrackConfig::default();
        for w in generate_oval_track(200.0) {
            assert!(w.width >= config.min_track_width);
            assert!(w.width <= config.max_track_width);
            assert!(w.speed_limit > 0.0);
        }
    }
}
