//! Path conditioning pipelines
//!
//! Turns raw point sequences into clean, evenly spaced closed loops
//! ready for curvature analysis. Hand-drawn and procedurally generated
//! inputs take different routes: drawn paths need decimation and
//! simplification before smoothing, procedural base points need spline
//! densification first.

mod resample;
mod simplify;
mod smooth;
mod spline;

pub use resample::resample_path;
pub use simplify::simplify_path;
pub use smooth::smooth_path;
pub use spline::spline_interpolate_closed;

use crate::core::config::TrackConfig;
use crate::core::types::Point2;

/// Smoothing blends for the procedural sub-pipeline, coarse then fine
const PROCEDURAL_BLENDS: [f32; 2] = [0.3, 0.15];

/// Condition a freehand-drawn path into a closed, evenly spaced loop
///
/// Fixed stage order: predecessor-gap decimation, Douglas-Peucker
/// simplification, neighbor-averaging smoothing, endpoint merge when
/// the closure gap allows it, uniform resampling, and one final
/// smoothing pass over the closed loop. Inputs with fewer than 3
/// points are returned unchanged.
pub fn condition_drawn_path(raw: &[Point2], config: &TrackConfig) -> Vec<Point2> {
    if raw.len() < 3 {
        return raw.to_vec();
    }

    let decimated = drop_crowded_points(raw, config.min_segment_length * 0.5);
    let simplified = simplify_path(&decimated, config.simplify_tolerance);
    let smoothed = smooth_path(
        &simplified,
        config.smooth_iterations,
        config.smooth_blend,
        false,
    );
    // A path that did not close stays open through the final stages,
    // so the validator can still report the gap
    let (looped, closed) = close_loop_if_near(&smoothed, config.closure_threshold);
    let resampled = resample_path(&looped, config.resample_spacing, closed);
    smooth_path(&resampled, 1, config.smooth_blend, closed)
}

/// Condition sparse procedural base points into a dense closed loop
///
/// Spline-interpolates the base polygon, then applies two
/// neighbor-averaging passes with decreasing blends so the coarse pass
/// relaxes spline overshoot and the fine pass settles spacing. The
/// spline samples per-segment, so corner-template splices leave wildly
/// uneven spacing; a resampling pass between the two smoothings
/// restores the uniform step the validator's segment floor assumes.
pub fn condition_generated_path(base: &[Point2], config: &TrackConfig) -> Vec<Point2> {
    if base.len() < 3 {
        return base.to_vec();
    }

    let dense = spline_interpolate_closed(base, config.spline_subdivisions);
    let coarse = smooth_path(&dense, 1, PROCEDURAL_BLENDS[0], true);
    let resampled = resample_path(&coarse, config.resample_spacing, true);
    smooth_path(&resampled, 1, PROCEDURAL_BLENDS[1], true)
}

/// Drop points closer than `min_gap` to their predecessor
fn drop_crowded_points(points: &[Point2], min_gap: f32) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        match out.last() {
            Some(last) if last.distance(p) < min_gap => {}
            _ => out.push(*p),
        }
    }
    out
}

/// Merge the endpoints into their average if they are within
/// `threshold`, closing the loop
///
/// Averaging (rather than keeping one endpoint) splits the correction
/// between the start and end of the stroke; the policy lives here only.
/// The flag reports whether the merge happened.
fn close_loop_if_near(points: &[Point2], threshold: f32) -> (Vec<Point2>, bool) {
    if points.len() < 3 {
        return (points.to_vec(), false);
    }
    let first = points[0];
    let last = points[points.len() - 1];
    if first.distance(&last) > threshold {
        return (points.to_vec(), false);
    }
    let mut out = points.to_vec();
    out[0] = (first + last) * 0.5;
    out.pop();
    (out, true)
}
