//! Per-point curvature analysis and derived track attributes
//!
//! Curvature is measured with the Menger formula over each point and
//! its immediate neighbors, smoothed with a centered moving average,
//! then mapped to a turn classification, a suggested width (continuous
//! ramp) and a suggested speed (stepped tiers).

use std::collections::HashMap;

use crate::core::config::TrackConfig;
use crate::core::types::{CurvatureData, Difficulty, Point2, TurnType};
use crate::geometry;

/// Unsigned Menger curvature of three consecutive points
///
/// Four times the triangle area divided by the product of the three
/// side lengths; the reciprocal of the circumscribed-circle radius.
/// Scale-sensitive, orientation-insensitive, zero for collinear or
/// degenerate triples.
pub fn menger_curvature(a: Point2, b: Point2, c: Point2) -> f32 {
    let ab = a.distance(&b);
    let bc = b.distance(&c);
    let ca = c.distance(&a);
    let denom = ab * bc * ca;
    if denom <= 1e-6 {
        return 0.0;
    }
    // cross is twice the signed triangle area
    2.0 * geometry::cross(a, b, c).abs() / denom
}

/// Raw per-point Menger curvature over a path
///
/// Neighbors wrap on closed paths; on open paths the clamped end
/// triples are collinear by construction and read as zero curvature.
pub fn curvature_profile(points: &[Point2], closed: bool) -> Vec<f32> {
    let n = points.len();
    if n < 3 {
        return vec![0.0; n];
    }
    (0..n)
        .map(|i| {
            let prev = if closed {
                points[(i + n - 1) % n]
            } else {
                points[i.saturating_sub(1)]
            };
            let next = if closed {
                points[(i + 1) % n]
            } else {
                points[(i + 1).min(n - 1)]
            };
            menger_curvature(prev, points[i], next)
        })
        .collect()
}

/// Centered moving average over curvature samples
///
/// Window is forced odd so it centers on the sample. Closed profiles
/// wrap; open ones clamp at the ends (shrinking the effective window).
pub fn smooth_curvature(values: &[f32], window: usize, closed: bool) -> Vec<f32> {
    let n = values.len();
    if n == 0 || window <= 1 {
        return values.to_vec();
    }
    let half = (window | 1) / 2;
    (0..n)
        .map(|i| {
            let mut sum = 0.0;
            let mut count = 0usize;
            for offset in -(half as isize)..=(half as isize) {
                let idx = i as isize + offset;
                let idx = if closed {
                    idx.rem_euclid(n as isize) as usize
                } else if idx < 0 || idx >= n as isize {
                    continue;
                } else {
                    idx as usize
                };
                sum += values[idx];
                count += 1;
            }
            sum / count as f32
        })
        .collect()
}

/// Classify a curvature sample into a turn band
pub fn classify_turn(curvature: f32, config: &TrackConfig) -> TurnType {
    if curvature < config.curvature_straight {
        TurnType::Straight
    } else if curvature < config.curvature_gentle {
        TurnType::Gentle
    } else if curvature < config.curvature_medium {
        TurnType::Medium
    } else if curvature < config.curvature_tight {
        TurnType::Tight
    } else {
        TurnType::Hairpin
    }
}

/// Width ramp: maximum on straights, linearly narrowing to the minimum
/// at the hairpin threshold and clamped beyond it
pub fn suggested_width(curvature: f32, config: &TrackConfig) -> f32 {
    if curvature <= config.curvature_straight {
        return config.max_track_width;
    }
    if curvature >= config.curvature_hairpin {
        return config.min_track_width;
    }
    let t = (curvature - config.curvature_straight)
        / (config.curvature_hairpin - config.curvature_straight);
    config.max_track_width + (config.min_track_width - config.max_track_width) * t
}

/// Stepped speed tier for a turn type
///
/// Deliberately not interpolated: limits read as discrete gears.
pub fn suggested_speed(turn_type: TurnType, config: &TrackConfig) -> f32 {
    config.speed_tiers[turn_type as usize]
}

/// Full per-point analysis: smoothed curvature plus derived attributes
pub fn analyze_path(points: &[Point2], closed: bool, config: &TrackConfig) -> Vec<CurvatureData> {
    let raw = curvature_profile(points, closed);
    let smoothed = smooth_curvature(&raw, config.curvature_window, closed);
    smoothed
        .iter()
        .map(|&curvature| {
            let turn_type = classify_turn(curvature, config);
            CurvatureData {
                curvature,
                suggested_width: suggested_width(curvature, config),
                suggested_speed: suggested_speed(turn_type, config),
                turn_type,
            }
        })
        .collect()
}

/// Indices of local curvature maxima above `min_curvature`
///
/// Neighbors wrap: the profile is assumed to describe a closed loop.
pub fn find_corners(curvatures: &[f32], min_curvature: f32) -> Vec<usize> {
    let n = curvatures.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n)
        .filter(|&i| {
            let c = curvatures[i];
            c >= min_curvature
                && c >= curvatures[(i + n - 1) % n]
                && c >= curvatures[(i + 1) % n]
        })
        .collect()
}

/// Count contiguous same-type runs, once per run rather than per point
///
/// A run spanning the wrap-around seam of the closed loop is counted
/// once.
pub fn count_turns_by_type(data: &[CurvatureData]) -> HashMap<TurnType, usize> {
    let mut counts = HashMap::new();
    let n = data.len();
    if n == 0 {
        return counts;
    }
    let mut run_starts = 0usize;
    for i in 0..n {
        let prev = data[(i + n - 1) % n].turn_type;
        if data[i].turn_type != prev {
            *counts.entry(data[i].turn_type).or_insert(0) += 1;
            run_starts += 1;
        }
    }
    if run_starts == 0 {
        // Uniform loop: one run of the single type
        *counts.entry(data[0].turn_type).or_insert(0) += 1;
    }
    counts
}

/// Coarse difficulty estimate from turn-run counts
pub fn estimate_difficulty(data: &[CurvatureData]) -> Difficulty {
    let counts = count_turns_by_type(data);
    let hairpins = counts.get(&TurnType::Hairpin).copied().unwrap_or(0);
    let tights = counts.get(&TurnType::Tight).copied().unwrap_or(0);
    let mediums = counts.get(&TurnType::Medium).copied().unwrap_or(0);

    if hairpins >= 3 || hairpins + tights >= 6 {
        Difficulty::Expert
    } else if hairpins >= 1 || tights >= 3 {
        Difficulty::Hard
    } else if tights >= 1 || mediums >= 2 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

/// Mean corner radius over samples above `min_curvature`
///
/// `None` when no sample qualifies: a track with no corners has no
/// meaningful radius, and callers must handle that explicitly.
pub fn average_corner_radius(curvatures: &[f32], min_curvature: f32) -> Option<f32> {
    let corners: Vec<f32> = curvatures
        .iter()
        .copied()
        .filter(|&c| c >= min_curvature)
        .collect();
    if corners.is_empty() {
        return None;
    }
    let mean = corners.iter().sum::<f32>() / corners.len() as f32;
    if mean <= 1e-6 {
        None
    } else {
        Some(1.0 / mean)
    }
}
