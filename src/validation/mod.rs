//! Track validation
//!
//! A pure function from a conditioned point sequence (plus optional
//! per-point widths) to a [`ValidationResult`]. Every check runs on
//! every call; nothing short-circuits, so one call reports every
//! problem at once. Errors block acceptance, warnings never do.

use serde::{Deserialize, Serialize};

use crate::core::config::TrackConfig;
use crate::core::types::{Bounds, Difficulty, Point2, TurnType};
use crate::curvature;
use crate::geometry;

/// Blocking validation problems
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    TooFewPoints { count: usize, minimum: usize },
    NotClosed { gap: f32, location: Point2 },
    TooShort { length: f32, minimum: f32 },
    SelfIntersection { segment_a: usize, segment_b: usize, near: Point2 },
    SegmentTooShort { index: usize, length: f32, minimum: f32 },
    TooNarrow { width: f32, minimum: f32 },
}

/// Advisory findings; never block acceptance
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    TooLong { length: f32, maximum: f32 },
    ExcessiveHairpins { share: f32 },
    NoStraights,
}

/// Summary statistics, computed regardless of validity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackStats {
    pub length: f32,
    pub point_count: usize,
    pub turn_count: usize,
    pub avg_width: f32,
    pub min_width: f32,
    pub difficulty: Difficulty,
    pub bounds: Bounds,
    pub is_closed: bool,
}

/// Outcome of validating one point sequence
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    pub stats: TrackStats,
}

/// Validate a conditioned point sequence as a drivable closed loop
///
/// `widths` are optional because hand-drawn paths reach validation
/// before any width has been derived; when supplied they must be
/// one-per-point.
pub fn validate_track(
    points: &[Point2],
    widths: Option<&[f32]>,
    config: &TrackConfig,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Point count
    if points.len() < config.min_point_count {
        errors.push(ValidationError::TooFewPoints {
            count: points.len(),
            minimum: config.min_point_count,
        });
    }

    // Closure
    let (is_closed, gap) = closure_state(points, config);
    if !is_closed && !points.is_empty() {
        let first = points[0];
        let last = points[points.len() - 1];
        errors.push(ValidationError::NotClosed {
            gap,
            location: (first + last) * 0.5,
        });
    }

    // Length band
    let length = geometry::path_length(points, is_closed);
    if length < config.min_track_length {
        errors.push(ValidationError::TooShort {
            length,
            minimum: config.min_track_length,
        });
    } else if length > config.max_track_length {
        warnings.push(ValidationWarning::TooLong {
            length,
            maximum: config.max_track_length,
        });
    }

    // Self-intersection
    errors.extend(find_self_intersections(points, is_closed, config));

    // Minimum segment length
    for (i, pair) in points.windows(2).enumerate() {
        let d = pair[0].distance(&pair[1]);
        if d < config.min_segment_length {
            errors.push(ValidationError::SegmentTooShort {
                index: i,
                length: d,
                minimum: config.min_segment_length,
            });
        }
    }

    // Width floor
    if let Some(widths) = widths {
        if let Some(min) = widths.iter().copied().reduce(f32::min) {
            if min < config.min_track_width {
                errors.push(ValidationError::TooNarrow {
                    width: min,
                    minimum: config.min_track_width,
                });
            }
        }
    }

    // Curvature-derived warnings
    let analysis = curvature::analyze_path(points, is_closed, config);
    if !analysis.is_empty() {
        let hairpins = analysis
            .iter()
            .filter(|d| d.turn_type == TurnType::Hairpin)
            .count();
        let share = hairpins as f32 / analysis.len() as f32;
        if share > config.max_hairpin_share {
            warnings.push(ValidationWarning::ExcessiveHairpins { share });
        }
        let straights = analysis
            .iter()
            .filter(|d| d.turn_type == TurnType::Straight)
            .count();
        if straights == 0 && length >= config.no_straight_warning_length {
            warnings.push(ValidationWarning::NoStraights);
        }
    }

    // Stats, valid or not
    let run_counts = curvature::count_turns_by_type(&analysis);
    let turn_count = run_counts
        .iter()
        .filter(|(t, _)| **t != TurnType::Straight)
        .map(|(_, n)| n)
        .sum();
    let effective_widths: Vec<f32> = match widths {
        Some(w) => w.to_vec(),
        None => analysis.iter().map(|d| d.suggested_width).collect(),
    };
    let (avg_width, min_width) = if effective_widths.is_empty() {
        (0.0, 0.0)
    } else {
        let sum: f32 = effective_widths.iter().sum();
        let min = effective_widths.iter().copied().fold(f32::MAX, f32::min);
        (sum / effective_widths.len() as f32, min)
    };

    let stats = TrackStats {
        length,
        point_count: points.len(),
        turn_count,
        avg_width,
        min_width,
        difficulty: curvature::estimate_difficulty(&analysis),
        bounds: geometry::bounds(points),
        is_closed,
    };

    let is_valid = errors.is_empty();
    tracing::debug!(
        valid = is_valid,
        errors = errors.len(),
        warnings = warnings.len(),
        length,
        "track validated"
    );

    ValidationResult { is_valid, errors, warnings, stats }
}

/// Would appending `next` (or closing the loop, when `closing`) create
/// an immediate crossing with the existing path?
///
/// Used for live feedback while a path is being drawn, so it only
/// tests the one new segment rather than re-scanning every pair.
pub fn would_cause_intersection(points: &[Point2], next: Point2, closing: bool) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let (a1, a2) = if closing {
        (points[n - 1], points[0])
    } else {
        (points[n - 1], next)
    };
    for i in 0..n - 1 {
        // Segments sharing an endpoint with the new one always touch;
        // the new segment starts at the last point (and, when closing,
        // ends at the first), so skip those neighbors
        if i == n - 2 || (closing && i == 0) {
            continue;
        }
        if geometry::segments_intersect(a1, a2, points[i], points[i + 1]) {
            return true;
        }
    }
    false
}

/// Can a nearly-closed drawn loop be silently closed?
///
/// True when the closure gap is within threshold and the closing
/// segment would not introduce a crossing.
pub fn can_auto_close(points: &[Point2], config: &TrackConfig) -> bool {
    if points.len() < 3 {
        return false;
    }
    let gap = points[0].distance(&points[points.len() - 1]);
    gap <= config.closure_threshold
        && !would_cause_intersection(points, points[0], true)
}

fn closure_state(points: &[Point2], config: &TrackConfig) -> (bool, f32) {
    if points.len() < 2 {
        return (false, 0.0);
    }
    let gap = points[0].distance(&points[points.len() - 1]);
    (gap <= config.closure_threshold, gap)
}

/// Scan all non-neighboring segment pairs for crossings
///
/// Neighboring segment indices within `intersection_skip_window` on
/// either side (circularly, when closed) are skipped: a naturally
/// curving path brings adjacent segments close without actually
/// crossing. The reported point is the average of the four endpoints
/// involved, an approximation that is close enough for diagnostics.
fn find_self_intersections(
    points: &[Point2],
    closed: bool,
    config: &TrackConfig,
) -> Vec<ValidationError> {
    let n = points.len();
    if n < 4 {
        return Vec::new();
    }
    let seg_count = if closed { n } else { n - 1 };
    let window = config.intersection_skip_window;

    let mut errors = Vec::new();
    for i in 0..seg_count {
        for j in (i + 1)..seg_count {
            let apart = if closed {
                (j - i).min(seg_count - (j - i))
            } else {
                j - i
            };
            if apart <= window {
                continue;
            }
            let a1 = points[i];
            let a2 = points[(i + 1) % n];
            let b1 = points[j];
            let b2 = points[(j + 1) % n];
            if geometry::segments_intersect(a1, a2, b1, b2) {
                errors.push(ValidationError::SelfIntersection {
                    segment_a: i,
                    segment_b: j,
                    near: (a1 + a2 + b1 + b2) * 0.25,
                });
            }
        }
    }
    errors
}
