//! Corner templates
//!
//! Small fixed relative point patterns representing recognizable turn
//! shapes. A template lives in unit chord space: x runs 0..1 along the
//! chord between the two points it is spliced between, z is the
//! lateral offset as a fraction of the chord length. Splicing rotates
//! the pattern onto the local chord direction and scales the lateral
//! extent by a difficulty amplitude.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::Point2;

/// Signature corner shapes the generator can splice into a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerKind {
    Hairpin,
    Chicane,
    Sweeper,
    SCurve,
    Kink,
}

impl CornerKind {
    /// Relative pattern points in unit chord space (along, lateral)
    pub fn pattern(&self) -> &'static [(f32, f32)] {
        match self {
            CornerKind::Hairpin => &[
                (0.25, 0.0),
                (0.40, 0.30),
                (0.50, 0.40),
                (0.60, 0.30),
                (0.75, 0.0),
            ],
            CornerKind::Chicane => &[(0.25, 0.12), (0.50, 0.0), (0.75, -0.12)],
            CornerKind::Sweeper => &[(0.25, 0.15), (0.50, 0.20), (0.75, 0.15)],
            CornerKind::SCurve => &[(0.20, 0.15), (0.40, 0.08), (0.60, -0.08), (0.80, -0.15)],
            CornerKind::Kink => &[(0.50, 0.15)],
        }
    }

    pub fn random(rng: &mut ChaCha8Rng) -> Self {
        match rng.gen_range(0..5) {
            0 => CornerKind::Hairpin,
            1 => CornerKind::Chicane,
            2 => CornerKind::Sweeper,
            3 => CornerKind::SCurve,
            _ => CornerKind::Kink,
        }
    }
}

/// Splice a corner template between points `index` and `index + 1`
/// (wrapping) of a closed layout
///
/// The pattern is rotated to the local chord direction and scaled by
/// the chord length, with the lateral component further scaled by
/// `amplitude` (the difficulty multiplier). New points are inserted
/// after `index`, keeping both original points in place.
pub fn splice_template(
    points: &mut Vec<Point2>,
    index: usize,
    kind: CornerKind,
    amplitude: f32,
) {
    let n = points.len();
    if n < 3 || index >= n {
        return;
    }
    let start = points[index];
    let end = points[(index + 1) % n];
    let chord = end - start;
    let chord_len = chord.length();
    if chord_len <= 1e-4 {
        return;
    }
    let along = chord.normalize();
    let lateral = along.perpendicular();

    let inserted: Vec<Point2> = kind
        .pattern()
        .iter()
        .map(|&(t, offset)| {
            start + along * (t * chord_len) + lateral * (offset * chord_len * amplitude)
        })
        .collect();
    points.splice(index + 1..index + 1, inserted);
}
