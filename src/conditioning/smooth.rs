//! Neighbor-averaging (Laplacian) path smoothing

use crate::core::types::Point2;

/// Move each point `blend` of the way toward the midpoint of its
/// immediate neighbors, `iterations` times
///
/// On closed paths neighbor lookup wraps across the seam; on open paths
/// the two endpoints are pinned and only interior points move. Inputs
/// with fewer than 3 points are returned unchanged.
pub fn smooth_path(points: &[Point2], iterations: usize, blend: f32, closed: bool) -> Vec<Point2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let n = points.len();
    let mut current = points.to_vec();
    for _ in 0..iterations {
        let mut next = current.clone();
        let range = if closed { 0..n } else { 1..n - 1 };
        for i in range {
            let prev = current[(i + n - 1) % n];
            let succ = current[(i + 1) % n];
            let mid = (prev + succ) * 0.5;
            next[i] = current[i] + (mid - current[i]) * blend;
        }
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_path_pins_endpoints() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 8.0),
            Point2::new(10.0, 0.0),
        ];
        let out = smooth_path(&pts, 3, 0.5, false);
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[2], pts[2]);
        // The spike relaxes toward the chord
        assert!(out[1].z < pts[1].z);
    }

    #[test]
    fn test_closed_path_moves_all_points() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let out = smooth_path(&pts, 1, 0.5, true);
        // Every corner pulls inward toward its neighbors' midpoint
        for (before, after) in pts.iter().zip(&out) {
            assert!(before.distance(after) > 0.0);
        }
    }

    #[test]
    fn test_zero_blend_is_identity() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 7.0),
            Point2::new(9.0, 1.0),
        ];
        assert_eq!(smooth_path(&pts, 4, 0.0, true), pts);
    }

    #[test]
    fn test_short_input_unchanged() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(smooth_path(&pts, 2, 0.5, true), pts);
    }
}
