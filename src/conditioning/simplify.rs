//! Douglas-Peucker point decimation

use crate::core::types::Point2;
use crate::geometry;

/// Simplify a path, keeping only points whose perpendicular deviation
/// from the chord of their subrange exceeds `tolerance`
///
/// Divide-and-conquer over explicit index ranges of the one input
/// buffer with a worklist stack, so no subrange is ever allocated. Both
/// endpoints of every subrange are always retained, so the first and
/// last point of the path survive. Running this twice with the same
/// tolerance yields the same output.
pub fn simplify_path(points: &[Point2], tolerance: f32) -> Vec<Point2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    let mut ranges = vec![(0usize, points.len() - 1)];
    while let Some((start, end)) = ranges.pop() {
        if end <= start + 1 {
            continue;
        }
        let mut max_dist = 0.0;
        let mut max_idx = start;
        for i in (start + 1)..end {
            let d = geometry::point_to_segment_distance(points[i], points[start], points[end]);
            if d > max_dist {
                max_dist = d;
                max_idx = i;
            }
        }
        if max_dist > tolerance {
            keep[max_idx] = true;
            ranges.push((start, max_idx));
            ranges.push((max_idx, end));
        }
        // Below tolerance the whole subrange collapses to its endpoints
    }

    points
        .iter()
        .zip(keep.iter())
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collinear_points_collapse() {
        let pts: Vec<Point2> = (0..10).map(|i| Point2::new(i as f32, 0.0)).collect();
        let out = simplify_path(&pts, 0.5);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[1], pts[9]);
    }

    #[test]
    fn test_corner_survives() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.1),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];
        let out = simplify_path(&pts, 0.5);
        // The near-collinear middle point goes, the corner at (10,0) stays
        assert_eq!(out.len(), 3);
        assert_eq!(out[1], Point2::new(10.0, 0.0));
    }

    #[test]
    fn test_idempotent() {
        let pts: Vec<Point2> = (0..50)
            .map(|i| {
                let t = i as f32 * 0.3;
                Point2::new(t * 4.0, (t.sin() * 6.0) + (i % 3) as f32 * 0.2)
            })
            .collect();
        let once = simplify_path(&pts, 1.0);
        let twice = simplify_path(&once, 1.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_short_input_unchanged() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        assert_eq!(simplify_path(&pts, 1.0), pts);
    }
}
