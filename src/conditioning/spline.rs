//! Closed Catmull-Rom spline interpolation
//!
//! Densifies a sparse closed base polygon into a smooth curve. Each
//! output segment uses the four-point local basis around it, so the
//! curve passes through every base point.

use crate::core::types::Point2;

/// Interpolate a closed base polygon into `subdivisions` samples per
/// base segment
///
/// Fewer than 3 base points (or zero subdivisions) come back unchanged.
/// The output is treated as closed: the sample at each base point
/// starts its segment, and the final segment wraps to the first point.
pub fn spline_interpolate_closed(base: &[Point2], subdivisions: usize) -> Vec<Point2> {
    let n = base.len();
    if n < 3 || subdivisions == 0 {
        return base.to_vec();
    }

    let mut out = Vec::with_capacity(n * subdivisions);
    for i in 0..n {
        let p0 = base[(i + n - 1) % n];
        let p1 = base[i];
        let p2 = base[(i + 1) % n];
        let p3 = base[(i + 2) % n];
        for s in 0..subdivisions {
            let t = s as f32 / subdivisions as f32;
            out.push(catmull_rom(p0, p1, p2, p3, t));
        }
    }
    out
}

/// Standard uniform Catmull-Rom basis at parameter t in [0, 1)
fn catmull_rom(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f32) -> Point2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let c0 = p1 * 2.0;
    let c1 = (p2 - p0) * t;
    let c2 = (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2;
    let c3 = ((p1 - p2) * 3.0 + p3 - p0) * t3;
    (c0 + c1 + c2 + c3) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Vec<Point2> {
        vec![
            Point2::new(0.0, -10.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(-10.0, 0.0),
        ]
    }

    #[test]
    fn test_output_count() {
        let out = spline_interpolate_closed(&diamond(), 8);
        assert_eq!(out.len(), 32);
    }

    #[test]
    fn test_passes_through_base_points() {
        let base = diamond();
        let out = spline_interpolate_closed(&base, 8);
        for (i, p) in base.iter().enumerate() {
            let sample = out[i * 8];
            assert!(sample.distance(p) < 1e-4, "base point {} not on curve", i);
        }
    }

    #[test]
    fn test_interior_samples_between_neighbors() {
        let base = diamond();
        let out = spline_interpolate_closed(&base, 4);
        // Midpoint of the first segment bulges outward but stays near it
        let mid = out[2];
        let chord_mid = (base[0] + base[1]) * 0.5;
        assert!(mid.distance(&chord_mid) < 5.0);
    }

    #[test]
    fn test_degenerate_input_unchanged() {
        let two = vec![Point2::new(0.0, 0.0), Point2::new(5.0, 5.0)];
        assert_eq!(spline_interpolate_closed(&two, 8), two);
        let tri = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(0.0, 5.0),
        ];
        assert_eq!(spline_interpolate_closed(&tri, 0), tri);
    }
}
