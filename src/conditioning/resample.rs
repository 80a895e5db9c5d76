//! Uniform arc-length resampling

use crate::core::types::Point2;
use crate::geometry;

/// Rebuild the path with points at equal arc-length increments
///
/// Walks the cumulative segment lengths and linearly interpolates
/// inside whichever segment contains each target distance. Closed
/// paths produce `round(perimeter / spacing)` points starting at the
/// original first point; open paths additionally keep their exact last
/// point. Paths too short to hold two spacing steps come back
/// unchanged.
pub fn resample_path(points: &[Point2], spacing: f32, closed: bool) -> Vec<Point2> {
    if points.len() < 3 || spacing <= 0.0 {
        return points.to_vec();
    }
    let total = geometry::path_length(points, closed);
    if total < spacing * 2.0 {
        return points.to_vec();
    }

    let count = (total / spacing).round().max(3.0) as usize;
    let step = total / count as f32;
    let n = points.len();
    let seg_count = if closed { n } else { n - 1 };
    let targets = if closed { count } else { count + 1 };

    let seg_len = |seg: usize| points[seg].distance(&points[(seg + 1) % n]);

    let mut out = Vec::with_capacity(targets);
    let mut seg = 0usize;
    let mut seg_start = 0.0f32;
    let mut current_len = seg_len(0);
    for k in 0..targets {
        let target = k as f32 * step;
        while seg + 1 < seg_count && seg_start + current_len < target {
            seg_start += current_len;
            seg += 1;
            current_len = seg_len(seg);
        }
        let t = if current_len > 1e-6 {
            ((target - seg_start) / current_len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let a = points[seg];
        let b = points[(seg + 1) % n];
        out.push(a + (b - a) * t);
    }
    out
}
