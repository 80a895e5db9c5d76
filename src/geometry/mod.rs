//! Pure 2D geometry kernel
//!
//! Side-effect-free primitives over [`Point2`]. Nothing here fails:
//! degenerate inputs (zero-length segments, fewer points than an
//! operation needs) produce defined sentinel results — zero distance,
//! `None` intersection, a unit +x tangent — and callers own the
//! validity context.

use crate::core::types::{Bounds, Point2};

/// Collinearity tolerance for cross-product sign tests
const EPSILON: f32 = 1e-6;

pub fn distance(a: Point2, b: Point2) -> f32 {
    a.distance(&b)
}

pub fn distance_squared(a: Point2, b: Point2) -> f32 {
    a.distance_squared(&b)
}

/// Signed area proxy of (p2 - p1) x (p3 - p1)
///
/// Positive means p3 lies to the left of p1->p2, negative to the right,
/// zero (within tolerance) collinear.
pub fn cross(p1: Point2, p2: Point2, p3: Point2) -> f32 {
    (p2.x - p1.x) * (p3.z - p1.z) - (p2.z - p1.z) * (p3.x - p1.x)
}

/// True if segment a1-a2 intersects segment b1-b2
///
/// Four cross-product sign tests for the proper crossing case, then a
/// collinear-overlap fallback so an endpoint lying exactly on the other
/// segment still counts as an intersection.
pub fn segments_intersect(a1: Point2, a2: Point2, b1: Point2, b2: Point2) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    // Collinear endpoint cases
    (d1.abs() <= EPSILON && on_segment(b1, b2, a1))
        || (d2.abs() <= EPSILON && on_segment(b1, b2, a2))
        || (d3.abs() <= EPSILON && on_segment(a1, a2, b1))
        || (d4.abs() <= EPSILON && on_segment(a1, a2, b2))
}

/// True if p lies within the axis-aligned box of segment a-b
///
/// Only meaningful when p is already known collinear with a-b.
fn on_segment(a: Point2, b: Point2, p: Point2) -> bool {
    p.x >= a.x.min(b.x) - EPSILON
        && p.x <= a.x.max(b.x) + EPSILON
        && p.z >= a.z.min(b.z) - EPSILON
        && p.z <= a.z.max(b.z) + EPSILON
}

/// Exact crossing point of two segments, if one exists
///
/// Returns `None` for parallel or non-overlapping segments. Collinear
/// overlaps also return `None`: there is no single crossing point.
pub fn segment_intersection(a1: Point2, a2: Point2, b1: Point2, b2: Point2) -> Option<Point2> {
    let r = a2 - a1;
    let s = b2 - b1;
    let denom = r.x * s.z - r.z * s.x;
    if denom.abs() <= EPSILON {
        return None;
    }
    let qp = b1 - a1;
    let t = (qp.x * s.z - qp.z * s.x) / denom;
    let u = (qp.x * r.z - qp.z * r.x) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + r * t)
    } else {
        None
    }
}

/// Perpendicular distance from p to the segment a-b
///
/// The projection parameter is clamped to [0, 1], so this measures to
/// the segment, not the infinite line. A zero-length segment degrades
/// to point distance.
pub fn point_to_segment_distance(p: Point2, a: Point2, b: Point2) -> f32 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.z * ab.z;
    if len_sq <= EPSILON {
        return p.distance(&a);
    }
    let ap = p - a;
    let t = ((ap.x * ab.x + ap.z * ab.z) / len_sq).clamp(0.0, 1.0);
    p.distance(&(a + ab * t))
}

/// Average position of a point set; origin for an empty set
pub fn centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::default();
    }
    let mut sum = Point2::default();
    for p in points {
        sum = sum + *p;
    }
    sum * (1.0 / points.len() as f32)
}

/// Sort points by angle around their centroid, counter-clockwise
///
/// Gives an unordered scatter a non-self-crossing starting order.
pub fn sort_counter_clockwise(points: &mut [Point2]) {
    let c = centroid(points);
    points.sort_by(|a, b| {
        let ang_a = (a.z - c.z).atan2(a.x - c.x);
        let ang_b = (b.z - c.z).atan2(b.x - c.x);
        ang_a.partial_cmp(&ang_b).unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Sum of consecutive segment lengths, optionally including the closing
/// segment back to the first point
pub fn path_length(points: &[Point2], closed: bool) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    let mut total: f32 = points.windows(2).map(|w| w[0].distance(&w[1])).sum();
    if closed {
        total += points[points.len() - 1].distance(&points[0]);
    }
    total
}

/// Central-difference direction estimate at index i
///
/// Wraps neighbor lookup on closed paths, clamps at the ends of open
/// ones. Degenerate inputs (fewer than 2 points, coincident neighbors)
/// return the unit +x direction.
pub fn tangent_at(points: &[Point2], i: usize, closed: bool) -> Point2 {
    let n = points.len();
    if n < 2 || i >= n {
        return Point2::new(1.0, 0.0);
    }
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
    let dir = (next - prev).normalize();
    if dir.length() <= EPSILON {
        Point2::new(1.0, 0.0)
    } else {
        dir
    }
}

/// Tangent rotated 90 degrees counter-clockwise
pub fn normal_at(points: &[Point2], i: usize, closed: bool) -> Point2 {
    tangent_at(points, i, closed).perpendicular()
}

/// Axis-aligned bounding box; a zero box at the origin for no points
pub fn bounds(points: &[Point2]) -> Bounds {
    let Some(first) = points.first() else {
        return Bounds { min: Point2::default(), max: Point2::default() };
    };
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.z = min.z.min(p.z);
        max.x = max.x.max(p.x);
        max.z = max.z.max(p.z);
    }
    Bounds { min, max }
}

/// Ray-casting parity test; polygons with fewer than 3 vertices contain
/// nothing
pub fn point_in_polygon(p: Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[j];
        if (a.z > p.z) != (b.z > p.z) {
            let x_cross = a.x + (p.z - a.z) / (b.z - a.z) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_cross_sign_indicates_turn() {
        let origin = Point2::new(0.0, 0.0);
        let east = Point2::new(1.0, 0.0);
        // Left of the +x axis
        assert!(cross(origin, east, Point2::new(1.0, 1.0)) > 0.0);
        // Right of the +x axis
        assert!(cross(origin, east, Point2::new(1.0, -1.0)) < 0.0);
        // Collinear
        assert_eq!(cross(origin, east, Point2::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn test_segments_cross() {
        let hit = segments_intersect(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 0.0),
        );
        assert!(hit);
    }

    #[test]
    fn test_segment_intersection_point() {
        let p = segment_intersection(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 0.0),
        )
        .unwrap();
        assert!((p.x - 5.0).abs() < 1e-4);
        assert!((p.z - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_parallel_segments_no_intersection() {
        assert!(!segments_intersect(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 5.0),
            Point2::new(10.0, 5.0),
        ));
        assert!(segment_intersection(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 5.0),
            Point2::new(10.0, 5.0),
        )
        .is_none());
    }

    #[test]
    fn test_endpoint_touching_counts_as_intersection() {
        // b1 lies exactly on segment a
        assert!(segments_intersect(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 8.0),
        ));
    }

    #[test]
    fn test_disjoint_segments() {
        assert!(!segments_intersect(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(5.0, 5.0),
            Point2::new(6.0, 5.0),
        ));
    }

    #[test]
    fn test_point_to_segment_clamps_projection() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        // Beyond the b endpoint: distance to b, not to the infinite line
        let d = point_to_segment_distance(Point2::new(15.0, 0.0), a, b);
        assert!((d - 5.0).abs() < 1e-5);
        // Perpendicular case
        let d = point_to_segment_distance(Point2::new(5.0, 3.0), a, b);
        assert!((d - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_length_segment_distance() {
        let a = Point2::new(2.0, 2.0);
        let d = point_to_segment_distance(Point2::new(5.0, 6.0), a, a);
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_centroid_of_square() {
        let c = centroid(&square());
        assert!((c.x - 5.0).abs() < 1e-5);
        assert!((c.z - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_ccw_sort_orders_scatter() {
        let mut pts = vec![
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 0.0),
        ];
        sort_counter_clockwise(&mut pts);
        // Consecutive cross products all share a sign on a convex CCW loop
        let n = pts.len();
        for i in 0..n {
            let c = cross(pts[i], pts[(i + 1) % n], pts[(i + 2) % n]);
            assert!(c > 0.0, "expected CCW order, got cross {} at {}", c, i);
        }
    }

    #[test]
    fn test_square_path_length() {
        assert_eq!(path_length(&square(), true), 40.0);
        assert_eq!(path_length(&square(), false), 30.0);
    }

    #[test]
    fn test_path_length_degenerate() {
        assert_eq!(path_length(&[], true), 0.0);
        assert_eq!(path_length(&[Point2::new(1.0, 1.0)], true), 0.0);
    }

    #[test]
    fn test_tangent_wraps_on_closed_path() {
        let pts = square();
        // At index 0 of the closed square, prev is (0,10), next is (10,0)
        let t = tangent_at(&pts, 0, true);
        assert!(t.x > 0.0 && t.z < 0.0);
        // Open path clamps: prev stays at index 0
        let t_open = tangent_at(&pts, 0, false);
        assert!((t_open.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_tangent_degenerate_input() {
        assert_eq!(tangent_at(&[], 0, true), Point2::new(1.0, 0.0));
        let single = [Point2::new(3.0, 3.0)];
        assert_eq!(tangent_at(&single, 0, false), Point2::new(1.0, 0.0));
    }

    #[test]
    fn test_point_in_polygon_square() {
        let sq = square();
        assert!(point_in_polygon(Point2::new(5.0, 5.0), &sq));
        assert!(!point_in_polygon(Point2::new(15.0, 5.0), &sq));
    }

    #[test]
    fn test_bounds_of_square() {
        let b = bounds(&square());
        assert_eq!(b.min, Point2::new(0.0, 0.0));
        assert_eq!(b.max, Point2::new(10.0, 10.0));
    }
}
