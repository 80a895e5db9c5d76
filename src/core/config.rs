//! Pipeline tuning constants with documented rationale
//!
//! All magic numbers for conditioning, curvature analysis and validation
//! are collected here with explanations of their purpose and how they
//! interact with each other.

/// Tuning constants for the track pipeline
///
/// These values have been tuned against a 200-unit world so that a
/// freehand-drawn loop conditions into roughly 60-200 waypoints spaced
/// a few units apart. Changing one value usually means revisiting its
/// neighbors: e.g. `resample_spacing` bounds how small `min_segment_length`
/// can meaningfully be.
#[derive(Debug, Clone)]
pub struct TrackConfig {
    // === POINT COUNT / CLOSURE ===
    /// Minimum number of points for a playable track
    ///
    /// Below this a loop cannot express even one real corner after
    /// smoothing.
    pub min_point_count: usize,

    /// Maximum gap between first and last point for the loop to count
    /// as closed (world units)
    ///
    /// Also the threshold under which the conditioner silently merges
    /// the endpoints of a drawn path.
    pub closure_threshold: f32,

    // === LENGTH BAND ===
    /// Minimum total perimeter (world units); shorter is an error
    pub min_track_length: f32,

    /// Maximum total perimeter (world units); longer is a warning only
    pub max_track_length: f32,

    /// Minimum distance between consecutive points (world units)
    ///
    /// The conditioner drops drawn points closer than half of this to
    /// their predecessor; the validator rejects segments shorter than
    /// this outright.
    pub min_segment_length: f32,

    /// Target spacing for uniform resampling (world units)
    pub resample_spacing: f32,

    /// Gaps longer than 3x this are subdivided by the generator so they
    /// read as deliberate straights (world units)
    pub min_straight_length: f32,

    // === SIMPLIFICATION / SMOOTHING ===
    /// Douglas-Peucker perpendicular deviation tolerance (world units)
    ///
    /// Larger values strip more hand-drawn jitter but start eating
    /// intentional corner shape above ~2.0 at this world scale.
    pub simplify_tolerance: f32,

    /// Neighbor-averaging iterations applied to a drawn path
    pub smooth_iterations: usize,

    /// Blend factor per smoothing pass, 0..1
    ///
    /// Each point moves this fraction of the way toward the midpoint of
    /// its neighbors. Smaller is gentler per pass.
    pub smooth_blend: f32,

    /// Spline subdivisions per base segment for procedural paths
    ///
    /// Must keep the densified spacing below `closure_threshold` for
    /// the longest base segment the generator can produce (3x
    /// `min_straight_length`), or the wrap-around gap reads as open.
    pub spline_subdivisions: usize,

    // === CURVATURE CLASSIFICATION ===
    /// Curvature below this is a straight (1/world units)
    ///
    /// Thresholds are Menger curvature, i.e. the reciprocal of the
    /// circumscribed radius: 0.005 is a 200-unit radius.
    pub curvature_straight: f32,
    /// Gentle turn threshold (~66-unit radius)
    pub curvature_gentle: f32,
    /// Medium turn threshold (25-unit radius)
    pub curvature_medium: f32,
    /// Tight turn threshold (~12-unit radius)
    pub curvature_tight: f32,
    /// Hairpin threshold (~7-unit radius); width ramp clamps here
    pub curvature_hairpin: f32,

    /// Moving-average window for curvature smoothing (samples)
    ///
    /// Odd so the window centers on the sample. 5 suppresses
    /// single-point noise without flattening real hairpins.
    pub curvature_window: usize,

    // === WIDTH / SPEED ===
    /// Track width on straights, and the absolute ceiling (world units)
    pub max_track_width: f32,

    /// Track width at hairpins, and the absolute floor (world units)
    pub min_track_width: f32,

    /// Speed tiers by turn type: straight, gentle, medium, tight, hairpin
    ///
    /// Deliberately a step function rather than interpolated: speed
    /// limits should read as discrete gears a driver can anticipate,
    /// whereas width feels continuous.
    pub speed_tiers: [f32; 5],

    // === SELF-INTERSECTION ===
    /// Segment-index window around each segment excluded from the
    /// self-intersection scan
    ///
    /// A naturally curving path brings neighboring segments close
    /// together; without this skip they would be flagged as crossings.
    pub intersection_skip_window: usize,

    // === WARNING HEURISTICS ===
    /// Share of hairpin-classified points above which the track warns
    /// "too many tight turns"
    pub max_hairpin_share: f32,

    /// Tracks at least this long warn when they contain no straight
    /// sections at all (world units)
    pub no_straight_warning_length: f32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            min_point_count: 8,
            closure_threshold: 10.0,
            min_track_length: 150.0,
            max_track_length: 2000.0,
            min_segment_length: 1.0,
            resample_spacing: 5.0,
            min_straight_length: 30.0,
            simplify_tolerance: 1.5,
            smooth_iterations: 2,
            smooth_blend: 0.25,
            spline_subdivisions: 10,
            curvature_straight: 0.005,
            curvature_gentle: 0.015,
            curvature_medium: 0.04,
            curvature_tight: 0.08,
            curvature_hairpin: 0.15,
            curvature_window: 5,
            max_track_width: 16.0,
            min_track_width: 6.0,
            speed_tiers: [180.0, 140.0, 100.0, 70.0, 45.0],
            intersection_skip_window: 2,
            max_hairpin_share: 0.25,
            no_straight_warning_length: 300.0,
        }
    }
}
