//! Procedural track generation
//!
//! Drives the whole pipeline with randomized inputs: scatter a point
//! set, order it, splice in corner templates, enforce straights, run
//! the procedural conditioning sub-pipeline, validate, and retry on
//! failure up to a bounded attempt count. Attempts are fully
//! independent; the only shared state is the caller's rng.

mod fallback;
mod templates;

pub use fallback::{generate_figure8_track, generate_oval_track};
pub use templates::{splice_template, CornerKind};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::conditioning;
use crate::core::config::TrackConfig;
use crate::core::error::{Result, TrackError};
use crate::core::types::{Difficulty, Point2, Waypoint};
use crate::curvature;
use crate::geometry;
use crate::validation;

/// World margin kept free of scatter points, as a fraction of world
/// size
const SCATTER_MARGIN: f32 = 0.1;

/// Minimum separation between scattered points, as a fraction of world
/// size
const SCATTER_SEPARATION: f32 = 0.12;

/// Placement retries per scattered point before accepting a crowded
/// candidate
const PLACEMENT_TRIES: usize = 100;

/// Configuration for procedural generation
///
/// Deserializes from editor JSON; missing fields take these defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub min_points: usize,
    pub max_points: usize,
    pub world_size: f32,
    /// Informational target, not currently enforced numerically
    pub target_lap_time: f32,
    pub difficulty: Difficulty,
    pub max_attempts: u32,
    pub include_corner_templates: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            min_points: 6,
            max_points: 10,
            world_size: 200.0,
            target_lap_time: 75.0,
            difficulty: Difficulty::Medium,
            max_attempts: 10,
            include_corner_templates: true,
        }
    }
}

impl GenerationOptions {
    fn validate(&self) -> Result<()> {
        if self.min_points < 3 {
            return Err(TrackError::InvalidOptions(format!(
                "min_points {} below 3",
                self.min_points
            )));
        }
        if self.min_points > self.max_points {
            return Err(TrackError::InvalidOptions(format!(
                "min_points {} exceeds max_points {}",
                self.min_points, self.max_points
            )));
        }
        if self.world_size <= 0.0 {
            return Err(TrackError::InvalidOptions(format!(
                "world_size {} not positive",
                self.world_size
            )));
        }
        Ok(())
    }
}

/// Width rescaling applied in the final difficulty pass
///
/// Monotonically non-increasing with difficulty: harder tracks are
/// never wider than easier ones.
pub fn width_multiplier(difficulty: Difficulty) -> f32 {
    match difficulty {
        Difficulty::Easy => 1.15,
        Difficulty::Medium => 1.0,
        Difficulty::Hard => 0.9,
        Difficulty::Expert => 0.8,
    }
}

/// Speed-limit rescaling applied in the final difficulty pass
pub fn speed_multiplier(difficulty: Difficulty) -> f32 {
    match difficulty {
        Difficulty::Easy => 0.9,
        Difficulty::Medium => 1.0,
        Difficulty::Hard => 1.1,
        Difficulty::Expert => 1.2,
    }
}

fn template_count(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 1,
        Difficulty::Medium => 2,
        Difficulty::Hard => 3,
        Difficulty::Expert => 4,
    }
}

fn template_amplitude(difficulty: Difficulty) -> f32 {
    match difficulty {
        Difficulty::Easy => 0.7,
        Difficulty::Medium => 0.85,
        Difficulty::Hard => 1.0,
        Difficulty::Expert => 1.15,
    }
}

/// Generate a validated track with the default pipeline tuning
pub fn generate_track(
    options: &GenerationOptions,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Waypoint>> {
    generate_track_with(options, &TrackConfig::default(), rng)
}

/// Convenience entry point owning its rng; same seed, same track
pub fn generate_track_seeded(options: &GenerationOptions, seed: u64) -> Result<Vec<Waypoint>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_track(options, &mut rng)
}

/// Generate a validated track with explicit pipeline tuning
///
/// Runs up to `max_attempts` independent attempts and returns the
/// first that validates. Individual attempt failures are discarded
/// silently; only the aggregate outcome surfaces.
pub fn generate_track_with(
    options: &GenerationOptions,
    config: &TrackConfig,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Waypoint>> {
    options.validate()?;

    for attempt in 1..=options.max_attempts {
        match generation_attempt(options, config, rng) {
            Some(waypoints) => {
                tracing::debug!(attempt, points = waypoints.len(), "track generated");
                return Ok(waypoints);
            }
            None => {
                tracing::trace!(attempt, "attempt rejected by validation");
            }
        }
    }
    tracing::debug!(attempts = options.max_attempts, "generation exhausted");
    Err(TrackError::GenerationExhausted { attempts: options.max_attempts })
}

fn generation_attempt(
    options: &GenerationOptions,
    config: &TrackConfig,
    rng: &mut ChaCha8Rng,
) -> Option<Vec<Waypoint>> {
    let count = rng.gen_range(options.min_points..=options.max_points);
    let mut base = scatter_points(count, options.world_size, rng);
    geometry::sort_counter_clockwise(&mut base);

    if options.include_corner_templates {
        insert_templates(&mut base, options.difficulty, rng);
    }
    let base = enforce_straights(&base, config);

    let conditioned = conditioning::condition_generated_path(&base, config);
    let result = validation::validate_track(&conditioned, None, config);
    if !result.is_valid {
        return None;
    }
    Some(build_waypoints(&conditioned, options.difficulty, config))
}

/// Scatter `count` points inside the world bounds with a margin,
/// rejection-sampling each placement against a minimum separation
///
/// After [`PLACEMENT_TRIES`] rejections the last candidate is accepted
/// anyway; a crowded layout is the validator's problem, not a reason
/// to loop forever.
fn scatter_points(count: usize, world_size: f32, rng: &mut ChaCha8Rng) -> Vec<Point2> {
    let half = world_size * 0.5;
    let margin = world_size * SCATTER_MARGIN;
    let lo = -half + margin;
    let hi = half - margin;
    let min_sep = world_size * SCATTER_SEPARATION;

    let mut points: Vec<Point2> = Vec::with_capacity(count);
    for _ in 0..count {
        let mut candidate = Point2::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi));
        for _ in 0..PLACEMENT_TRIES {
            if points.iter().all(|p| p.distance(&candidate) >= min_sep) {
                break;
            }
            candidate = Point2::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi));
        }
        points.push(candidate);
    }
    points
}

/// Splice a difficulty-dependent number of corner templates at random
/// non-adjacent positions
fn insert_templates(base: &mut Vec<Point2>, difficulty: Difficulty, rng: &mut ChaCha8Rng) {
    let n = base.len();
    if n < 4 {
        return;
    }
    let wanted = template_count(difficulty).min(n / 2);
    let amplitude = template_amplitude(difficulty);

    // Pick insertion positions up front, pairwise non-adjacent on the
    // loop, then splice from the highest index down so earlier
    // positions stay valid
    let mut positions: Vec<usize> = Vec::with_capacity(wanted);
    let mut tries = 0;
    while positions.len() < wanted && tries < PLACEMENT_TRIES {
        tries += 1;
        let idx = rng.gen_range(0..n);
        let adjacent = positions.iter().any(|&p| {
            let apart = (idx as isize - p as isize).unsigned_abs();
            apart.min(n - apart) < 2
        });
        if !adjacent {
            positions.push(idx);
        }
    }
    positions.sort_unstable_by(|a, b| b.cmp(a));

    for idx in positions {
        let kind = CornerKind::random(rng);
        splice_template(base, idx, kind, amplitude);
    }
}

/// Subdivide long gaps so they survive smoothing as deliberate
/// straights
///
/// Consecutive points farther apart than three times the minimum
/// straight length gain evenly spaced intermediates.
fn enforce_straights(points: &[Point2], config: &TrackConfig) -> Vec<Point2> {
    let n = points.len();
    let limit = config.min_straight_length * 3.0;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        out.push(a);
        let gap = a.distance(&b);
        if gap > limit {
            let pieces = (gap / limit).ceil() as usize;
            for k in 1..pieces {
                out.push(a + (b - a) * (k as f32 / pieces as f32));
            }
        }
    }
    out
}

/// Derive the final waypoint sequence from a conditioned point loop
///
/// Curvature analysis supplies per-point width and speed; the
/// difficulty pass rescales both, clamped to the validator's absolute
/// bounds; four roughly equally spaced indices (the first point, then
/// each quarter by index) become checkpoints.
pub(crate) fn build_waypoints(
    points: &[Point2],
    difficulty: Difficulty,
    config: &TrackConfig,
) -> Vec<Waypoint> {
    let analysis = curvature::analyze_path(points, true, config);
    let n = points.len();
    let stride = (n / 4).max(1);
    let w_mult = width_multiplier(difficulty);
    let s_mult = speed_multiplier(difficulty);
    let min_speed = config.speed_tiers[config.speed_tiers.len() - 1];
    let max_speed = config.speed_tiers[0];

    points
        .iter()
        .zip(analysis.iter())
        .enumerate()
        .map(|(i, (p, data))| Waypoint {
            x: p.x,
            z: p.z,
            width: (data.suggested_width * w_mult)
                .clamp(config.min_track_width, config.max_track_width),
            speed_limit: (data.suggested_speed * s_mult).clamp(min_speed, max_speed),
            is_checkpoint: i % stride == 0 && i / stride < 4,
        })
        .collect()
}
