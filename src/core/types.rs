//! Core type definitions used throughout the crate

use serde::{Deserialize, Serialize};

/// 2D position on the ground plane
///
/// The vertical axis is irrelevant to track layout, so coordinates are
/// `x`/`z` to match the world's ground-plane convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub z: f32,
}

impl Point2 {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    pub fn distance_squared(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0001 {
            Self { x: self.x / len, z: self.z / len }
        } else {
            Self::default()
        }
    }

    /// Rotate 90 degrees counter-clockwise (tangent -> left normal)
    pub fn perpendicular(&self) -> Self {
        Self { x: -self.z, z: self.x }
    }
}

impl std::ops::Add for Point2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, z: self.z + rhs.z }
    }
}

impl std::ops::Sub for Point2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, z: self.z - rhs.z }
    }
}

impl std::ops::Mul<f32> for Point2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, z: self.z * rhs }
    }
}

/// A single point along a closed driving line
///
/// Width and speed limit are derived from curvature analysis, never set
/// independently. The waypoint sequence is implicitly closed: the last
/// entry connects back to the first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f32,
    pub z: f32,
    pub width: f32,
    pub speed_limit: f32,
    pub is_checkpoint: bool,
}

impl Waypoint {
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.z)
    }
}

/// Per-point curvature attributes, one-to-one with a point sequence index
///
/// Transient: recomputed whenever geometry changes, never cached across
/// edits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvatureData {
    pub curvature: f32,
    pub suggested_width: f32,
    pub suggested_speed: f32,
    pub turn_type: TurnType,
}

/// Turn classification by curvature band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnType {
    Straight,
    Gentle,
    Medium,
    Tight,
    Hairpin,
}

/// Track difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// Axis-aligned bounding box on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn depth(&self) -> f32 {
        self.max.z - self.min.z
    }

    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }
}
