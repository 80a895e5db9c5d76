//! trackgen - procedural racing circuit generation and validation
//!
//! Turns an arbitrary sequence of ground-plane points, hand-drawn or
//! synthesized, into a validated drivable closed loop: an ordered
//! waypoint sequence carrying per-point track width, suggested speed
//! limit and checkpoint flags. Rendering, physics and persistence are
//! external collaborators; this crate is a pure computational library.

pub mod conditioning;
pub mod core;
pub mod curvature;
pub mod generator;
pub mod geometry;
pub mod validation;

pub use crate::core::config::TrackConfig;
pub use crate::core::error::{Result, TrackError};
pub use crate::core::types::{Bounds, CurvatureData, Difficulty, Point2, TurnType, Waypoint};
pub use crate::generator::{
    generate_figure8_track, generate_oval_track, generate_track, generate_track_seeded,
    GenerationOptions,
};
pub use crate::validation::{validate_track, ValidationResult};
