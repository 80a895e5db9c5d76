//! Shared types, configuration and errors

pub mod config;
pub mod error;
pub mod types;

pub use config::TrackConfig;
pub use error::{Result, TrackError};
pub use types::{Bounds, CurvatureData, Difficulty, Point2, TurnType, Waypoint};
