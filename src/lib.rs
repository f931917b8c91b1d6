//! # Rhumbline Engine
//!
//! Rhumb-line (loxodromic) navigation calculations on a spherical Earth:
//! distance, constant bearing, destination point, midpoint, and recursive
//! power-of-two interpolation along a constant-bearing track.

// Re-export the main types and functions
pub use calculator::{AngleUnit, RhumbLineCalc};
pub use constants::EARTH_RADIUS_KM;
pub use error::RhumbError;
pub use point::GeoPoint;
pub use projection::{mix_project, simple_project};

// Module declarations
pub mod calculator;
pub mod constants;
pub mod error;
pub mod interpolation;
pub mod point;
pub mod projection;
