use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point as (latitude, longitude) in decimal degrees.
///
/// Latitude is conventionally in [-90, 90] and longitude in (-180, 180],
/// but neither is enforced; out-of-range inputs flow through the formulas
/// under ordinary IEEE-754 semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Latitude in radians
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        GeoPoint { lat, lon }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radian_conversion() {
        let p = GeoPoint::new(90.0, -180.0);
        assert!((p.lat_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((p.lon_rad() + std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_from_tuple() {
        let p: GeoPoint = (25.7976636, -80.1163316).into();
        assert_eq!(p.lat, 25.7976636);
        assert_eq!(p.lon, -80.1163316);
    }
}
