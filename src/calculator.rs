//! Core rhumb-line calculator.
//!
//! A rhumb line (loxodrome) crosses every meridian at the same angle, so a
//! vessel holding a constant compass course follows one. All formulas here
//! work on a spherical Earth and go through the Mercator projection helpers
//! in [`crate::projection`].

use crate::constants::{DELTA_PSI_THRESHOLD, EARTH_RADIUS_KM, MIDPOINT_PROJECTION_TOLERANCE};
use crate::point::GeoPoint;
use crate::projection::{mix_project, simple_project};
use std::f64::consts::PI;

/// Unit of a bearing argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

/// Stateless rhumb-line calculator over a spherical Earth
///
/// Holds only the sphere radius in kilometers; every method is a pure
/// function of its arguments and that constant, so a single instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RhumbLineCalc {
    earth_radius_km: f64,
}

impl Default for RhumbLineCalc {
    fn default() -> Self {
        RhumbLineCalc {
            earth_radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl RhumbLineCalc {
    /// Calculator with the standard mean Earth radius (6371 km)
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with a custom sphere radius in kilometers
    ///
    /// Useful for output in other length units (e.g. 3440.065 for nautical
    /// miles) or for other spheres entirely.
    pub fn with_radius(earth_radius_km: f64) -> Self {
        RhumbLineCalc { earth_radius_km }
    }

    /// Sphere radius in kilometers
    pub fn earth_radius_km(&self) -> f64 {
        self.earth_radius_km
    }

    /// Rhumb-line distance between two points in kilometers
    ///
    /// Uses the flattened-Pythagorean form R·√(Δφ² + q²·Δλ²), where q is
    /// the course slope Δφ/Δψ (falling back to cos(lat_a) on near-constant
    /// latitude tracks). Longitude differences wider than π are wrapped to
    /// the short way around the anti-meridian.
    pub fn distance(&self, point_a: GeoPoint, point_b: GeoPoint) -> f64 {
        let lat_a = point_a.lat_rad();
        let lat_b = point_b.lat_rad();

        let delta_phi = lat_b - lat_a;
        let delta_psi = mix_project(lat_b, lat_a);
        let delta_lambda = wrap_anti_meridian(point_b.lon_rad() - point_a.lon_rad());

        let q = course_slope(delta_phi, delta_psi, lat_a);

        (delta_phi * delta_phi + q * q * delta_lambda * delta_lambda).sqrt() * self.earth_radius_km
    }

    /// Constant compass course from `point_a` to `point_b` in degrees
    ///
    /// Returned in the atan2 range (-180, 180], measured clockwise from
    /// north. This is the single bearing held for the entire track, as
    /// opposed to a great circle's continuously changing heading.
    pub fn bearing(&self, point_a: GeoPoint, point_b: GeoPoint) -> f64 {
        let delta_psi = mix_project(point_b.lat_rad(), point_a.lat_rad());
        let delta_lambda = wrap_anti_meridian(point_b.lon_rad() - point_a.lon_rad());

        delta_lambda.atan2(delta_psi).to_degrees()
    }

    /// Destination point after `distance_km` along a constant bearing
    ///
    /// The bearing is interpreted per `unit`. A track running past a pole
    /// is reflected back into the valid latitude range; the returned
    /// longitude is normalized into (-180, 180].
    pub fn destination(
        &self,
        point_a: GeoPoint,
        bearing: f64,
        distance_km: f64,
        unit: AngleUnit,
    ) -> GeoPoint {
        let lat_a = point_a.lat_rad();
        let lon_a = point_a.lon_rad();
        let theta = match unit {
            AngleUnit::Degrees => bearing.to_radians(),
            AngleUnit::Radians => bearing,
        };

        let delta = distance_km / self.earth_radius_km;
        let delta_phi = delta * theta.cos();
        let mut lat_b = lat_a + delta_phi;

        let delta_psi = mix_project(lat_b, lat_a);
        let q = course_slope(delta_phi, delta_psi, lat_a);

        let delta_lambda = delta * theta.sin() / q;
        let lon_b = lon_a + delta_lambda;

        // Reflect across the pole when the track overshoots it
        if lat_b.abs() > PI / 2.0 {
            lat_b = if lat_b > 0.0 { PI - lat_b } else { -PI - lat_b };
        }

        GeoPoint::new(lat_b.to_degrees(), normalize_longitude(lon_b.to_degrees()))
    }

    /// Rhumb-line midpoint between two points
    ///
    /// The point on the loxodrome through `point_a` and `point_b` that is
    /// equidistant (in the rhumb-line metric) from both. Tracks crossing the
    /// anti-meridian are unwrapped first so the midpoint lands on the
    /// continuous path across the date line.
    pub fn loxodromic_midpoint(&self, point_a: GeoPoint, point_b: GeoPoint) -> GeoPoint {
        let lat_a = point_a.lat_rad();
        let lat_b = point_b.lat_rad();
        let mut lon_a = point_a.lon_rad();
        let lon_b = point_b.lon_rad();

        // Anti-meridian crossing
        if (lon_b - lon_a).abs() > PI {
            lon_a += 2.0 * PI;
        }

        let lat_mid = (lat_a + lat_b) / 2.0;
        let f1 = simple_project(lat_a);
        let f2 = simple_project(lat_b);
        let f3 = simple_project(lat_mid);

        let lon_mid = if (f2 - f1).abs() < MIDPOINT_PROJECTION_TOLERANCE {
            // Near-parallel track: the closed form divides by ln(f2/f1) ≈ 0
            (lon_a + lon_b) / 2.0
        } else {
            ((lon_b - lon_a) * f3.ln() + lon_a * f2.ln() - lon_b * f1.ln()) / (f2 / f1).ln()
        };

        GeoPoint::new(
            lat_mid.to_degrees(),
            normalize_longitude(lon_mid.to_degrees()),
        )
    }
}

/// Course slope q = Δφ/Δψ with the near-parallel fallback
///
/// When Δψ is numerically zero the ratio is replaced by cos(lat_a), the
/// exact limit for an east-west track.
fn course_slope(delta_phi: f64, delta_psi: f64, lat_a_rad: f64) -> f64 {
    if delta_psi.abs() > DELTA_PSI_THRESHOLD {
        delta_phi / delta_psi
    } else {
        lat_a_rad.cos()
    }
}

/// Wrap a longitude difference wider than π to the short way around
fn wrap_anti_meridian(delta_lambda: f64) -> f64 {
    if delta_lambda.abs() > PI {
        if delta_lambda > 0.0 {
            delta_lambda - 2.0 * PI
        } else {
            delta_lambda + 2.0 * PI
        }
    } else {
        delta_lambda
    }
}

/// Normalize a longitude in degrees into (-180, 180]
fn normalize_longitude(lon_deg: f64) -> f64 {
    (540.0 + lon_deg).rem_euclid(360.0) - 180.0
}
