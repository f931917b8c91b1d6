//! Mercator (conformal) latitude projection helpers.
//!
//! The rhumb-line formulas linearize constant-bearing tracks by working in
//! Mercator-projected latitude space, where a loxodrome becomes a straight
//! line. Both helpers take latitudes in radians.

use std::f64::consts::FRAC_PI_4;

/// Project a latitude onto the Mercator conformal scale
///
/// Returns tan(π/4 + φ/2). Strictly increasing on (-π/2, π/2), equal to 1
/// at the equator.
///
/// Not guarded at the poles: φ = ±π/2 produces ±infinity (or a huge finite
/// value after rounding), which then propagates through downstream
/// logarithms as infinity/NaN. Callers needing pole safety must restrict
/// inputs to the open interval.
pub fn simple_project(latitude_rad: f64) -> f64 {
    (FRAC_PI_4 + latitude_rad / 2.0).tan()
}

/// Projected-latitude separation Δψ between two latitudes
///
/// Returns ln(simple_project(lat_b) / simple_project(lat_a)), the stretched
/// meridional distance between the two parallels under the Mercator
/// projection. This is the denominator of the rhumb-line course slope.
///
/// Equal latitudes give exactly 0; downstream code must apply its own
/// near-zero fallback before dividing by this value.
pub fn mix_project(latitude_b_rad: f64, latitude_a_rad: f64) -> f64 {
    (simple_project(latitude_b_rad) / simple_project(latitude_a_rad)).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_simple_project_equator() {
        assert!((simple_project(0.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_simple_project_monotonic() {
        let lats = [-1.2, -0.5, 0.0, 0.3, 0.9, 1.4];
        for pair in lats.windows(2) {
            assert!(simple_project(pair[0]) < simple_project(pair[1]));
        }
    }

    #[test]
    fn test_simple_project_known_value() {
        // At 45°N: tan(π/4 + π/8) = tan(67.5°) ≈ 2.414213562 (1 + √2)
        let expected = 1.0 + 2.0_f64.sqrt();
        assert!((simple_project(FRAC_PI_2 / 2.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_mix_project_antisymmetric() {
        let a = 0.45;
        let b = 0.675;
        let forward = mix_project(b, a);
        let backward = mix_project(a, b);
        assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn test_mix_project_equal_latitudes() {
        assert_eq!(mix_project(0.3, 0.3), 0.0);
    }

    #[test]
    fn test_pole_produces_non_finite_downstream() {
        // The projection itself blows up at the pole; document the behavior
        // rather than guard it.
        let at_pole = simple_project(FRAC_PI_2);
        assert!(at_pole > 1e15 || at_pole.is_infinite());
    }
}
