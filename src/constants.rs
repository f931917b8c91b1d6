/// Physical and numerical constants used in rhumb-line calculations

/// Mean Earth radius in kilometers (spherical model)
///
/// Value: 6371 km, the IUGG mean radius. Every distance produced by this
/// crate scales linearly with this constant; substitute 3440.065 for
/// nautical miles via `RhumbLineCalc::with_radius`.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// Numerical stability constants

/// Threshold below which the projected-latitude separation Δψ is treated as zero
///
/// When two points lie on (nearly) the same parallel, Δψ → 0 and the course
/// slope q = Δφ/Δψ degenerates. Below this threshold the small-angle
/// substitute q = cos(lat_a) is used instead.
pub const DELTA_PSI_THRESHOLD: f64 = 1e-11;

/// Tolerance for treating two Mercator-projected latitudes as equal
///
/// Below this the log-ratio denominator ln(f2/f1) in the midpoint closed
/// form is too small to divide by and the midpoint longitude falls back to
/// the arithmetic mean of the endpoint longitudes.
pub const MIDPOINT_PROJECTION_TOLERANCE: f64 = 1e-6;
