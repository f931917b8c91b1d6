//! Loxodromic power interpolation.
//!
//! Generates waypoints along a rhumb line by recursive midpoint bisection.
//! The point count must be one less than a power of two so the bisection
//! tree comes out complete: 1, 3, 7, 15, 31, ...
//!
//! Output order follows the bisection itself (top-level midpoint first,
//! then the left half's points, then the right half's), not west-to-east
//! geometric order. The first element is therefore always the overall
//! midpoint of the track.

use crate::calculator::RhumbLineCalc;
use crate::error::RhumbError;
use crate::point::GeoPoint;

impl RhumbLineCalc {
    /// `n_points` evenly spaced waypoints on the rhumb line from
    /// `point_a` to `point_b`, exclusive of the endpoints
    ///
    /// Fails with [`RhumbError::InvalidArgument`] unless `n_points + 1` is
    /// a power of two (with `n_points >= 1`).
    pub fn loxodromic_power_interpolation(
        &self,
        point_a: GeoPoint,
        point_b: GeoPoint,
        n_points: usize,
    ) -> Result<Vec<GeoPoint>, RhumbError> {
        if n_points == 0 || !(n_points + 1).is_power_of_two() {
            return Err(RhumbError::InvalidArgument(format!(
                "n_points must be a power of 2 minus 1 (1, 3, 7, 15, ...), got {}",
                n_points
            )));
        }

        let mut points = Vec::with_capacity(n_points);
        self.bisect(point_a, point_b, n_points, &mut points);
        Ok(points)
    }

    /// Emit the midpoint of (a, b), then recurse into both halves
    ///
    /// `depth` is the number of points still owed by this subtree; it is
    /// always of the form 2^k - 1, so the two halves split it evenly.
    fn bisect(&self, a: GeoPoint, b: GeoPoint, depth: usize, out: &mut Vec<GeoPoint>) {
        let mid = self.loxodromic_midpoint(a, b);
        out.push(mid);
        if depth > 1 {
            let half = (depth - 1) / 2;
            self.bisect(a, mid, half, out);
            self.bisect(mid, b, half, out);
        }
    }
}
