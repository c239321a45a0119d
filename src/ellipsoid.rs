/// Reference ellipsoid used for geodetic conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub equatorial_radius_km: f64,
    pub eccentricity: f64,
}

impl Ellipsoid {
    /// Earth model used by every conversion in this crate.
    pub const EARTH: Ellipsoid = Ellipsoid {
        equatorial_radius_km: 6378.137,
        eccentricity: 0.081819221456,
    };

    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity.powi(2)
    }

    /// Radius of curvature in the prime vertical (km) at the given geodetic latitude.
    pub fn prime_vertical_radius(&self, lat_rad: f64) -> f64 {
        self.equatorial_radius_km / denominator(self.eccentricity, lat_rad)
    }
}

/// `sqrt(1 - e^2 * sin^2(lat))`, the denominator of the prime vertical radius.
///
/// Lies in (0, 1] for any eccentricity below 1. Larger eccentricities are not
/// physical and yield NaN.
pub fn denominator(eccentricity: f64, lat_rad: f64) -> f64 {
    (1.0 - eccentricity.powi(2) * lat_rad.sin().powi(2)).sqrt()
}
