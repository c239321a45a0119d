use nalgebra::Vector3;

use crate::ellipsoid::Ellipsoid;
use crate::topocentric::{sez_to_ecef, Sez};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub latitude: f64,  // degrees
    pub longitude: f64, // degrees
    pub altitude: f64,  // kilometers above the ellipsoid
}

impl Observer {
    pub fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Self {
            latitude: lat,
            longitude: lon,
            altitude: alt,
        }
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude.to_radians()
    }

    // Convert observer location to ECEF coordinates (km)
    pub fn to_ecef(&self) -> Vector3<f64> {
        geodetic_to_ecef(
            &Ellipsoid::EARTH,
            self.lat_rad(),
            self.lon_rad(),
            self.altitude,
        )
    }

    /// Geocentric ECEF position (km) of a point given in this observer's SEZ frame.
    pub fn locate(&self, sez: &Sez) -> Vector3<f64> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            log::warn!(
                "Observer latitude {}° is outside [-90°, 90°]; converting anyway",
                self.latitude
            );
        }

        let lat_rad = self.lat_rad();
        let lon_rad = self.lon_rad();

        let origin = self.to_ecef();
        let offset = sez_to_ecef(lat_rad, lon_rad, sez);
        log::debug!(
            "observer ECEF: [{}, {}, {}] km, rotated offset: [{}, {}, {}] km",
            origin.x,
            origin.y,
            origin.z,
            offset.x,
            offset.y,
            offset.z
        );

        origin + offset
    }
}

/// Closed-form geodetic (radians, km) to ECEF (km) conversion.
pub fn geodetic_to_ecef(
    ellipsoid: &Ellipsoid,
    lat_rad: f64,
    lon_rad: f64,
    height_km: f64,
) -> Vector3<f64> {
    let e2 = ellipsoid.eccentricity_squared();
    let n = ellipsoid.prime_vertical_radius(lat_rad);

    let x = (n + height_km) * lat_rad.cos() * lon_rad.cos();
    let y = (n + height_km) * lat_rad.cos() * lon_rad.sin();
    let z = (n * (1.0 - e2) + height_km) * lat_rad.sin();

    Vector3::new(x, y, z)
}
