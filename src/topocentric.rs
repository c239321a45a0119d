use nalgebra::Vector3;

/// Topocentric offset in the observer's South-East-Zenith frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sez {
    pub south: f64,  // kilometers
    pub east: f64,   // kilometers
    pub zenith: f64, // kilometers
}

impl Sez {
    pub fn new(south: f64, east: f64, zenith: f64) -> Self {
        Self {
            south,
            east,
            zenith,
        }
    }
}

/// Rotate a SEZ offset into ECEF axes. No translation is applied.
pub fn sez_to_ecef(lat_rad: f64, lon_rad: f64, sez: &Sez) -> Vector3<f64> {
    let cos_lat = lat_rad.cos();
    let sin_lat = lat_rad.sin();
    let cos_lon = lon_rad.cos();
    let sin_lon = lon_rad.sin();

    let x = sez.south * sin_lat * cos_lon - sez.east * sin_lon + sez.zenith * cos_lat * cos_lon;
    let y = sez.south * sin_lat * sin_lon + sez.east * cos_lon + sez.zenith * cos_lat * sin_lon;
    let z = -sez.south * cos_lat + sez.zenith * sin_lat;

    Vector3::new(x, y, z)
}
