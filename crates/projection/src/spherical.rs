//! Latitude/longitude to unit-sphere vector conversions.
//!
//! Coordinate convention: x points at (lat 0, lon 0), y at (lat 0, lon 90°E),
//! z at the north pole. Degrees at the API boundary, radians internally.

use nalgebra::Vector3;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Convert latitude/longitude in degrees to a unit vector.
pub fn unit_vector(lat_deg: f64, lon_deg: f64) -> Vector3<f64> {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    Vector3::new(
        lat.cos() * lon.cos(),
        lat.cos() * lon.sin(),
        lat.sin(),
    )
}

/// Convert a unit vector back to (latitude, longitude) in degrees.
///
/// Inverse of [`unit_vector`] up to floating-point tolerance. The input is
/// assumed to be of unit length; `z` is clamped so that accumulated rounding
/// from rotations cannot push `asin` out of domain.
pub fn to_lat_lon(v: &Vector3<f64>) -> (f64, f64) {
    let lat = v.z.clamp(-1.0, 1.0).asin();
    let lon = v.y.atan2(v.x);
    (lat.to_degrees(), lon.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions() {
        let v = unit_vector(0.0, 0.0);
        assert!((v.x - 1.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
        assert!(v.z.abs() < 1e-12);

        let v = unit_vector(0.0, 90.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);

        let v = unit_vector(90.0, 0.0);
        assert!((v.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_length() {
        for &(lat, lon) in &[(45.0, -105.0), (-33.9, 151.2), (78.2, 15.6)] {
            let v = unit_vector(lat, lon);
            assert!((v.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_clamped_asin() {
        // A z component just past 1.0 from rotation round-off must not NaN.
        let v = Vector3::new(0.0, 0.0, 1.0 + 1e-15);
        let (lat, _) = to_lat_lon(&v);
        assert!((lat - 90.0).abs() < 1e-9);
    }
}
