//! Orthographic look-at camera.
//!
//! The camera is a single composed rotation: an aim rotation that maps the
//! configured target vector onto the viewing axis `(0, 0, 1)`, followed by a
//! roll rotation about that axis. The same rotation value is used for both
//! base-map inverse projection and feature forward projection so that marker
//! overlays stay registered with the land mask.

use nalgebra::{UnitQuaternion, Vector3};

use globe_common::{GeoPoint, RenderConfig};

use crate::spherical::unit_vector;

/// Composed camera rotation for one render run.
///
/// The viewing axis is `(0, 0, 1)`: the front hemisphere has positive z in
/// view space.
#[derive(Debug, Clone)]
pub struct Camera {
    rotation: UnitQuaternion<f64>,
}

impl Camera {
    /// Build the camera from a look-at center and a roll angle in degrees.
    ///
    /// Positive roll rotates the image clockwise; the rotation about the
    /// viewing axis therefore uses the negated roll angle.
    pub fn new(center: GeoPoint, roll_deg: f64) -> Self {
        let target = unit_vector(center.latitude, center.longitude);

        // Minimal rotation taking the target onto the viewing axis. The
        // antipodal case (target == -z) has no unique minimal rotation; any
        // half-turn perpendicular to z works, and the explicit roll term
        // absorbs the arbitrary choice.
        let aim = UnitQuaternion::rotation_between(&target, &Vector3::z()).unwrap_or_else(|| {
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI)
        });

        let roll = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -roll_deg.to_radians());

        Self {
            rotation: roll * aim,
        }
    }

    /// Build the camera from a render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.center, config.roll_deg)
    }

    /// World space to view space (forward projection of features).
    pub fn apply(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.rotation.transform_vector(v)
    }

    /// View space to world space (inverse projection of rasterized pixels).
    pub fn apply_inverse(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.rotation.inverse_transform_vector(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_view_axis() {
        let camera = Camera::new(GeoPoint::new(45.0, -105.0), -13.0);
        let view = camera.apply(&unit_vector(45.0, -105.0));
        assert!((view.x).abs() < 1e-12);
        assert!((view.y).abs() < 1e-12);
        assert!((view.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_antipodal_target() {
        // Target opposite the viewing axis: rotation_between has no minimal
        // solution, the fallback half-turn must still aim correctly.
        let camera = Camera::new(GeoPoint::new(-90.0, 0.0), 0.0);
        let view = camera.apply(&unit_vector(-90.0, 0.0));
        assert!((view.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_roll_sign() {
        // For an equatorial camera at lon 0 the minimal aim rotation turns
        // about the world y axis, so with no roll the north pole lands at
        // view-space (-1, 0, 0): the left edge of the image.
        let no_roll = Camera::new(GeoPoint::new(0.0, 0.0), 0.0);
        let north = no_roll.apply(&unit_vector(90.0, 0.0));
        assert!(north.x < -0.99);
        assert!(north.y.abs() < 1e-9);

        // A positive 90° roll turns the image clockwise: what was at the
        // left edge moves to the top (+y).
        let rolled = Camera::new(GeoPoint::new(0.0, 0.0), 90.0);
        let north = rolled.apply(&unit_vector(90.0, 0.0));
        assert!(north.y > 0.99);
    }
}
