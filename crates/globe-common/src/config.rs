//! Render configuration.
//!
//! One immutable value passed into every component constructor; there is no
//! process-wide mutable configuration.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{MapError, MapResult};
use crate::geo::GeoPoint;

/// Immutable configuration for one render run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Final output image side length in pixels.
    pub image_size: u32,

    /// Super-sampling factor; the canvas is rendered at
    /// `image_size * supersample` and downsampled for anti-aliasing.
    pub supersample: u32,

    /// The point placed at the image center.
    pub center: GeoPoint,

    /// Camera roll in degrees, positive = clockwise image rotation.
    pub roll_deg: f64,

    /// Fraction of the canvas left as empty border around the globe disk,
    /// in [0, 1).
    pub margin_fraction: f64,

    /// Background color for land pixels.
    pub land_color: Rgb,

    /// Background color for ocean pixels.
    pub ocean_color: Rgb,

    /// Background color outside the globe disk.
    pub space_color: Rgb,

    /// Physical radius of park markers in kilometers.
    pub marker_radius_km: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        // Centered on the United States for better visibility of the data.
        Self {
            image_size: 2048,
            supersample: 2,
            center: GeoPoint::new(45.0, -105.0),
            roll_deg: -13.0,
            margin_fraction: 0.05,
            land_color: Rgb::new(78, 97, 65),
            ocean_color: Rgb::new(130, 160, 194),
            space_color: Rgb::new(10, 15, 20),
            marker_radius_km: 50.0,
        }
    }
}

impl RenderConfig {
    /// Side length of the super-sampled canvas.
    pub fn supersampled_size(&self) -> u32 {
        self.image_size * self.supersample
    }

    /// View-space scale factor: the globe disk has radius 1 and the canvas
    /// spans `[-view_scale, view_scale]`.
    pub fn view_scale(&self) -> f64 {
        1.0 / (1.0 - self.margin_fraction)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> MapResult<()> {
        if self.image_size == 0 {
            return Err(MapError::InvalidConfig("image_size must be > 0".into()));
        }
        if self.supersample == 0 {
            return Err(MapError::InvalidConfig("supersample must be > 0".into()));
        }
        if !(0.0..1.0).contains(&self.margin_fraction) {
            return Err(MapError::InvalidConfig(format!(
                "margin_fraction must be in [0, 1): {}",
                self.margin_fraction
            )));
        }
        if !self.marker_radius_km.is_finite() || self.marker_radius_km <= 0.0 {
            return Err(MapError::InvalidConfig(format!(
                "marker_radius_km must be positive: {}",
                self.marker_radius_km
            )));
        }
        self.center.validate()
    }
}
