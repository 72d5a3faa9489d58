//! Point-feature marker overlay.
//!
//! Forward-projects each feature through the camera, culls the back
//! hemisphere, and draws a filled disk sized from a physical radius in
//! kilometers. Features are drawn in input order; overlapping markers
//! resolve as last-drawn-wins.

use globe_common::{GeoPoint, RenderConfig, Rgb};
use projection::{unit_vector, Camera, EARTH_RADIUS_KM};

use crate::canvas::Canvas;

/// A park ready to draw: position plus resolved color.
#[derive(Debug, Clone)]
pub struct PointFeature {
    /// Used only for diagnostics.
    pub name: String,
    pub location: GeoPoint,
    pub color: Rgb,
}

impl PointFeature {
    pub fn new(name: impl Into<String>, location: GeoPoint, color: Rgb) -> Self {
        Self {
            name: name.into(),
            location,
            color,
        }
    }
}

/// Draw features onto the canvas; returns how many were visible.
///
/// Visibility is strict: view-space z must be greater than zero, so tangent
/// points (z == 0) are treated as not visible. Disks extending past the
/// canvas or the globe disk are clipped silently.
pub fn draw_features(
    canvas: &mut Canvas,
    config: &RenderConfig,
    camera: &Camera,
    features: &[PointFeature],
) -> usize {
    let size = canvas.size();
    let view_scale = config.view_scale();
    let globe_pixel_radius = (size as f64 / 2.0) / view_scale;
    let marker_radius = (config.marker_radius_km / EARTH_RADIUS_KM) * globe_pixel_radius;

    let mut visible = 0;
    for feature in features {
        let view = camera.apply(&unit_vector(
            feature.location.latitude,
            feature.location.longitude,
        ));

        if view.z <= 0.0 {
            tracing::debug!(name = %feature.name, z = view.z, "feature on far hemisphere, culled");
            continue;
        }
        visible += 1;

        let px = (view.x / view_scale + 1.0) * 0.5 * size as f64;
        let py = (-view.y / view_scale + 1.0) * 0.5 * size as f64;
        fill_disk(canvas, px, py, marker_radius, feature.color);
    }

    tracing::info!(visible, total = features.len(), "drew feature markers");
    visible
}

/// Paint a filled disk, clipped to the canvas. Pixel centers within the
/// radius are painted.
fn fill_disk(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64, color: Rgb) {
    let size = canvas.size() as isize;
    let radius_sq = radius * radius;

    let x_min = ((cx - radius).floor() as isize).max(0);
    let x_max = ((cx + radius).ceil() as isize).min(size - 1);
    let y_min = ((cy - radius).floor() as isize).max(0);
    let y_max = ((cy + radius).ceil() as isize).min(size - 1);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if dx * dx + dy * dy <= radius_sq {
                canvas.set(x as usize, y as usize, color);
            }
        }
    }
}
