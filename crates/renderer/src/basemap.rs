//! Base-map rasterization.
//!
//! For every pixel of the super-sampled canvas: decide whether it lies on the
//! visible sphere disk, inverse-project on-disk pixels to lon/lat through the
//! camera, classify land/ocean, and paint. This is the performance-critical
//! path; pixel classifications are independent given the read-only polygon
//! index and camera rotation, so rows are processed in parallel.

use nalgebra::Vector3;
use rayon::prelude::*;

use globe_common::RenderConfig;
use landmask::{LandPolygonSet, Surface};
use projection::{to_lat_lon, Camera};

use crate::canvas::Canvas;

/// Sample position `i` of `n` on an inclusive linear range.
///
/// Matches endpoint-inclusive sampling: the first pixel maps to `start`, the
/// last to `end`. A single-pixel canvas samples `start`.
fn lin_sample(i: usize, n: usize, start: f64, end: f64) -> f64 {
    if n < 2 {
        return start;
    }
    start + (end - start) * i as f64 / (n - 1) as f64
}

/// Rasterize the base map onto a fresh canvas.
///
/// Every pixel is assigned exactly one of space, ocean, or land. Pixel (0, 0)
/// is the top-left corner; image rows run from the most-positive view-space y
/// downward.
pub fn render_base_map(config: &RenderConfig, camera: &Camera, land: &LandPolygonSet) -> Canvas {
    let size = config.supersampled_size() as usize;
    let view_scale = config.view_scale();
    let land_color = config.land_color;
    let ocean_color = config.ocean_color;

    let started = std::time::Instant::now();
    let mut canvas = Canvas::filled(size, config.space_color);

    canvas
        .bytes_mut()
        .par_chunks_mut(size * 3)
        .enumerate()
        .for_each(|(row_idx, row)| {
            let y = lin_sample(row_idx, size, view_scale, -view_scale);
            for col_idx in 0..size {
                let x = lin_sample(col_idx, size, -view_scale, view_scale);
                let radius_sq = x * x + y * y;
                if radius_sq > 1.0 {
                    // Off the globe disk; keep the space fill.
                    continue;
                }

                let z = (1.0 - radius_sq).sqrt();
                let world = camera.apply_inverse(&Vector3::new(x, y, z));
                let (lat, lon) = to_lat_lon(&world);

                let color = match land.classify(lon, lat) {
                    Surface::Land => land_color,
                    Surface::Ocean => ocean_color,
                };
                let idx = col_idx * 3;
                row[idx] = color.r;
                row[idx + 1] = color.g;
                row[idx + 2] = color.b;
            }
        });

    tracing::info!(
        size,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "base map rasterized"
    );
    canvas
}
