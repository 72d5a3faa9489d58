//! Super-sample downscaling.
//!
//! Resizes the super-sampled canvas to the final output resolution with a
//! Lanczos3 filter for anti-aliasing.

use image::imageops::FilterType;
use image::RgbImage;

use globe_common::{MapError, MapResult};

use crate::canvas::Canvas;

/// Downscale a canvas to `output_size`. A same-size request is a copy.
pub fn downsample(canvas: &Canvas, output_size: u32) -> MapResult<Canvas> {
    let size = canvas.size() as u32;
    if size == output_size {
        return Ok(canvas.clone());
    }

    let img = RgbImage::from_raw(size, size, canvas.as_bytes().to_vec())
        .ok_or_else(|| MapError::Render("canvas buffer did not form an image".into()))?;

    let resized = image::imageops::resize(&img, output_size, output_size, FilterType::Lanczos3);
    tracing::debug!(from = size, to = output_size, "downsampled canvas");

    Canvas::from_raw(output_size as usize, resized.into_raw())
}
