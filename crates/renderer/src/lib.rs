//! Orthographic globe rendering.
//!
//! Implements the render pipeline:
//! - Base-map rasterization (land/ocean/space per pixel)
//! - Point-feature marker overlay
//! - Scalar-to-color transfer functions
//! - Super-sample downscaling and PNG encoding

pub mod basemap;
pub mod canvas;
pub mod downsample;
pub mod globe;
pub mod overlay;
pub mod png;
pub mod scale;

pub use canvas::Canvas;
pub use globe::GlobeRenderer;
pub use overlay::PointFeature;
