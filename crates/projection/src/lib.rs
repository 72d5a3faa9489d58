//! Spherical coordinate mapping and the orthographic camera model.
//!
//! Implements the projection math from scratch on top of nalgebra; no
//! external geodesy dependencies.

pub mod camera;
pub mod spherical;

pub use camera::Camera;
pub use spherical::{to_lat_lon, unit_vector, EARTH_RADIUS_KM};
