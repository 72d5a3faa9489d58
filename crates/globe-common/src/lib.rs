//! Common types and utilities shared across all park-globe crates.

pub mod bbox;
pub mod color;
pub mod config;
pub mod error;
pub mod geo;

pub use bbox::BoundingBox;
pub use color::Rgb;
pub use config::RenderConfig;
pub use error::{MapError, MapResult};
pub use geo::GeoPoint;
