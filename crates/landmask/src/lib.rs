//! Land/ocean classification from polygon datasets.
//!
//! Loads land boundaries from GeoJSON into an explicit polygon structure,
//! builds a bounding-box spatial index once at load time, and answers
//! per-point land-or-ocean queries. Implemented without an external geometry
//! dependency; containment uses the even-odd rule.

pub mod geojson;
pub mod index;
pub mod polygon;

use globe_common::MapResult;
use index::SpatialIndex;
use polygon::PolygonPart;

/// Classification of a geographic point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Land,
    Ocean,
}

/// An ordered collection of land polygons plus a spatial index.
///
/// Built once per run and read-only thereafter; queries are safe to issue
/// concurrently from rasterizer workers.
#[derive(Debug)]
pub struct LandPolygonSet {
    parts: Vec<PolygonPart>,
    index: SpatialIndex,
}

impl LandPolygonSet {
    /// Build the set (and its spatial index) from polygon parts.
    pub fn new(parts: Vec<PolygonPart>) -> Self {
        let index = SpatialIndex::build(&parts);
        Self { parts, index }
    }

    /// Load from a GeoJSON file.
    pub fn from_geojson_file(path: impl AsRef<std::path::Path>) -> MapResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_geojson_str(&text)
    }

    /// Load from GeoJSON text.
    pub fn from_geojson_str(text: &str) -> MapResult<Self> {
        let parts = geojson::parse_polygons(text)?;
        tracing::info!(parts = parts.len(), "loaded land polygon dataset");
        Ok(Self::new(parts))
    }

    /// Classify a point given in degrees.
    ///
    /// An empty candidate set is a valid outcome (ocean everywhere), not a
    /// failure.
    pub fn classify(&self, lon: f64, lat: f64) -> Surface {
        for &part_idx in self.index.candidates(lon, lat) {
            let part = &self.parts[part_idx];
            if part.bbox.contains_point(lon, lat) && part.contains(lon, lat) {
                return Surface::Land;
            }
        }
        Surface::Ocean
    }

    /// Convenience wrapper around [`classify`](Self::classify).
    pub fn is_land(&self, lon: f64, lat: f64) -> bool {
        self.classify(lon, lat) == Surface::Land
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
