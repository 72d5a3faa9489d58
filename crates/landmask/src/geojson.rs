//! GeoJSON polygon extraction.
//!
//! Walks a GeoJSON document with serde_json and collects Polygon and
//! MultiPolygon geometries into [`PolygonPart`]s. Coordinates are assumed to
//! already be in geographic degrees; no re-projection is performed.

use serde_json::Value;

use globe_common::{MapError, MapResult};

use crate::polygon::PolygonPart;

/// Parse all polygon parts out of a GeoJSON document.
///
/// Accepts a FeatureCollection, a single Feature, or a bare geometry.
/// Non-polygon geometries are skipped; rings with fewer than 4 positions
/// (GeoJSON's closed-ring minimum) are rejected as invalid.
pub fn parse_polygons(text: &str) -> MapResult<Vec<PolygonPart>> {
    let root: Value = serde_json::from_str(text)?;

    let mut parts = Vec::new();
    match root["type"].as_str() {
        Some("FeatureCollection") => {
            let features = root["features"]
                .as_array()
                .ok_or_else(|| MapError::GeoJson("FeatureCollection without features".into()))?;
            for feature in features {
                collect_geometry(&feature["geometry"], &mut parts)?;
            }
        }
        Some("Feature") => collect_geometry(&root["geometry"], &mut parts)?,
        Some(_) => collect_geometry(&root, &mut parts)?,
        None => return Err(MapError::GeoJson("document has no type".into())),
    }

    Ok(parts)
}

fn collect_geometry(geometry: &Value, parts: &mut Vec<PolygonPart>) -> MapResult<()> {
    match geometry["type"].as_str() {
        Some("Polygon") => {
            parts.push(parse_polygon(&geometry["coordinates"])?);
        }
        Some("MultiPolygon") => {
            let polygons = geometry["coordinates"]
                .as_array()
                .ok_or_else(|| MapError::GeoJson("MultiPolygon without coordinates".into()))?;
            for polygon in polygons {
                parts.push(parse_polygon(polygon)?);
            }
        }
        Some("GeometryCollection") => {
            if let Some(geometries) = geometry["geometries"].as_array() {
                for geometry in geometries {
                    collect_geometry(geometry, parts)?;
                }
            }
        }
        // Points, lines and null geometries carry no landmass.
        _ => {}
    }
    Ok(())
}

fn parse_polygon(coordinates: &Value) -> MapResult<PolygonPart> {
    let rings = coordinates
        .as_array()
        .ok_or_else(|| MapError::GeoJson("Polygon without coordinate rings".into()))?;
    if rings.is_empty() {
        return Err(MapError::GeoJson("Polygon with no rings".into()));
    }

    let exterior = parse_ring(&rings[0])?;
    let mut holes = Vec::with_capacity(rings.len() - 1);
    for ring in &rings[1..] {
        holes.push(parse_ring(ring)?);
    }

    Ok(PolygonPart::new(exterior, holes))
}

fn parse_ring(ring: &Value) -> MapResult<Vec<(f64, f64)>> {
    let positions = ring
        .as_array()
        .ok_or_else(|| MapError::GeoJson("ring is not an array".into()))?;
    if positions.len() < 4 {
        return Err(MapError::GeoJson(format!(
            "ring has {} positions, need at least 4",
            positions.len()
        )));
    }

    let mut coords = Vec::with_capacity(positions.len());
    for position in positions {
        let pair = position
            .as_array()
            .ok_or_else(|| MapError::GeoJson("position is not an array".into()))?;
        let lon = pair
            .first()
            .and_then(Value::as_f64)
            .ok_or_else(|| MapError::GeoJson("position missing longitude".into()))?;
        let lat = pair
            .get(1)
            .and_then(Value::as_f64)
            .ok_or_else(|| MapError::GeoJson("position missing latitude".into()))?;
        coords.push((lon, lat));
    }

    Ok(coords)
}
