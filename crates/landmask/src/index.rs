//! Bounding-box spatial index.
//!
//! A fixed grid of buckets over the geographic domain; each bucket lists the
//! polygon parts whose bounding box intersects it. Point queries return the
//! candidate list for the containing bucket, narrowing the exact containment
//! tests the classifier must run per pixel.

use globe_common::BoundingBox;

use crate::polygon::PolygonPart;

/// Bucket grid resolution: 4° x 4° cells over [-180, 180] x [-90, 90].
const COLS: usize = 90;
const ROWS: usize = 45;

const LON_SPAN: f64 = 360.0;
const LAT_SPAN: f64 = 180.0;

/// Grid-bucket index over polygon part bounding boxes.
#[derive(Debug)]
pub struct SpatialIndex {
    buckets: Vec<Vec<usize>>,
}

impl SpatialIndex {
    /// Build the index from polygon parts. Empty input yields an index whose
    /// every query returns no candidates.
    pub fn build(parts: &[PolygonPart]) -> Self {
        let mut buckets = vec![Vec::new(); COLS * ROWS];

        for (part_idx, part) in parts.iter().enumerate() {
            let (col_min, row_min) = cell_of(part.bbox.min_x, part.bbox.min_y);
            let (col_max, row_max) = cell_of(part.bbox.max_x, part.bbox.max_y);

            for row in row_min..=row_max {
                for col in col_min..=col_max {
                    buckets[row * COLS + col].push(part_idx);
                }
            }
        }

        Self { buckets }
    }

    /// Part indices whose bounding box may contain the point.
    pub fn candidates(&self, lon: f64, lat: f64) -> &[usize] {
        let (col, row) = cell_of(lon, lat);
        &self.buckets[row * COLS + col]
    }

    /// Total number of bucket entries (diagnostics only).
    pub fn entry_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Map a coordinate to its bucket cell, clamping out-of-range input onto the
/// border cells.
fn cell_of(lon: f64, lat: f64) -> (usize, usize) {
    let col = ((lon + 180.0) / LON_SPAN * COLS as f64) as isize;
    let row = ((lat + 90.0) / LAT_SPAN * ROWS as f64) as isize;
    (
        col.clamp(0, COLS as isize - 1) as usize,
        row.clamp(0, ROWS as isize - 1) as usize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> PolygonPart {
        PolygonPart::new(
            vec![(min_x, min_y), (max_x, min_y), (max_x, max_y), (min_x, max_y)],
            vec![],
        )
    }

    #[test]
    fn test_empty_index() {
        let index = SpatialIndex::build(&[]);
        assert!(index.candidates(0.0, 0.0).is_empty());
        assert!(index.candidates(-179.9, -89.9).is_empty());
    }

    #[test]
    fn test_candidates_hit_and_miss() {
        let parts = vec![part(-10.0, -10.0, 10.0, 10.0), part(100.0, 20.0, 140.0, 60.0)];
        let index = SpatialIndex::build(&parts);

        assert_eq!(index.candidates(0.0, 0.0), &[0]);
        assert_eq!(index.candidates(120.0, 40.0), &[1]);
        assert!(index.candidates(-120.0, -60.0).is_empty());
    }

    #[test]
    fn test_boundary_coordinates_clamped() {
        let parts = vec![part(160.0, 70.0, 180.0, 90.0)];
        let index = SpatialIndex::build(&parts);

        // Exactly on the domain edge must not index out of bounds.
        assert_eq!(index.candidates(180.0, 90.0), &[0]);
        assert!(index.candidates(-180.0, -90.0).is_empty());
    }

    #[test]
    fn test_large_part_spans_buckets() {
        let parts = vec![part(-170.0, -80.0, 170.0, 80.0)];
        let index = SpatialIndex::build(&parts);
        assert_eq!(index.candidates(0.0, 0.0), &[0]);
        assert_eq!(index.candidates(-150.0, 70.0), &[0]);
        assert!(index.entry_count() > 1);
    }

    #[test]
    fn test_bbox_matches_exterior() {
        let p = part(-20.0, -10.0, 20.0, 10.0);
        assert_eq!(p.bbox, BoundingBox::new(-20.0, -10.0, 20.0, 10.0));
    }
}
