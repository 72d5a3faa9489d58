//! Polygon parts and even-odd containment.

use globe_common::BoundingBox;

/// A single polygon part: one exterior ring plus zero or more holes, in
/// longitude/latitude degrees. A GeoJSON MultiPolygon contributes one part
/// per member polygon.
#[derive(Debug, Clone)]
pub struct PolygonPart {
    pub exterior: Vec<(f64, f64)>,
    pub holes: Vec<Vec<(f64, f64)>>,
    pub bbox: BoundingBox,
}

impl PolygonPart {
    /// Build a part and precompute its bounding box from the exterior ring.
    pub fn new(exterior: Vec<(f64, f64)>, holes: Vec<Vec<(f64, f64)>>) -> Self {
        let bbox = BoundingBox::of_ring(&exterior);
        Self {
            exterior,
            holes,
            bbox,
        }
    }

    /// Even-odd containment test.
    ///
    /// Ray-casts toward +x and counts edge crossings over the exterior and
    /// every hole; an odd total means inside. Counting holes into the same
    /// parity sum makes points inside a hole classify as outside.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        let mut inside = ring_crossings_odd(&self.exterior, lon, lat);
        for hole in &self.holes {
            inside ^= ring_crossings_odd(hole, lon, lat);
        }
        inside
    }
}

/// True if a +x ray from the point crosses the ring an odd number of times.
fn ring_crossings_odd(ring: &[(f64, f64)], x: f64, y: f64) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut odd = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = ring[i];
        let (xj, yj) = ring[j];

        // Half-open edge test so shared vertices are not counted twice.
        if (yi > y) != (yj > y) {
            let x_cross = xi + (y - yi) / (yj - yi) * (xj - xi);
            if x < x_cross {
                odd = !odd;
            }
        }
        j = i;
    }
    odd
}
