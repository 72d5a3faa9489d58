//! Geographic point type.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, MapResult};

/// A geographic position in degrees.
///
/// Latitude is in [-90, 90], longitude in [-180, 180]. Immutable once read
/// from input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new geographic point without range checking.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate that the coordinates are finite and in range.
    pub fn validate(&self) -> MapResult<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(MapError::InvalidData(format!(
                "latitude out of range: {}",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(MapError::InvalidData(format!(
                "longitude out of range: {}",
                self.longitude
            )));
        }
        Ok(())
    }
}
