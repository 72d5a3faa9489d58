//! Park dataset loading.
//!
//! Reads the park-data JSON produced by the upstream collector. Validation
//! is lenient per record: a park missing coordinates or metrics stays in the
//! list and is excluded per analysis variant instead.

use std::path::Path;

use serde::Deserialize;

use globe_common::{GeoPoint, MapResult};

/// Root of the park-data JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct ParkDataset {
    pub parks: Vec<ParkRecord>,
}

/// One park as stored in the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct ParkRecord {
    #[serde(default = "unknown_name")]
    pub name: String,

    /// Missing coordinates exclude the park from every map.
    pub coordinates: Option<GeoPoint>,

    /// Park area in acres, when known. The upstream collector already
    /// converted other units; `area_unit` in the file is not read here.
    #[serde(default)]
    pub area: Option<f64>,

    #[serde(default)]
    pub visitor_history: Vec<VisitorEntry>,
}

/// One year of visitor data.
#[derive(Debug, Clone, Deserialize)]
pub struct VisitorEntry {
    pub year: String,
    pub visitors: u64,
}

fn unknown_name() -> String {
    "Unknown Park".to_string()
}

impl ParkRecord {
    /// Visitor count for a year, if recorded.
    pub fn visitors_in(&self, year: &str) -> Option<u64> {
        self.visitor_history
            .iter()
            .find(|entry| entry.year == year)
            .map(|entry| entry.visitors)
    }

    /// Area in acres when present and positive.
    pub fn valid_area(&self) -> Option<f64> {
        self.area.filter(|a| a.is_finite() && *a > 0.0)
    }
}

/// Load and validate the park dataset from a JSON file.
pub fn load_parks(path: impl AsRef<Path>) -> MapResult<Vec<ParkRecord>> {
    let text = std::fs::read_to_string(path)?;
    let dataset: ParkDataset = serde_json::from_str(&text)?;
    tracing::info!(parks = dataset.parks.len(), "loaded park dataset");
    Ok(dataset.parks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "parks": [
            {
                "name": "Yellowstone National Park",
                "coordinates": {"latitude": 44.6, "longitude": -110.5},
                "area": 2219791.0,
                "area_unit": "acre",
                "visitor_history": [
                    {"year": "2019", "visitors": 4020288},
                    {"year": "2020", "visitors": 3806306}
                ]
            },
            {
                "coordinates": null,
                "visitor_history": []
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let dataset: ParkDataset = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(dataset.parks.len(), 2);

        let park = &dataset.parks[0];
        assert_eq!(park.name, "Yellowstone National Park");
        assert_eq!(park.visitors_in("2019"), Some(4020288));
        assert_eq!(park.visitors_in("2018"), None);
        assert_eq!(park.valid_area(), Some(2219791.0));
    }

    #[test]
    fn test_missing_fields_default() {
        let park = &serde_json::from_str::<ParkDataset>(SAMPLE).unwrap().parks[1];
        assert_eq!(park.name, "Unknown Park");
        assert!(park.coordinates.is_none());
        assert!(park.valid_area().is_none());
    }

    #[test]
    fn test_missing_parks_key_is_error() {
        assert!(serde_json::from_str::<ParkDataset>(r#"{"sites": []}"#).is_err());
    }

    #[test]
    fn test_non_positive_area_invalid() {
        let json = r#"{
            "parks": [{"name": "Flat", "coordinates": null, "area": 0.0, "visitor_history": []}]
        }"#;
        let dataset: ParkDataset = serde_json::from_str(json).unwrap();
        assert!(dataset.parks[0].valid_area().is_none());
    }

    #[test]
    fn test_load_parks_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let parks = load_parks(file.path()).unwrap();
        assert_eq!(parks.len(), 2);
    }

    #[test]
    fn test_load_parks_missing_file() {
        assert!(load_parks("/definitely/not/here.json").is_err());
    }
}
