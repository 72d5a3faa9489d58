//! Analysis variants: metric derivation, normalization, and coloring.
//!
//! Each variant turns park records into overlay-ready features. Parks
//! lacking a variant's required inputs are dropped from that variant only
//! and logged; dropping is not an error. Normalization owns the divisor
//! guard: a zero-valued range is replaced by 1.0, which degenerates to a
//! single-color map instead of failing.

use globe_common::GeoPoint;
use renderer::scale::{change_color, density_color, visitor_color};
use renderer::PointFeature;

use crate::parks::ParkRecord;

/// Divisor guard shared by every variant.
fn guarded(range: f64) -> f64 {
    if range == 0.0 {
        1.0
    } else {
        range
    }
}

/// A park that qualified for a variant, before coloring.
struct Derived {
    name: String,
    location: GeoPoint,
    value: f64,
}

/// Raw visitor counts for one year, yellow-to-dark-red.
pub fn popularity_features(parks: &[ParkRecord], year: &str) -> Vec<PointFeature> {
    let mut derived = Vec::new();
    for park in parks {
        let Some(location) = park.coordinates else {
            tracing::info!(park = %park.name, "excluded: missing coordinates");
            continue;
        };
        let Some(visitors) = park.visitors_in(year) else {
            tracing::info!(park = %park.name, year, "excluded: missing visitor data");
            continue;
        };
        derived.push(Derived {
            name: park.name.clone(),
            location,
            value: visitors as f64,
        });
    }

    let min = fold_min(&derived);
    let max = fold_max(&derived);
    let range = guarded(max - min);

    derived
        .into_iter()
        .map(|d| {
            let t = (d.value - min) / range;
            PointFeature::new(d.name, d.location, visitor_color(t))
        })
        .collect()
}

/// Cube-root visitor density for one year, blue-to-dark-green.
///
/// Deliberate outlier handling specific to this dataset: the single
/// largest-density park is forced to pure black, and everyone else is
/// normalized against the second-largest value so the outlier does not
/// compress the rest of the scale. Ties at the maximum all paint black.
pub fn density_features(parks: &[ParkRecord], year: &str) -> Vec<PointFeature> {
    let mut derived = Vec::new();
    for park in parks {
        let Some(location) = park.coordinates else {
            tracing::info!(park = %park.name, "excluded: missing coordinates");
            continue;
        };
        let Some(visitors) = park.visitors_in(year) else {
            tracing::info!(park = %park.name, year, "excluded: missing visitor data");
            continue;
        };
        let Some(area) = park.valid_area() else {
            tracing::info!(park = %park.name, "excluded: missing or invalid area");
            continue;
        };
        derived.push(Derived {
            name: park.name.clone(),
            location,
            value: (visitors as f64 / area).cbrt(),
        });
    }

    let min = fold_min(&derived);
    let true_max = fold_max(&derived);
    let effective_max = second_largest(&derived).unwrap_or(true_max);
    let range = guarded(effective_max - min);

    derived
        .into_iter()
        .map(|d| {
            let color = if d.value == true_max {
                globe_common::Rgb::BLACK
            } else {
                density_color((d.value - min) / range)
            };
            PointFeature::new(d.name, d.location, color)
        })
        .collect()
}

/// Year-over-year change, red-to-neutral-to-purple.
///
/// Returns the absolute-change features and the percent-change features.
/// Percent change excludes parks with zero visitors in the baseline year;
/// that exclusion does not affect the absolute map.
pub fn change_features(
    parks: &[ParkRecord],
    year_a: &str,
    year_b: &str,
) -> (Vec<PointFeature>, Vec<PointFeature>) {
    let mut derived = Vec::new();
    for park in parks {
        let Some(location) = park.coordinates else {
            tracing::info!(park = %park.name, "excluded: missing coordinates");
            continue;
        };
        let (Some(before), Some(after)) = (park.visitors_in(year_a), park.visitors_in(year_b))
        else {
            tracing::info!(park = %park.name, year_a, year_b, "excluded: missing required year data");
            continue;
        };
        derived.push((park.name.clone(), location, before, after));
    }

    let absolute: Vec<Derived> = derived
        .iter()
        .map(|(name, location, before, after)| Derived {
            name: name.clone(),
            location: *location,
            value: *after as f64 - *before as f64,
        })
        .collect();

    let mut percent = Vec::new();
    for (name, location, before, after) in &derived {
        if *before == 0 {
            tracing::info!(
                park = %name,
                year_a,
                "excluded from percent map: zero visitors in baseline year"
            );
            continue;
        }
        percent.push(Derived {
            name: name.clone(),
            location: *location,
            value: (*after as f64 - *before as f64) / *before as f64,
        });
    }

    (diverging(absolute), diverging(percent))
}

/// Normalize signed values by the largest magnitude and remap onto [0, 1].
fn diverging(derived: Vec<Derived>) -> Vec<PointFeature> {
    let max_abs = guarded(
        derived
            .iter()
            .map(|d| d.value.abs())
            .fold(0.0_f64, f64::max),
    );

    derived
        .into_iter()
        .map(|d| {
            let t = (d.value / max_abs) * 0.5 + 0.5;
            PointFeature::new(d.name, d.location, change_color(t))
        })
        .collect()
}

fn fold_min(derived: &[Derived]) -> f64 {
    derived.iter().map(|d| d.value).fold(f64::INFINITY, f64::min)
}

fn fold_max(derived: &[Derived]) -> f64 {
    derived
        .iter()
        .map(|d| d.value)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Second element of the values sorted descending (ties included), if any.
fn second_largest(derived: &[Derived]) -> Option<f64> {
    let mut values: Vec<f64> = derived.iter().map(|d| d.value).collect();
    values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    values.get(1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parks::{ParkRecord, VisitorEntry};
    use globe_common::Rgb;

    fn park(name: &str, lat: f64, lon: f64, area: Option<f64>, history: &[(&str, u64)]) -> ParkRecord {
        ParkRecord {
            name: name.to_string(),
            coordinates: Some(GeoPoint::new(lat, lon)),
            area,
            visitor_history: history
                .iter()
                .map(|(year, visitors)| VisitorEntry {
                    year: year.to_string(),
                    visitors: *visitors,
                })
                .collect(),
        }
    }

    #[test]
    fn test_popularity_excludes_missing_year() {
        let parks = vec![
            park("A", 40.0, -100.0, None, &[("2010", 1000)]),
            park("B", 41.0, -101.0, None, &[("2011", 2000)]),
        ];
        let features = popularity_features(&parks, "2010");
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "A");
    }

    #[test]
    fn test_popularity_excludes_missing_coordinates() {
        let mut record = park("A", 0.0, 0.0, None, &[("2010", 1000)]);
        record.coordinates = None;
        let features = popularity_features(&[record], "2010");
        assert!(features.is_empty());
    }

    #[test]
    fn test_popularity_normalization_endpoints() {
        let parks = vec![
            park("low", 40.0, -100.0, None, &[("2010", 100)]),
            park("high", 41.0, -101.0, None, &[("2010", 1100)]),
        ];
        let features = popularity_features(&parks, "2010");
        // min normalizes to 0 (yellow), max to 1 (dark red).
        assert_eq!(features[0].color, Rgb::new(255, 255, 0));
        assert_eq!(features[1].color, Rgb::new(139, 0, 0));
    }

    #[test]
    fn test_popularity_zero_range_uniform() {
        let parks = vec![
            park("A", 40.0, -100.0, None, &[("2010", 500)]),
            park("B", 41.0, -101.0, None, &[("2010", 500)]),
        ];
        let features = popularity_features(&parks, "2010");
        assert_eq!(features.len(), 2);
        // Zero range: everyone sits at t = 0, a single uniform color.
        assert_eq!(features[0].color, features[1].color);
        assert_eq!(features[0].color, Rgb::new(255, 255, 0));
    }

    #[test]
    fn test_density_max_forced_black() {
        let parks = vec![
            park("sparse", 40.0, -100.0, Some(1000.0), &[("2020", 1000)]),
            park("mid", 41.0, -101.0, Some(1000.0), &[("2020", 8000)]),
            park("crowded", 42.0, -102.0, Some(1.0), &[("2020", 1_000_000)]),
        ];
        let features = density_features(&parks, "2020");
        assert_eq!(features.len(), 3);

        let crowded = features.iter().find(|f| f.name == "crowded").unwrap();
        assert_eq!(crowded.color, Rgb::BLACK);

        // The runner-up is normalized against itself (second-largest as the
        // effective max), landing at t = 1.
        let mid = features.iter().find(|f| f.name == "mid").unwrap();
        assert_eq!(mid.color, Rgb::new(46, 8, 84));

        let sparse = features.iter().find(|f| f.name == "sparse").unwrap();
        assert_eq!(sparse.color, Rgb::new(0, 102, 255));
    }

    #[test]
    fn test_density_excludes_invalid_area() {
        let parks = vec![
            park("no area", 40.0, -100.0, None, &[("2020", 1000)]),
            park("zero area", 41.0, -101.0, Some(0.0), &[("2020", 1000)]),
            park("ok", 42.0, -102.0, Some(50.0), &[("2020", 1000)]),
        ];
        let features = density_features(&parks, "2020");
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "ok");
    }

    #[test]
    fn test_density_single_park_black() {
        let parks = vec![park("only", 40.0, -100.0, Some(10.0), &[("2020", 1000)])];
        let features = density_features(&parks, "2020");
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].color, Rgb::BLACK);
    }

    #[test]
    fn test_change_requires_both_years() {
        let parks = vec![
            park("both", 40.0, -100.0, None, &[("2019", 100), ("2020", 50)]),
            park("one", 41.0, -101.0, None, &[("2019", 100)]),
        ];
        let (absolute, percent) = change_features(&parks, "2019", "2020");
        assert_eq!(absolute.len(), 1);
        assert_eq!(percent.len(), 1);
    }

    #[test]
    fn test_change_normalization() {
        let parks = vec![
            park("down", 40.0, -100.0, None, &[("2019", 1000), ("2020", 0)]),
            park("up", 41.0, -101.0, None, &[("2019", 1000), ("2020", 2000)]),
        ];
        let (absolute, _) = change_features(&parks, "2019", "2020");

        // Both deltas have magnitude 1000: the decrease maps to t = 0 (red),
        // the increase to t = 1 (purple).
        let down = absolute.iter().find(|f| f.name == "down").unwrap();
        assert_eq!(down.color, Rgb::new(204, 0, 0));
        let up = absolute.iter().find(|f| f.name == "up").unwrap();
        assert_eq!(up.color, Rgb::new(107, 44, 145));
    }

    #[test]
    fn test_percent_excludes_zero_baseline() {
        let parks = vec![
            park("from zero", 40.0, -100.0, None, &[("2019", 0), ("2020", 500)]),
            park("normal", 41.0, -101.0, None, &[("2019", 100), ("2020", 150)]),
        ];
        let (absolute, percent) = change_features(&parks, "2019", "2020");
        assert_eq!(absolute.len(), 2);
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].name, "normal");
    }

    #[test]
    fn test_change_zero_deltas_neutral() {
        let parks = vec![park(
            "flat",
            40.0,
            -100.0,
            None,
            &[("2019", 100), ("2020", 100)],
        )];
        let (absolute, percent) = change_features(&parks, "2019", "2020");
        // max_abs is 0, guarded to 1.0; t = 0.5 exactly, neutral gray.
        assert_eq!(absolute[0].color, Rgb::new(232, 232, 232));
        assert_eq!(percent[0].color, Rgb::new(232, 232, 232));
    }
}
