//! Integration tests for land/ocean classification.

use landmask::polygon::PolygonPart;
use landmask::{LandPolygonSet, Surface};

fn square(min: f64, max: f64) -> Vec<(f64, f64)> {
    vec![
        (min, min),
        (max, min),
        (max, max),
        (min, max),
        (min, min),
    ]
}

#[test]
fn test_empty_set_is_all_ocean() {
    let set = LandPolygonSet::new(vec![]);
    assert!(set.is_empty());
    assert_eq!(set.classify(0.0, 0.0), Surface::Ocean);
    assert_eq!(set.classify(-105.0, 45.0), Surface::Ocean);
}

#[test]
fn test_land_inside_ocean_outside() {
    let set = LandPolygonSet::new(vec![PolygonPart::new(square(-10.0, 10.0), vec![])]);

    assert_eq!(set.classify(0.0, 0.0), Surface::Land);
    assert_eq!(set.classify(9.0, -9.0), Surface::Land);
    assert_eq!(set.classify(50.0, 0.0), Surface::Ocean);
    assert_eq!(set.classify(0.0, 80.0), Surface::Ocean);
}

#[test]
fn test_candidate_bbox_hit_but_containment_miss() {
    // A triangle whose bbox covers the whole quadrant; points in the bbox but
    // outside the triangle must classify as ocean.
    let triangle = vec![(0.0, 0.0), (40.0, 0.0), (0.0, 40.0), (0.0, 0.0)];
    let set = LandPolygonSet::new(vec![PolygonPart::new(triangle, vec![])]);

    assert_eq!(set.classify(5.0, 5.0), Surface::Land);
    assert_eq!(set.classify(35.0, 35.0), Surface::Ocean);
}

#[test]
fn test_multiple_parts() {
    let set = LandPolygonSet::new(vec![
        PolygonPart::new(square(-120.0, -100.0), vec![]),
        PolygonPart::new(square(20.0, 40.0), vec![]),
    ]);
    assert_eq!(set.len(), 2);

    assert_eq!(set.classify(-110.0, -110.0), Surface::Land);
    assert_eq!(set.classify(30.0, 30.0), Surface::Land);
    assert_eq!(set.classify(0.0, 0.0), Surface::Ocean);
}

#[test]
fn test_lake_is_ocean() {
    let set = LandPolygonSet::new(vec![PolygonPart::new(
        square(0.0, 30.0),
        vec![square(10.0, 20.0)],
    )]);

    assert_eq!(set.classify(5.0, 5.0), Surface::Land);
    assert_eq!(set.classify(15.0, 15.0), Surface::Ocean);
}

#[test]
fn test_from_geojson_str() {
    let text = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"CONTINENT": "Square Island"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-5,-5],[5,-5],[5,5],[-5,5],[-5,-5]]]
            }
        }]
    }"#;

    let set = LandPolygonSet::from_geojson_str(text).unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.is_land(0.0, 0.0));
    assert!(!set.is_land(20.0, 0.0));
}
