//! Writer für GeoJSON (Formularfeld, Export).

use anyhow::{Context, Result};

use crate::core::projection::unproject;
use crate::core::{Coordinate, Feature, FeatureId, Geometry};

/// Serialisiert ein Feature (Geometrie + Eigenschaften) als GeoJSON-Text.
///
/// Mit `include_z` erhält jede Koordinate einen Z-Wert; fehlende Werte
/// werden mit dem repräsentativen Z des Features aufgefüllt.
pub fn write_feature(feature: &Feature, include_z: bool) -> Result<String> {
    serde_json::to_string(&to_geojson_feature(feature, include_z))
        .context("Feature konnte nicht serialisiert werden")
}

/// Serialisiert mehrere Features als FeatureCollection.
pub fn write_feature_collection(features: &[Feature], include_z: bool) -> Result<String> {
    let collection = geojson::FeatureCollection {
        bbox: None,
        features: features
            .iter()
            .map(|f| to_geojson_feature(f, include_z))
            .collect(),
        foreign_members: None,
    };
    serde_json::to_string(&collection).context("FeatureCollection konnte nicht serialisiert werden")
}

fn to_geojson_feature(feature: &Feature, include_z: bool) -> geojson::Feature {
    let id = feature.id.as_ref().map(|id| match id {
        FeatureId::Text(s) => geojson::feature::Id::String(s.clone()),
        FeatureId::Number(n) => geojson::feature::Id::Number(n.clone()),
    });
    let geometry = if include_z {
        let mut filled = feature.geometry.clone();
        filled.backfill_z(feature.geometry.representative_z());
        to_geojson_geometry(&filled)
    } else {
        to_geojson_geometry(&feature.geometry)
    };
    geojson::Feature {
        bbox: None,
        geometry: Some(geometry),
        id,
        properties: Some(feature.properties.clone()),
        foreign_members: None,
    }
}

fn to_geojson_geometry(geometry: &Geometry) -> geojson::Geometry {
    use geojson::Value as G;

    let line = |coords: &[Coordinate]| coords.iter().map(position).collect::<Vec<_>>();
    let rings = |rings: &[Vec<Coordinate>]| rings.iter().map(|r| line(r)).collect::<Vec<_>>();

    let value = match geometry {
        Geometry::Point(c) => G::Point(position(c)),
        Geometry::MultiPoint(points) => G::MultiPoint(line(points)),
        Geometry::LineString(coords) => G::LineString(line(coords)),
        Geometry::MultiLineString(lines) => G::MultiLineString(rings(lines)),
        Geometry::Polygon(polygon) => G::Polygon(rings(polygon)),
        Geometry::MultiPolygon(polygons) => {
            G::MultiPolygon(polygons.iter().map(|p| rings(p)).collect())
        }
    };
    geojson::Geometry::new(value)
}

fn position(c: &Coordinate) -> Vec<f64> {
    let geo = unproject(*c);
    match geo.z {
        Some(z) => vec![geo.x, geo.y, z],
        None => vec![geo.x, geo.y],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projection::from_lon_lat;
    use serde_json::{json, Value};

    fn projected(lon: f64, lat: f64, z: Option<f64>) -> Coordinate {
        let p = from_lon_lat(lon, lat);
        Coordinate { x: p.x, y: p.y, z }
    }

    fn coords_of(text: &str) -> Value {
        let v: Value = serde_json::from_str(text).unwrap();
        v["geometry"]["coordinates"].clone()
    }

    #[test]
    fn test_point_is_written_geographic() {
        let feature = Feature::new(Geometry::Point(projected(135.0, 35.0, None)))
            .with_property("subject", "Ampel");
        let text = write_feature(&feature, false).unwrap();
        let v: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["type"], "Feature");
        assert_eq!(v["geometry"]["type"], "Point");
        assert_eq!(v["properties"], json!({"subject": "Ampel"}));
        let c = v["geometry"]["coordinates"].as_array().unwrap();
        assert_eq!(c.len(), 2);
        assert!((c[0].as_f64().unwrap() - 135.0).abs() < 1e-9);
        assert!((c[1].as_f64().unwrap() - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_include_z_backfills_missing_values() {
        let line = Geometry::LineString(vec![
            projected(0.0, 0.0, Some(5.0)),
            projected(1.0, 1.0, None),
            projected(2.0, 2.0, Some(15.0)),
        ]);
        let coords = coords_of(&write_feature(&Feature::new(line), true).unwrap());
        let zs: Vec<f64> = coords
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c[2].as_f64().unwrap())
            .collect();
        assert_eq!(zs, vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn test_without_include_z_only_present_values_are_written() {
        let line = Geometry::LineString(vec![
            projected(0.0, 0.0, Some(5.0)),
            projected(1.0, 1.0, None),
        ]);
        let coords = coords_of(&write_feature(&Feature::new(line), false).unwrap());
        assert_eq!(coords[0].as_array().unwrap().len(), 3);
        assert_eq!(coords[1].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_collection_keeps_order_and_ids() {
        let mut a = Feature::new(Geometry::Point(projected(1.0, 1.0, None)));
        a.id = Some(FeatureId::Text("a".into()));
        let b = Feature::new(Geometry::Point(projected(2.0, 2.0, None))).with_property("id", 7);
        let text = write_feature_collection(&[a, b], false).unwrap();
        let v: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["type"], "FeatureCollection");
        assert_eq!(v["features"][0]["id"], "a");
        assert_eq!(v["features"][1]["properties"]["id"], 7);
    }
}
