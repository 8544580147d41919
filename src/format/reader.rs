//! Reader für GeoJSON (Feature, FeatureCollection oder reine Geometrie).

use anyhow::{bail, Context, Result};
use geojson::GeoJson;
use serde_json::Value;

use crate::core::projection::project;
use crate::core::{Coordinate, Feature, FeatureId, Geometry};

/// Liest Features aus einem GeoJSON-Text und projiziert sie in die Karte.
///
/// Leerer Text oder `null` ergeben eine leere Liste.
pub fn read_features(input: &str) -> Result<Vec<Feature>> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let value: Value = serde_json::from_str(trimmed).context("GeoJSON ist kein gültiges JSON")?;
    read_features_value(value)
}

/// Liest Features aus einem bereits geparsten JSON-Wert.
///
/// Ein JSON-String wird als (doppelt kodierter) GeoJSON-Text behandelt, wie
/// ihn Data-Attribute oder hochgeladene Dateien liefern.
pub fn read_features_value(value: Value) -> Result<Vec<Feature>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(text) => read_features(&text),
        other => {
            let geojson = GeoJson::from_json_value(other).context("Ungültiges GeoJSON-Dokument")?;
            match geojson {
                GeoJson::Feature(feature) => Ok(convert_feature(feature)?.into_iter().collect()),
                GeoJson::FeatureCollection(collection) => {
                    let mut features = Vec::with_capacity(collection.features.len());
                    for feature in collection.features {
                        if let Some(f) = convert_feature(feature)? {
                            features.push(f);
                        }
                    }
                    Ok(features)
                }
                GeoJson::Geometry(geometry) => Ok(vec![Feature::new(convert_geometry(&geometry)?)]),
            }
        }
    }
}

/// Liest das erste Feature (z.B. Projektgrenze).
pub fn read_feature(value: Value) -> Result<Option<Feature>> {
    Ok(read_features_value(value)?.into_iter().next())
}

fn convert_feature(feature: geojson::Feature) -> Result<Option<Feature>> {
    let Some(geometry) = feature.geometry.as_ref() else {
        log::debug!("Feature ohne Geometrie übersprungen");
        return Ok(None);
    };
    let geometry = convert_geometry(geometry)?;
    let id = feature.id.map(|id| match id {
        geojson::feature::Id::String(s) => FeatureId::Text(s),
        geojson::feature::Id::Number(n) => FeatureId::Number(n),
    });
    Ok(Some(Feature {
        id,
        geometry,
        properties: feature.properties.unwrap_or_default(),
    }))
}

fn convert_geometry(geometry: &geojson::Geometry) -> Result<Geometry> {
    use geojson::Value as G;

    let converted = match &geometry.value {
        G::Point(p) => Geometry::Point(convert_position(p)?),
        G::MultiPoint(points) => Geometry::MultiPoint(convert_line(points)?),
        G::LineString(line) => Geometry::LineString(convert_line(line)?),
        G::MultiLineString(lines) => Geometry::MultiLineString(convert_lines(lines)?),
        G::Polygon(rings) => Geometry::Polygon(convert_lines(rings)?),
        G::MultiPolygon(polygons) => Geometry::MultiPolygon(
            polygons
                .iter()
                .map(|rings| convert_lines(rings))
                .collect::<Result<_>>()?,
        ),
        G::GeometryCollection(_) => bail!("GeometryCollection wird nicht unterstützt"),
    };
    Ok(converted)
}

fn convert_lines(lines: &[Vec<Vec<f64>>]) -> Result<Vec<Vec<Coordinate>>> {
    lines.iter().map(|line| convert_line(line)).collect()
}

fn convert_line(line: &[Vec<f64>]) -> Result<Vec<Coordinate>> {
    line.iter().map(|p| convert_position(p)).collect()
}

fn convert_position(position: &[f64]) -> Result<Coordinate> {
    match position {
        [x, y] => Ok(project(Coordinate::new(*x, *y))),
        [x, y, z, ..] => Ok(project(Coordinate::with_z(*x, *y, *z))),
        _ => bail!("Position mit {} Werten, mindestens 2 erwartet", position.len()),
    }
}
