//! Kompakte Textkodierung des Ansichtszustands (`zoom/lon/lat/rotation`).

use anyhow::{anyhow, Context};
use std::fmt;
use std::str::FromStr;

/// Gespeicherter Ansichtszustand.
///
/// Länge/Breite sind geographisch (EPSG:4326), die Rotation im Bogenmaß.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Permalink {
    /// Ganzzahlige Zoomstufe
    pub zoom: i32,
    /// Längengrad des Mittelpunkts
    pub lon: f64,
    /// Breitengrad des Mittelpunkts
    pub lat: f64,
    /// Rotation im Bogenmaß
    pub rotation: f64,
}

/// Nachkommastellen für Länge/Breite beim Schreiben.
const COORD_DECIMALS: usize = 5;

impl FromStr for Permalink {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() < 4 {
            return Err(anyhow!(
                "Permalink '{}' hat {} statt 4 Teile",
                s,
                parts.len()
            ));
        }
        let zoom = parse_zoom(parts[0]).with_context(|| format!("Ungültiger Zoom in '{}'", s))?;
        let lon: f64 = parts[1]
            .trim()
            .parse()
            .with_context(|| format!("Ungültige Länge in '{}'", s))?;
        let lat: f64 = parts[2]
            .trim()
            .parse()
            .with_context(|| format!("Ungültige Breite in '{}'", s))?;
        let rotation: f64 = parts[3]
            .trim()
            .parse()
            .with_context(|| format!("Ungültige Rotation in '{}'", s))?;
        Ok(Self {
            zoom,
            lon,
            lat,
            rotation,
        })
    }
}

/// Zoom wird ganzzahlig gelesen, Nachkommastellen werden abgeschnitten.
fn parse_zoom(raw: &str) -> anyhow::Result<i32> {
    let raw = raw.trim();
    if let Ok(z) = raw.parse::<i32>() {
        return Ok(z);
    }
    let z: f64 = raw.parse()?;
    Ok(z.trunc() as i32)
}

impl fmt::Display for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{:.prec$}/{:.prec$}/{}",
            self.zoom,
            self.lon,
            self.lat,
            self.rotation,
            prec = COORD_DECIMALS
        )
    }
}
