//! Host-Schnittstelle: eingebettete Seitenkonfiguration, Cookies und Formularfeld.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::{BasemapLayer, CollectionMode, GeometryType};

/// Konfiguration, die die Host-Seite als Data-Attribute einbettet.
///
/// Zahlen dürfen als Zahl oder als Text kommen; unlesbare Werte gelten als
/// nicht gesetzt und fallen auf die Editor-Standardwerte zurück.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Ausgangsgeometrie (GeoJSON Feature oder FeatureCollection)
    pub geom: Option<Value>,
    /// Projektgrenze (GeoJSON Feature)
    pub bounds: Option<Value>,
    /// Standardansicht
    pub defaults: HostDefaults,
    /// Rotation in Grad
    #[serde(deserialize_with = "lenient_f64")]
    pub rotation: Option<f64>,
    /// Erlaubte Geometrietypen, leerzeichengetrennt (fehlt = keine Bearbeitung)
    pub edit: Option<String>,
    /// Popup-Konfiguration mit Link-Vorlage
    #[serde(deserialize_with = "lenient_popup")]
    pub popup: Option<PopupConfig>,
    /// Basemap-Layer
    pub layers: Vec<BasemapLayer>,
    /// Upload-Schalter
    #[serde(deserialize_with = "lenient_bool")]
    pub upload: bool,
    /// Aktive Listenfilter
    pub filters: HostFilters,
    /// Cookies der Seite
    pub cookies: BTreeMap<String, String>,
    /// Erzwingt einen Sammlungsmodus
    pub collection_mode: Option<CollectionMode>,
}

/// Standardansicht des Hosts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostDefaults {
    /// Längengrad des Mittelpunkts
    #[serde(deserialize_with = "lenient_f64")]
    pub lon: Option<f64>,
    /// Breitengrad des Mittelpunkts
    #[serde(deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    /// Start-Zoomstufe
    #[serde(deserialize_with = "lenient_f64")]
    pub zoom: Option<f64>,
    /// Höchste erlaubte Zoomstufe
    #[serde(deserialize_with = "lenient_f64")]
    pub maxzoom: Option<f64>,
    /// Höchste Zoomstufe beim Einpassen auf Features
    #[serde(rename = "fitMaxzoom", deserialize_with = "lenient_f64")]
    pub fit_maxzoom: Option<f64>,
}

/// Aktive Filter der Listenansicht.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostFilters {
    /// Ortsfilter aktiv
    #[serde(deserialize_with = "lenient_bool")]
    pub location: bool,
    /// Entfernungsfilter aktiv
    #[serde(deserialize_with = "lenient_bool")]
    pub distance: bool,
}

impl HostFilters {
    /// Ob ein Orts- oder Entfernungsfilter aktiv ist.
    pub fn any_active(&self) -> bool {
        self.location || self.distance
    }
}

/// Popup-Konfiguration (`href` enthält einen `[…]`-Platzhalter).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PopupConfig {
    /// URL-Vorlage des Bearbeiten-Links, z.B. `/issues/[id]/edit`
    #[serde(default)]
    pub href: String,
}

impl HostConfig {
    /// Liest die Konfiguration aus einem JSON-Text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Host-Konfiguration ist kein gültiges JSON")
    }

    /// Liest die Konfiguration aus einer Datei.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Host-Konfiguration nicht lesbar: {}", path.display()))?;
        let config = Self::from_json(&text)?;
        log::info!("Host-Konfiguration geladen aus: {}", path.display());
        Ok(config)
    }

    /// Erlaubte Geometrietypen in Host-Reihenfolge.
    ///
    /// Unbekannte Einträge werden übersprungen.
    pub fn allowed_types(&self) -> Vec<GeometryType> {
        let mut types = Vec::new();
        for token in self.edit.as_deref().unwrap_or_default().split_whitespace() {
            match token.parse::<GeometryType>() {
                Ok(t) if t.is_drawable() && !types.contains(&t) => types.push(t),
                Ok(_) => {}
                Err(e) => log::warn!("Geometrietyp ignoriert: {:#}", e),
            }
        }
        types
    }

    /// Sammlungsmodus: Einzelgeometrie bei Bearbeitungsrechten, sonst Mehrfachanzeige.
    pub fn collection_mode(&self) -> CollectionMode {
        self.collection_mode.unwrap_or(if self.allowed_types().is_empty() {
            CollectionMode::Multi
        } else {
            CollectionMode::Single
        })
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(s.trim(), "true" | "1"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    })
}

/// Popup als Objekt oder als JSON-Text (Data-Attribut).
fn lenient_popup<'de, D>(deserializer: D) -> Result<Option<PopupConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let value = match value {
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => serde_json::from_str(&s).map_err(serde::de::Error::custom)?,
        Some(Value::Null) | None => return Ok(None),
        Some(other) => other,
    };
    serde_json::from_value(value)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

/// Cookies der Host-Seite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieJar {
    values: BTreeMap<String, String>,
}

impl CookieJar {
    /// Übernimmt vorhandene Cookies.
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Liest einen Cookie.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Setzt einen Cookie.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Alle Cookies (für die Rückgabe an den Host).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Verstecktes Formularfeld, das der Host beim Absenden persistiert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    /// Feldname
    pub name: String,
    /// Aktueller Inhalt (GeoJSON-Text)
    pub value: String,
    /// Zähler der Schreibvorgänge
    pub revision: u64,
}

impl FormField {
    /// Leeres Feld mit Namen.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: String::new(),
            revision: 0,
        }
    }

    /// Überschreibt den Inhalt (der letzte Schreibvorgang gewinnt).
    pub fn write(&mut self, value: String) {
        self.value = value;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_accept_strings() {
        let host = HostConfig::from_json(
            r#"{"defaults":{"lon":"139.5","lat":35,"zoom":"","maxzoom":"abc","fitMaxzoom":"17"},"rotation":"90"}"#,
        )
        .unwrap();
        assert_eq!(host.defaults.lon, Some(139.5));
        assert_eq!(host.defaults.lat, Some(35.0));
        assert_eq!(host.defaults.zoom, None);
        assert_eq!(host.defaults.maxzoom, None);
        assert_eq!(host.defaults.fit_maxzoom, Some(17.0));
        assert_eq!(host.rotation, Some(90.0));
    }

    #[test]
    fn test_edit_list_drives_collection_mode() {
        let host = HostConfig::from_json(r#"{"edit":"Point  Polygon Circle"}"#).unwrap();
        assert_eq!(
            host.allowed_types(),
            vec![GeometryType::Point, GeometryType::Polygon]
        );
        assert_eq!(host.collection_mode(), CollectionMode::Single);

        let readonly = HostConfig::from_json("{}").unwrap();
        assert!(readonly.allowed_types().is_empty());
        assert_eq!(readonly.collection_mode(), CollectionMode::Multi);

        let forced = HostConfig::from_json(r#"{"edit":"Point","collection_mode":"multi"}"#).unwrap();
        assert_eq!(forced.collection_mode(), CollectionMode::Multi);
    }

    #[test]
    fn test_popup_accepts_object_and_json_text() {
        let a = HostConfig::from_json(r#"{"popup":{"href":"/issues/[id]"}}"#).unwrap();
        let b = HostConfig::from_json(r#"{"popup":"{\"href\":\"/issues/[id]\"}"}"#).unwrap();
        assert_eq!(a.popup, b.popup);
        assert_eq!(a.popup.unwrap().href, "/issues/[id]");
    }

    #[test]
    fn test_filters_and_upload_flags() {
        let host =
            HostConfig::from_json(r#"{"upload":"true","filters":{"location":true}}"#).unwrap();
        assert!(host.upload);
        assert!(host.filters.any_active());
    }

    #[test]
    fn test_form_field_counts_writes() {
        let mut field = FormField::new("geom");
        field.write("a".into());
        field.write("b".into());
        assert_eq!(field.value, "b");
        assert_eq!(field.revision, 2);
    }
}
