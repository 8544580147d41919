//! Zentrale Konfiguration für Ansicht, Interaktion und Darstellung.
//!
//! Alle Werte sind zur Laufzeit über `EditorOptions` änderbar und werden
//! in `gtt_map_editor.toml` neben der Binary gespeichert.

use serde::{Deserialize, Serialize};

use super::messages::Messages;

// ── Ansicht ─────────────────────────────────────────────────────

/// Standard-Längengrad, falls der Host keinen liefert.
pub const DEFAULT_LON: f64 = 135.1955;
/// Standard-Breitengrad, falls der Host keinen liefert.
pub const DEFAULT_LAT: f64 = 34.6901;
/// Standard-Zoomstufe.
pub const DEFAULT_ZOOM: f64 = 13.0;
/// Standard-Maximalzoom.
pub const DEFAULT_MAX_ZOOM: f64 = 18.0;
/// Zoomfaktor pro Mausrad-Schritt.
pub const SCROLL_ZOOM_STEP: f64 = 1.2;

// ── Interaktion ─────────────────────────────────────────────────

/// Trefferradius für Features und Stützpunkte in Pixel.
pub const HIT_TOLERANCE_PX: f64 = 6.0;

// ── Host-Schnittstelle ──────────────────────────────────────────

/// Cookie mit der zuletzt gewählten Basemap (`lid`).
pub const BASEMAP_COOKIE: &str = "_redmine_gtt_basemap";
/// Cookie mit dem Permalink (`zoom/lon/lat/rotation`).
pub const PERMALINK_COOKIE: &str = "_redmine_gtt_permalink";
/// Name des Formularfelds für das GeoJSON.
pub const FORM_FIELD_NAME: &str = "geom";
/// Eigenschaft, die im Popup als Titel erscheint.
pub const POPUP_LABEL_PROPERTY: &str = "subject";

// ── Farben ──────────────────────────────────────────────────────

/// Farbe des editierbaren Vektor-Layers.
pub const VECTOR_COLOR: [f32; 4] = [1.0, 0.8, 0.2, 1.0];
/// Farbe der Projektgrenze.
pub const BOUNDARY_COLOR: [f32; 4] = [0.161, 0.635, 0.882, 1.0];
/// Farbe des Positionsmarkers.
pub const GEOLOCATION_COLOR: [f32; 4] = [0.2, 0.6, 0.8, 1.0];
/// Farbe der Skizze während des Zeichnens.
pub const SKETCH_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.9];

/// Laufzeit-Optionen des Karteneditors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Ansicht ─────────────────────────────────────────────────
    /// Längengrad der Standardansicht
    pub default_lon: f64,
    /// Breitengrad der Standardansicht
    pub default_lat: f64,
    /// Zoomstufe der Standardansicht
    pub default_zoom: f64,
    /// Maximalzoom der Ansicht
    pub default_max_zoom: f64,
    /// Maximalzoom beim Einpassen auf Features
    pub fit_max_zoom: f64,
    /// Zoomfaktor pro Mausrad-Schritt
    pub scroll_zoom_step: f64,

    // ── Interaktion ─────────────────────────────────────────────
    /// Trefferradius in Pixel
    pub hit_tolerance_px: f64,

    // ── Host ────────────────────────────────────────────────────
    /// Cookie-Name der Basemap-Präferenz
    pub basemap_cookie: String,
    /// Cookie-Name des Permalinks
    pub permalink_cookie: String,
    /// Name des Formularfelds
    pub form_field: String,
    /// Eigenschaft für den Popup-Titel
    pub popup_label_property: String,

    // ── Farben ──────────────────────────────────────────────────
    /// Vektor-Layer
    pub vector_color: [f32; 4],
    /// Projektgrenze
    pub boundary_color: [f32; 4],
    /// Positionsmarker
    pub geolocation_color: [f32; 4],
    /// Zeichen-Skizze
    pub sketch_color: [f32; 4],

    /// UI-Texte
    pub messages: Messages,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_lon: DEFAULT_LON,
            default_lat: DEFAULT_LAT,
            default_zoom: DEFAULT_ZOOM,
            default_max_zoom: DEFAULT_MAX_ZOOM,
            fit_max_zoom: DEFAULT_MAX_ZOOM,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
            hit_tolerance_px: HIT_TOLERANCE_PX,
            basemap_cookie: BASEMAP_COOKIE.to_string(),
            permalink_cookie: PERMALINK_COOKIE.to_string(),
            form_field: FORM_FIELD_NAME.to_string(),
            popup_label_property: POPUP_LABEL_PROPERTY.to_string(),
            vector_color: VECTOR_COLOR,
            boundary_color: BOUNDARY_COLOR,
            geolocation_color: GEOLOCATION_COLOR,
            sketch_color: SKETCH_COLOR,
            messages: Messages::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler werden Standardwerte verwendet.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Pfad zur Konfigurationsdatei (neben der Binary).
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("gtt-map-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("gtt_map_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let opts: EditorOptions = toml::from_str("fit_max_zoom = 15.0\n").unwrap();
        assert_eq!(opts.fit_max_zoom, 15.0);
        assert_eq!(opts.default_lon, DEFAULT_LON);
        assert_eq!(opts.permalink_cookie, PERMALINK_COOKIE);
    }

    #[test]
    fn test_options_survive_toml_round_trip() {
        let mut opts = EditorOptions::default();
        opts.hit_tolerance_px = 9.0;
        opts.messages.invalid_file = "Ungültige Datei".into();
        let text = toml::to_string_pretty(&opts).unwrap();
        let back: EditorOptions = toml::from_str(&text).unwrap();
        assert_eq!(back, opts);
    }
}
