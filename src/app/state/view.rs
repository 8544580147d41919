use anyhow::{anyhow, Result};
use glam::DVec2;

use crate::core::map_view::sanitize_size;
use crate::core::projection::from_lon_lat;
use crate::core::{BasemapSet, Geolocation, MapView};
use crate::shared::options::{DEFAULT_LAT, DEFAULT_LON, DEFAULT_MAX_ZOOM, DEFAULT_ZOOM};

/// Eine verwaltete Karte mit eigener Ansicht und Positionsverfolgung.
#[derive(Debug, Clone)]
pub struct MapInstance {
    /// Kameraansicht
    pub view: MapView,
    /// Zuletzt gemessene Größe in Pixel
    pub size: DVec2,
    /// Größe muss neu gemessen werden (Panel wurde umgeschaltet)
    pub size_stale: bool,
    /// Positionsverfolgung dieser Karte
    pub geolocation: Geolocation,
}

impl MapInstance {
    /// Karte mit Standardansicht und noch ungemessener Größe.
    pub fn new() -> Self {
        Self {
            view: MapView::new(
                from_lon_lat(DEFAULT_LON, DEFAULT_LAT),
                DEFAULT_ZOOM,
                DEFAULT_MAX_ZOOM,
                0.0,
            ),
            size: DVec2::ZERO,
            size_stale: true,
            geolocation: Geolocation::new(),
        }
    }

    /// Größe für Berechnungen (Ersatzgröße, solange nicht gemessen).
    pub fn effective_size(&self) -> DVec2 {
        sanitize_size(self.size)
    }
}

impl Default for MapInstance {
    fn default() -> Self {
        Self::new()
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Alle Karten dieser Seite
    pub maps: Vec<MapInstance>,
    /// Verfügbare Basemaps
    pub basemaps: BasemapSet,
    /// Hinweistext, wenn keine Basemap konfiguriert ist
    pub basemap_notice: Option<String>,
    /// Sichtbarkeit des umgebenden Panels
    pub panel_visible: bool,
    /// Standardmittelpunkt (projiziert)
    pub default_center: DVec2,
    /// Maximalzoom beim Einpassen
    pub fit_max_zoom: f64,
}

impl ViewState {
    /// Eine Karte, sichtbares Panel.
    pub fn new() -> Self {
        Self::with_maps(1)
    }

    /// Zustand mit `count` Karten (mindestens einer).
    pub fn with_maps(count: usize) -> Self {
        Self {
            maps: (0..count.max(1)).map(|_| MapInstance::new()).collect(),
            basemaps: BasemapSet::default(),
            basemap_notice: None,
            panel_visible: true,
            default_center: from_lon_lat(DEFAULT_LON, DEFAULT_LAT),
            fit_max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Zugriff auf eine Karte per Index.
    pub fn map(&self, index: usize) -> Result<&MapInstance> {
        self.maps
            .get(index)
            .ok_or_else(|| anyhow!("Karte {} existiert nicht", index))
    }

    /// Mutabler Zugriff auf eine Karte per Index.
    pub fn map_mut(&mut self, index: usize) -> Result<&mut MapInstance> {
        self.maps
            .get_mut(index)
            .ok_or_else(|| anyhow!("Karte {} existiert nicht", index))
    }

    /// Primäre Karte (Index 0).
    pub fn primary(&self) -> &MapInstance {
        &self.maps[0]
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
