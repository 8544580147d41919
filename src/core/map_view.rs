//! Kartenansicht: Mittelpunkt, Zoom, Rotation und Einpassen von Ausdehnungen.

use glam::DVec2;

use super::projection::HALF_SIZE;
use super::Extent;

/// Ansicht einer Karte in Web-Mercator.
///
/// Zoomstufe 0 zeigt die ganze Welt auf einer 256-Pixel-Kachel; jede
/// weitere Stufe halbiert die Auflösung (Einheiten pro Pixel).
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// Mittelpunkt in projizierten Koordinaten
    pub center: DVec2,
    /// Zoomstufe (gebrochene Werte erlaubt)
    pub zoom: f64,
    /// Minimale Zoomstufe
    pub min_zoom: f64,
    /// Maximale Zoomstufe
    pub max_zoom: f64,
    /// Rotation im Bogenmaß (gegen den Uhrzeigersinn)
    pub rotation: f64,
}

impl MapView {
    /// Auflösung bei Zoomstufe 0 (Einheiten pro Pixel).
    pub const MAX_RESOLUTION: f64 = 2.0 * HALF_SIZE / 256.0;

    /// Erstellt eine Ansicht; der Zoom wird auf `[0, max_zoom]` begrenzt.
    pub fn new(center: DVec2, zoom: f64, max_zoom: f64, rotation: f64) -> Self {
        let mut view = Self {
            center,
            zoom: 0.0,
            min_zoom: 0.0,
            max_zoom,
            rotation,
        };
        view.set_zoom(zoom);
        view
    }

    /// Aktuelle Auflösung (projizierte Einheiten pro Pixel).
    pub fn resolution(&self) -> f64 {
        Self::resolution_for_zoom(self.zoom)
    }

    /// Auflösung zu einer Zoomstufe.
    pub fn resolution_for_zoom(zoom: f64) -> f64 {
        Self::MAX_RESOLUTION / 2f64.powf(zoom)
    }

    /// Zoomstufe zu einer Auflösung.
    pub fn zoom_for_resolution(resolution: f64) -> f64 {
        (Self::MAX_RESOLUTION / resolution).log2()
    }

    /// Setzt den Zoom (begrenzt auf min/max).
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = if zoom.is_finite() {
            zoom.clamp(self.min_zoom, self.max_zoom)
        } else {
            self.max_zoom
        };
    }

    /// Zentriert die Ansicht auf einen Punkt.
    pub fn set_center(&mut self, center: DVec2) {
        self.center = center;
    }

    /// Verschiebt die Ansicht (Pan).
    pub fn pan(&mut self, delta: DVec2) {
        self.center += delta;
    }

    /// Zoomt um einen Faktor (2.0 = eine Stufe hinein), optional auf einen Fokuspunkt.
    ///
    /// Mit Fokus bleibt der Weltpunkt an derselben Bildschirmposition.
    pub fn zoom_towards(&mut self, factor: f64, focus: Option<DVec2>) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        let old_res = self.resolution();
        self.set_zoom(self.zoom + factor.log2());
        if let Some(focus) = focus {
            let scale = self.resolution() / old_res;
            self.center = focus + (self.center - focus) * scale;
        }
    }

    /// Sichtbare Ausdehnung bei gegebener Viewport-Größe (Pixel).
    ///
    /// Bei Rotation ist das die achsenparallele Hülle des gedrehten Ausschnitts.
    pub fn calculate_extent(&self, size: DVec2) -> Extent {
        let half = size * self.resolution() * 0.5;
        let (sin, cos) = self.rotation.sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let half_x = half.x * cos + half.y * sin;
        let half_y = half.x * sin + half.y * cos;
        Extent::from_center(self.center, DVec2::new(half_x, half_y))
    }

    /// Prüft, ob eine Position im sichtbaren Ausschnitt liegt.
    pub fn contains(&self, pos: DVec2, size: DVec2) -> bool {
        self.calculate_extent(size).contains(pos)
    }

    /// Passt die Ansicht an eine Ausdehnung an.
    ///
    /// Der Zoom wird zusätzlich durch `max_zoom` begrenzt; eine Ausdehnung
    /// ohne Fläche (einzelner Punkt) landet damit genau auf `max_zoom`.
    pub fn fit(&mut self, extent: &Extent, size: DVec2, max_zoom: f64) {
        if extent.is_empty() {
            return;
        }
        let size = sanitize_size(size);
        // Ausdehnung in das gedrehte Ansichtssystem bringen
        let rotated = Extent::from_points(
            extent
                .corners()
                .iter()
                .map(|c| DVec2::from_angle(-self.rotation).rotate(*c)),
        );
        let extent_size = rotated.size();
        let resolution = (extent_size.x / size.x).max(extent_size.y / size.y);
        let zoom = if resolution > 0.0 {
            Self::zoom_for_resolution(resolution)
        } else {
            f64::INFINITY
        };
        self.set_zoom(zoom.min(max_zoom));
        self.center = extent.center();
    }

    /// Rechnet Bildschirmkoordinaten (Pixel, Ursprung oben links) in Kartenkoordinaten um.
    pub fn screen_to_world(&self, screen: DVec2, size: DVec2) -> DVec2 {
        let res = self.resolution();
        let offset = screen - size * 0.5;
        let unrotated = DVec2::new(offset.x * res, -offset.y * res);
        self.center + DVec2::from_angle(self.rotation).rotate(unrotated)
    }

    /// Rechnet Kartenkoordinaten in Bildschirmkoordinaten um.
    pub fn world_to_screen(&self, world: DVec2, size: DVec2) -> DVec2 {
        let res = self.resolution();
        let local = DVec2::from_angle(-self.rotation).rotate(world - self.center);
        DVec2::new(local.x / res, -local.y / res) + size * 0.5
    }

    /// Rechnet eine Pixel-Toleranz in Karteneinheiten um.
    pub fn pixel_tolerance(&self, pixels: f64) -> f64 {
        pixels * self.resolution()
    }
}

/// Ersatzgröße für noch nicht gemessene (versteckte) Karten.
pub const FALLBACK_MAP_SIZE: DVec2 = DVec2::new(256.0, 256.0);

/// Ersetzt eine ungültige Viewport-Größe durch die Ersatzgröße.
pub fn sanitize_size(size: DVec2) -> DVec2 {
    if size.x >= 1.0 && size.y >= 1.0 {
        size
    } else {
        FALLBACK_MAP_SIZE
    }
}
