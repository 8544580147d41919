//! Koordinaten mit optionalem Z-Wert und achsenparallele Ausdehnungen.

use glam::DVec2;

/// Einzelne Koordinate in Kartenprojektion (oder geographisch, je nach Kontext).
///
/// Der Z-Wert ist optional: fehlt er, gilt die Koordinate als 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// X bzw. Längengrad
    pub x: f64,
    /// Y bzw. Breitengrad
    pub y: f64,
    /// Höhe (None = kein Z-Wert vorhanden)
    pub z: Option<f64>,
}

impl Coordinate {
    /// Erstellt eine 2D-Koordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Erstellt eine 3D-Koordinate.
    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Erstellt eine 2D-Koordinate aus einem Vektor.
    pub fn from_xy(xy: DVec2) -> Self {
        Self::new(xy.x, xy.y)
    }

    /// Gibt die XY-Komponente als Vektor zurück.
    #[inline]
    pub fn xy(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Setzt X/Y, der Z-Wert bleibt erhalten.
    pub fn set_xy(&mut self, xy: DVec2) {
        self.x = xy.x;
        self.y = xy.y;
    }
}

/// Achsenparallele Ausdehnung (Bounding Box).
///
/// `Extent::empty()` ist das neutrale Element für `extend`: eine leere
/// Ausdehnung enthält nichts und wird von der ersten Erweiterung vollständig
/// ersetzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Minimale Ecke (links unten)
    pub min: DVec2,
    /// Maximale Ecke (rechts oben)
    pub max: DVec2,
}

impl Extent {
    /// Leere Ausdehnung (min = +∞, max = −∞).
    pub fn empty() -> Self {
        Self {
            min: DVec2::splat(f64::INFINITY),
            max: DVec2::splat(f64::NEG_INFINITY),
        }
    }

    /// Ausdehnung aus zwei Ecken.
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Ausdehnung um einen Mittelpunkt mit halber Breite/Höhe.
    pub fn from_center(center: DVec2, half_size: DVec2) -> Self {
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }

    /// Kleinste Ausdehnung, die alle Punkte enthält.
    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Self {
        let mut extent = Self::empty();
        for p in points {
            extent.extend_point(p);
        }
        extent
    }

    /// `true`, wenn noch kein Punkt aufgenommen wurde.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Erweitert die Ausdehnung um einen Punkt.
    pub fn extend_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Erweitert die Ausdehnung um eine andere Ausdehnung.
    pub fn extend(&mut self, other: &Extent) {
        if other.is_empty() {
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Prüft, ob ein Punkt innerhalb (inkl. Rand) liegt.
    pub fn contains(&self, p: DVec2) -> bool {
        !self.is_empty()
            && p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
    }

    /// Mittelpunkt der Ausdehnung.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Breite und Höhe (leer = 0).
    pub fn size(&self) -> DVec2 {
        if self.is_empty() {
            DVec2::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Die vier Ecken gegen den Uhrzeigersinn, beginnend links unten.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }
}

impl From<geo::Rect<f64>> for Extent {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self::new(
            DVec2::new(rect.min().x, rect.min().y),
            DVec2::new(rect.max().x, rect.max().y),
        )
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}
