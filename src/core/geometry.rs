//! Vektorgeometrien (Punkt, Linie, Fläche und Multi-Varianten).

use geo::{BoundingRect, Contains, EuclideanDistance};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Coordinate, Extent};

/// Geometrietyp, wie er in GeoJSON und in der Host-Konfiguration benannt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// Einzelpunkt
    Point,
    /// Linienzug
    LineString,
    /// Fläche mit Außenring und optionalen Löchern
    Polygon,
    /// Mehrere Punkte
    MultiPoint,
    /// Mehrere Linienzüge
    MultiLineString,
    /// Mehrere Flächen
    MultiPolygon,
}

impl GeometryType {
    /// Alle Typen, die interaktiv gezeichnet werden können.
    pub const DRAWABLE: [GeometryType; 3] = [Self::Point, Self::LineString, Self::Polygon];

    /// GeoJSON-Name des Typs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
        }
    }

    /// Ob der Typ mit einem Zeichenwerkzeug erstellt werden kann.
    pub fn is_drawable(&self) -> bool {
        Self::DRAWABLE.contains(self)
    }

    /// Mindestanzahl an Sketch-Punkten für eine gültige Geometrie.
    pub fn min_sketch_points(&self) -> usize {
        match self {
            Self::Point | Self::MultiPoint => 1,
            Self::LineString | Self::MultiLineString => 2,
            Self::Polygon | Self::MultiPolygon => 3,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = anyhow::Error;

    /// Groß-/Kleinschreibung wird ignoriert (`"linestring"` == `"LineString"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let ty = match lower.as_str() {
            "point" => Self::Point,
            "linestring" => Self::LineString,
            "polygon" => Self::Polygon,
            "multipoint" => Self::MultiPoint,
            "multilinestring" => Self::MultiLineString,
            "multipolygon" => Self::MultiPolygon,
            _ => anyhow::bail!("Unbekannter Geometrietyp: '{}'", s),
        };
        Ok(ty)
    }
}

/// Vektorgeometrie mit Koordinaten in Kartenprojektion.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Einzelpunkt
    Point(Coordinate),
    /// Linienzug
    LineString(Vec<Coordinate>),
    /// Ringe: erster = Außenring, weitere = Löcher (jeweils geschlossen)
    Polygon(Vec<Vec<Coordinate>>),
    /// Mehrere Punkte
    MultiPoint(Vec<Coordinate>),
    /// Mehrere Linienzüge
    MultiLineString(Vec<Vec<Coordinate>>),
    /// Mehrere Flächen
    MultiPolygon(Vec<Vec<Vec<Coordinate>>>),
}

/// Zusammenhängende Koordinatenfolge einer Geometrie.
///
/// `ring = true` bedeutet: der letzte Punkt schließt den Ring und ist kein
/// eigenständig editierbarer Stützpunkt.
struct Path<'a> {
    coords: &'a [Coordinate],
    ring: bool,
}

struct PathMut<'a> {
    coords: &'a mut [Coordinate],
    ring: bool,
}

impl Path<'_> {
    fn vertex_count(&self) -> usize {
        editable_len(self.coords.len(), self.ring)
    }
}

fn editable_len(len: usize, ring: bool) -> usize {
    if ring && len > 1 {
        len - 1
    } else {
        len
    }
}

impl Geometry {
    /// Typ der Geometrie.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::LineString(_) => GeometryType::LineString,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
        }
    }

    /// Erstellt eine Geometrie aus gezeichneten Sketch-Punkten.
    ///
    /// Gibt `None` zurück, wenn zu wenige Punkte vorliegen oder der Typ nicht
    /// zeichenbar ist. Polygon-Ringe werden automatisch geschlossen.
    pub fn from_sketch(geometry_type: GeometryType, points: &[DVec2]) -> Option<Self> {
        if !geometry_type.is_drawable() || points.len() < geometry_type.min_sketch_points() {
            return None;
        }
        let coords: Vec<Coordinate> = points.iter().map(|p| Coordinate::from_xy(*p)).collect();
        match geometry_type {
            GeometryType::Point => Some(Self::Point(coords[0])),
            GeometryType::LineString => Some(Self::LineString(coords)),
            GeometryType::Polygon => {
                let mut ring = coords;
                if ring.first().map(Coordinate::xy) != ring.last().map(Coordinate::xy) {
                    ring.push(ring[0]);
                }
                Some(Self::Polygon(vec![ring]))
            }
            _ => None,
        }
    }

    fn paths(&self) -> Vec<Path<'_>> {
        match self {
            Self::Point(c) => vec![Path {
                coords: std::slice::from_ref(c),
                ring: false,
            }],
            Self::LineString(coords) | Self::MultiPoint(coords) => vec![Path {
                coords,
                ring: false,
            }],
            Self::Polygon(rings) => rings
                .iter()
                .map(|r| Path {
                    coords: r,
                    ring: true,
                })
                .collect(),
            Self::MultiLineString(lines) => lines
                .iter()
                .map(|l| Path {
                    coords: l,
                    ring: false,
                })
                .collect(),
            Self::MultiPolygon(polygons) => polygons
                .iter()
                .flat_map(|p| p.iter())
                .map(|r| Path {
                    coords: r,
                    ring: true,
                })
                .collect(),
        }
    }

    fn paths_mut(&mut self) -> Vec<PathMut<'_>> {
        match self {
            Self::Point(c) => vec![PathMut {
                coords: std::slice::from_mut(c),
                ring: false,
            }],
            Self::LineString(coords) | Self::MultiPoint(coords) => vec![PathMut {
                coords,
                ring: false,
            }],
            Self::Polygon(rings) => rings
                .iter_mut()
                .map(|r| PathMut {
                    coords: r,
                    ring: true,
                })
                .collect(),
            Self::MultiLineString(lines) => lines
                .iter_mut()
                .map(|l| PathMut {
                    coords: l,
                    ring: false,
                })
                .collect(),
            Self::MultiPolygon(polygons) => polygons
                .iter_mut()
                .flat_map(|p| p.iter_mut())
                .map(|r| PathMut {
                    coords: r,
                    ring: true,
                })
                .collect(),
        }
    }

    /// Iteriert über alle Koordinaten (inkl. schließender Ringpunkte).
    pub fn coordinates(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.paths().into_iter().flat_map(|p| p.coords)
    }

    /// Wendet `f` auf jede Koordinate an.
    pub fn for_each_coordinate_mut(&mut self, mut f: impl FnMut(&mut Coordinate)) {
        for path in self.paths_mut() {
            path.coords.iter_mut().for_each(&mut f);
        }
    }

    /// Gibt eine neue Geometrie mit transformierten Koordinaten zurück.
    pub fn map_coordinates(&self, f: impl Fn(Coordinate) -> Coordinate) -> Self {
        let mut out = self.clone();
        out.for_each_coordinate_mut(|c| *c = f(*c));
        out
    }

    /// Erste Koordinate (Anker für Popups).
    pub fn first_coordinate(&self) -> Option<Coordinate> {
        self.coordinates().next().copied()
    }

    /// Ausdehnung aller Koordinaten (leer ohne Koordinaten).
    pub fn extent(&self) -> Extent {
        self.to_geo()
            .bounding_rect()
            .map(Extent::from)
            .unwrap_or_default()
    }

    /// Anzahl editierbarer Stützpunkte (schließende Ringpunkte zählen nicht).
    pub fn vertex_count(&self) -> usize {
        self.paths().iter().map(Path::vertex_count).sum()
    }

    /// Repräsentativer Z-Wert für neue Zeichnungen.
    ///
    /// Punkt: eigener Z-Wert. Andere Typen: Mittelwert aller vorhandenen
    /// Z-Werte; Koordinaten ohne Z gehen nicht in den Mittelwert ein.
    /// Ohne Z-Werte: 0.
    pub fn representative_z(&self) -> f64 {
        if let Self::Point(c) = self {
            return c.z.unwrap_or(0.0);
        }
        let (sum, count) = self
            .coordinates()
            .filter_map(|c| c.z)
            .fold((0.0, 0usize), |(sum, count), z| (sum + z, count + 1));
        if count > 0 {
            sum / count as f64
        } else {
            0.0
        }
    }

    /// Setzt den Z-Wert aller Koordinaten.
    pub fn set_z(&mut self, z: f64) {
        self.for_each_coordinate_mut(|c| c.z = Some(z));
    }

    /// Füllt fehlende Z-Werte auf, vorhandene bleiben unverändert.
    pub fn backfill_z(&mut self, z: f64) {
        self.for_each_coordinate_mut(|c| {
            if c.z.is_none() {
                c.z = Some(z);
            }
        });
    }

    /// Sucht den nächstgelegenen Stützpunkt innerhalb von `tolerance`.
    ///
    /// Rückgabe: (Stützpunkt-Index, Abstand).
    pub fn nearest_vertex(&self, pos: DVec2, tolerance: f64) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        let mut offset = 0;
        for path in self.paths() {
            let n = path.vertex_count();
            for (i, c) in path.coords[..n].iter().enumerate() {
                let d = c.xy().distance(pos);
                if d <= tolerance && best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((offset + i, d));
                }
            }
            offset += n;
        }
        best
    }

    /// Position eines Stützpunkts.
    pub fn vertex(&self, index: usize) -> Option<Coordinate> {
        let mut offset = 0;
        for path in self.paths() {
            let n = path.vertex_count();
            if index < offset + n {
                return path.coords.get(index - offset).copied();
            }
            offset += n;
        }
        None
    }

    /// Verschiebt einen Stützpunkt (Z bleibt erhalten).
    ///
    /// Beim ersten Punkt eines Rings wird der schließende Punkt mitgeführt.
    /// Gibt `false` zurück, wenn der Index ungültig ist.
    pub fn move_vertex(&mut self, index: usize, pos: DVec2) -> bool {
        let mut offset = 0;
        for path in self.paths_mut() {
            let len = path.coords.len();
            let n = editable_len(len, path.ring);
            if index < offset + n {
                let local = index - offset;
                path.coords[local].set_xy(pos);
                if path.ring && local == 0 && len > 1 {
                    path.coords[len - 1].set_xy(pos);
                }
                return true;
            }
            offset += n;
        }
        false
    }

    /// Trefferprüfung für Klick/Hover in Kartenkoordinaten.
    ///
    /// Flächen treffen im Inneren (Löcher ausgenommen) und innerhalb der
    /// Toleranz um ihre Ringe.
    pub fn hit_test(&self, pos: DVec2, tolerance: f64) -> bool {
        if self.vertex_count() == 0 {
            return false;
        }
        let target = geo::Point::new(pos.x, pos.y);
        let distance = match self {
            Self::Point(c) => to_geo_point(c).euclidean_distance(&target),
            Self::MultiPoint(points) => to_geo_multi_point(points).euclidean_distance(&target),
            Self::LineString(line) => to_geo_line(line).euclidean_distance(&target),
            Self::MultiLineString(lines) => {
                geo::MultiLineString::new(lines.iter().map(|l| to_geo_line(l)).collect())
                    .euclidean_distance(&target)
            }
            Self::Polygon(rings) => {
                let polygon = to_geo_polygon(rings);
                if polygon.contains(&target) {
                    return true;
                }
                polygon.euclidean_distance(&target)
            }
            Self::MultiPolygon(polygons) => {
                let polygons = to_geo_multi_polygon(polygons);
                if polygons.contains(&target) {
                    return true;
                }
                polygons.euclidean_distance(&target)
            }
        };
        distance <= tolerance
    }

    /// 2D-Sicht als `geo`-Geometrie (Z entfällt).
    pub fn to_geo(&self) -> geo::Geometry<f64> {
        match self {
            Self::Point(c) => to_geo_point(c).into(),
            Self::MultiPoint(points) => to_geo_multi_point(points).into(),
            Self::LineString(line) => to_geo_line(line).into(),
            Self::MultiLineString(lines) => {
                geo::MultiLineString::new(lines.iter().map(|l| to_geo_line(l)).collect()).into()
            }
            Self::Polygon(rings) => to_geo_polygon(rings).into(),
            Self::MultiPolygon(polygons) => to_geo_multi_polygon(polygons).into(),
        }
    }
}

fn to_geo_point(c: &Coordinate) -> geo::Point<f64> {
    geo::Point::new(c.x, c.y)
}

fn to_geo_line(coords: &[Coordinate]) -> geo::LineString<f64> {
    coords.iter().map(|c| (c.x, c.y)).collect()
}

fn to_geo_multi_point(coords: &[Coordinate]) -> geo::MultiPoint<f64> {
    geo::MultiPoint::new(coords.iter().map(to_geo_point).collect())
}

fn to_geo_polygon(rings: &[Vec<Coordinate>]) -> geo::Polygon<f64> {
    match rings.split_first() {
        Some((exterior, holes)) => geo::Polygon::new(
            to_geo_line(exterior),
            holes.iter().map(|h| to_geo_line(h)).collect(),
        ),
        None => geo::Polygon::new(geo::LineString::new(Vec::new()), Vec::new()),
    }
}

fn to_geo_multi_polygon(polygons: &[Vec<Vec<Coordinate>>]) -> geo::MultiPolygon<f64> {
    geo::MultiPolygon::new(polygons.iter().map(|p| to_geo_polygon(p)).collect())
}
