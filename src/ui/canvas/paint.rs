//! Zeichnet Vektorgeometrien mit dem egui-Painter.

use geo::{BooleanOps, MapCoords, TriangulateEarcut};
use glam::DVec2;

use crate::core::{Coordinate, Geometry, MapView};
use crate::ui::input::world_to_screen_pos;

/// Projektion Karte → Bildschirm für einen Frame.
pub(crate) struct ScreenMapping<'a> {
    pub rect: egui::Rect,
    pub size: DVec2,
    pub view: &'a MapView,
}

impl ScreenMapping<'_> {
    pub fn pos(&self, world: DVec2) -> egui::Pos2 {
        world_to_screen_pos(world, self.rect, self.size, self.view)
    }

    fn path(&self, coords: &[Coordinate]) -> Vec<egui::Pos2> {
        coords.iter().map(|c| self.pos(c.xy())).collect()
    }
}

/// Linien- und Punktstil einer Ebene.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Style {
    pub color: egui::Color32,
    pub width: f32,
    pub point_radius: f32,
}

impl Style {
    pub fn new(rgba: [f32; 4], width: f32) -> Self {
        Self {
            color: to_color32(rgba),
            width,
            point_radius: width * 2.5,
        }
    }

    /// Hervorgehobene Variante (Hover).
    pub fn highlighted(self) -> Self {
        Self {
            width: self.width + 1.5,
            point_radius: self.point_radius + 1.5,
            ..self
        }
    }
}

/// Wandelt eine RGBA-Farbe (0..1) in eine egui-Farbe um.
pub(crate) fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Zeichnet eine Geometrie.
pub(crate) fn paint_geometry(
    painter: &egui::Painter,
    mapping: &ScreenMapping,
    geometry: &Geometry,
    style: Style,
) {
    let stroke = egui::Stroke::new(style.width, style.color);

    match geometry {
        Geometry::Point(c) => paint_point(painter, mapping.pos(c.xy()), style),
        Geometry::MultiPoint(points) => {
            for c in points {
                paint_point(painter, mapping.pos(c.xy()), style);
            }
        }
        Geometry::LineString(line) => {
            painter.add(egui::Shape::line(mapping.path(line), stroke));
        }
        Geometry::MultiLineString(lines) => {
            for line in lines {
                painter.add(egui::Shape::line(mapping.path(line), stroke));
            }
        }
        Geometry::Polygon(rings) => paint_rings(painter, mapping, rings, stroke),
        Geometry::MultiPolygon(polygons) => {
            for rings in polygons {
                paint_rings(painter, mapping, rings, stroke);
            }
        }
    }
}

fn paint_point(painter: &egui::Painter, pos: egui::Pos2, style: Style) {
    painter.circle(
        pos,
        style.point_radius,
        style.color.gamma_multiply(0.6),
        egui::Stroke::new(1.5, style.color),
    );
}

fn paint_rings(
    painter: &egui::Painter,
    mapping: &ScreenMapping,
    rings: &[Vec<Coordinate>],
    stroke: egui::Stroke,
) {
    // Nur Umrisse: egui füllt ausschließlich konvexe Polygone korrekt
    for ring in rings {
        let mut points = mapping.path(ring);
        // Geschlossener Ring: letzter Punkt wiederholt den ersten
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        painter.add(egui::Shape::closed_line(points, stroke));
    }
}

/// Dunkelt die Basemap außerhalb der Projektgrenze ab.
///
/// Nur Flächengrenzen maskieren; Punkte und Linien haben kein Inneres.
pub(crate) fn paint_boundary_mask(
    painter: &egui::Painter,
    mapping: &ScreenMapping,
    boundary: &Geometry,
    color: egui::Color32,
) {
    let screen = boundary.to_geo().map_coords(|c: geo::Coord<f64>| {
        let p = mapping.pos(DVec2::new(c.x, c.y));
        geo::coord! { x: p.x as f64, y: p.y as f64 }
    });
    let boundary = match screen {
        geo::Geometry::Polygon(polygon) => geo::MultiPolygon::new(vec![polygon]),
        geo::Geometry::MultiPolygon(polygons) => polygons,
        _ => return,
    };

    let triangles = mask_triangles(mapping.rect, &boundary);
    if triangles.is_empty() {
        return;
    }
    let mut mesh = egui::Mesh::default();
    for triangle in triangles {
        let base = mesh.vertices.len() as u32;
        for pos in triangle {
            mesh.colored_vertex(pos, color);
        }
        mesh.add_triangle(base, base + 1, base + 2);
    }
    painter.add(egui::Shape::mesh(mesh));
}

/// Trianguliert die Fläche von `viewport`, die nicht von `boundary` bedeckt ist.
fn mask_triangles(viewport: egui::Rect, boundary: &geo::MultiPolygon<f64>) -> Vec<[egui::Pos2; 3]> {
    let view = geo::Rect::new(
        geo::coord! { x: viewport.min.x as f64, y: viewport.min.y as f64 },
        geo::coord! { x: viewport.max.x as f64, y: viewport.max.y as f64 },
    )
    .to_polygon();
    let outside = geo::MultiPolygon::new(vec![view]).difference(boundary);

    let to_pos = |c: geo::Coord<f64>| egui::pos2(c.x as f32, c.y as f32);
    outside
        .0
        .iter()
        .flat_map(|polygon| polygon.earcut_triangles())
        .map(|t| [to_pos(t.0), to_pos(t.1), to_pos(t.2)])
        .collect()
}

/// Zeichnet die laufende Skizze inklusive Stützpunkten.
pub(crate) fn paint_sketch(
    painter: &egui::Painter,
    mapping: &ScreenMapping,
    sketch: &[DVec2],
    closed: bool,
    hover: Option<DVec2>,
    style: Style,
) {
    if sketch.is_empty() {
        return;
    }
    let mut points: Vec<egui::Pos2> = sketch.iter().map(|p| mapping.pos(*p)).collect();
    if let Some(h) = hover {
        points.push(mapping.pos(h));
    }

    let stroke = egui::Stroke::new(style.width, style.color);
    if closed && points.len() >= 3 {
        painter.add(egui::Shape::closed_line(points.clone(), stroke));
    } else {
        painter.add(egui::Shape::line(points.clone(), stroke));
    }
    for p in points.iter().take(sketch.len()) {
        painter.circle_filled(*p, style.point_radius, style.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32_scales_and_clamps() {
        assert_eq!(
            to_color32([1.0, 0.0, 2.0, 1.0]),
            egui::Color32::from_rgba_unmultiplied(255, 0, 255, 255)
        );
        assert_eq!(
            to_color32([0.5, 0.5, 0.5, 0.0]),
            egui::Color32::from_rgba_unmultiplied(128, 128, 128, 0)
        );
    }

    #[test]
    fn test_screen_mapping_places_center_in_rect_middle() {
        let view = MapView::new(DVec2::new(1000.0, 2000.0), 10.0, 18.0, 0.0);
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, 100.0));
        let mapping = ScreenMapping {
            rect,
            size: DVec2::new(200.0, 100.0),
            view: &view,
        };

        let pos = mapping.pos(DVec2::new(1000.0, 2000.0));
        assert!((pos.x - 110.0).abs() < 1e-3);
        assert!((pos.y - 70.0).abs() < 1e-3);
    }

    fn triangle_area(t: &[egui::Pos2; 3]) -> f32 {
        ((t[1] - t[0]).x * (t[2] - t[0]).y - (t[1] - t[0]).y * (t[2] - t[0]).x).abs() / 2.0
    }

    #[test]
    fn test_mask_covers_viewport_outside_boundary() {
        let viewport = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(100.0, 100.0));
        let square = geo::Rect::new(geo::coord! { x: 25.0, y: 25.0 }, geo::coord! { x: 75.0, y: 75.0 })
            .to_polygon();
        let triangles = mask_triangles(viewport, &geo::MultiPolygon::new(vec![square]));

        let area: f32 = triangles.iter().map(triangle_area).sum();
        assert!((area - 7500.0).abs() < 1e-2, "Fläche {area}");
    }

    #[test]
    fn test_boundary_covering_viewport_leaves_no_mask() {
        let viewport = egui::Rect::from_min_max(egui::pos2(10.0, 10.0), egui::pos2(50.0, 50.0));
        let cover = geo::Rect::new(geo::coord! { x: 0.0, y: 0.0 }, geo::coord! { x: 60.0, y: 60.0 })
            .to_polygon();
        assert!(mask_triangles(viewport, &geo::MultiPolygon::new(vec![cover])).is_empty());
    }
}
