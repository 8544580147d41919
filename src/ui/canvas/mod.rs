//! Kartenfläche: Zeichnen der Ebenen und Weitergabe der Eingaben.

mod paint;

use glam::DVec2;

pub(crate) use self::paint::ScreenMapping;
use self::paint::{paint_boundary_mask, paint_geometry, paint_sketch, to_color32, Style};
use super::input::{screen_pos_to_world, InputState};
use crate::app::{AppIntent, AppState, EditMode, MapInstance};
use crate::core::GeometryType;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(32, 36, 40);
const GRID_COLOR: egui::Color32 = egui::Color32::from_rgb(48, 54, 60);
const GRID_SPACING_PX: f32 = 64.0;
const OUTSIDE_BOUNDARY: egui::Color32 = egui::Color32::from_black_alpha(110);

/// Rendert eine Karte in den verfügbaren Platz und gibt erzeugte Events zurück.
pub fn render_map(
    ui: &mut egui::Ui,
    state: &AppState,
    map: usize,
    input: &mut InputState,
) -> Vec<AppIntent> {
    let (rect, response) =
        ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

    let mut events = input.collect_viewport_events(ui, &response, map, state);

    let Ok(instance) = state.view.map(map) else {
        return events;
    };
    let size = DVec2::new(rect.width() as f64, rect.height() as f64);
    let mapping = ScreenMapping {
        rect,
        size,
        view: &instance.view,
    };
    let painter = ui.painter_at(rect);

    paint_basemap(&painter, rect, state);
    if let Some(boundary) = &state.boundary {
        paint_boundary_mask(&painter, &mapping, &boundary.geometry, OUTSIDE_BOUNDARY);
    }
    paint_layers(&painter, &mapping, state);

    let hover_world = response
        .hover_pos()
        .map(|pos| screen_pos_to_world(pos, &response, size, &instance.view));
    if let EditMode::Drawing(geometry_type) = state.editor.mode {
        paint_sketch(
            &painter,
            &mapping,
            &state.editor.sketch,
            geometry_type == GeometryType::Polygon,
            hover_world,
            Style::new(state.options.sketch_color, 2.0),
        );
    }

    paint_geolocation(&painter, &mapping, instance, state);

    if response.hovered() {
        if state.editor.active_tool.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        } else if state.overlays.pointer_cursor() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }

    events.extend(super::popup::show_popup(ui.ctx(), state, &mapping, map));

    events
}

fn paint_basemap(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let mut x = rect.left();
    while x < rect.right() {
        painter.vline(x, rect.y_range(), egui::Stroke::new(1.0, GRID_COLOR));
        x += GRID_SPACING_PX;
    }
    let mut y = rect.top();
    while y < rect.bottom() {
        painter.hline(rect.x_range(), y, egui::Stroke::new(1.0, GRID_COLOR));
        y += GRID_SPACING_PX;
    }

    if let Some(notice) = &state.view.basemap_notice {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            notice,
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
    }

    if let Some(layer) = state.view.basemaps.active_layer() {
        let label = if layer.attribution.is_empty() {
            layer.name.clone()
        } else {
            format!("{} | {}", layer.name, layer.attribution)
        };
        painter.text(
            rect.right_bottom() - egui::vec2(6.0, 4.0),
            egui::Align2::RIGHT_BOTTOM,
            label,
            egui::FontId::proportional(11.0),
            egui::Color32::LIGHT_GRAY,
        );
    }
}

fn paint_layers(painter: &egui::Painter, mapping: &ScreenMapping, state: &AppState) {
    if let Some(boundary) = &state.boundary {
        paint_geometry(
            painter,
            mapping,
            &boundary.geometry,
            Style::new(state.options.boundary_color, 2.0),
        );
    }

    let vector = Style::new(state.options.vector_color, 2.5);
    let popup_feature = state.overlays.popup.as_ref().map(|p| p.feature);
    for (index, feature) in state.features.iter().enumerate() {
        let highlighted =
            state.overlays.hovered == Some(index) || popup_feature == Some(index);
        let style = if highlighted {
            vector.highlighted()
        } else {
            vector
        };
        paint_geometry(painter, mapping, &feature.geometry, style);
    }
}

fn paint_geolocation(
    painter: &egui::Painter,
    mapping: &ScreenMapping,
    instance: &MapInstance,
    state: &AppState,
) {
    let geolocation = &instance.geolocation;
    if !geolocation.is_tracking() {
        return;
    }
    let Some(position) = geolocation.position() else {
        return;
    };

    let color = to_color32(state.options.geolocation_color);
    let center = mapping.pos(position);
    if let Some(radius) = geolocation.accuracy_radius() {
        let radius_px = (radius / instance.view.resolution()) as f32;
        painter.circle(
            center,
            radius_px,
            color.gamma_multiply(0.2),
            egui::Stroke::new(1.0, color),
        );
    }
    painter.circle(center, 6.0, color, egui::Stroke::new(2.0, egui::Color32::WHITE));
}
