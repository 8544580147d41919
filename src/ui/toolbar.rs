//! Toolbar: Zeichen-Toggles, Import, Einpassen, Positionsverfolgung, Basemap.

use crate::app::{AppIntent, AppState};
use crate::core::GeometryType;
use crate::shared::Messages;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let messages = &state.options.messages;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // ── Zeichen-Toggles (höchstens einer aktiv) ──
            if state.editor.enabled {
                for &geometry_type in &state.editor.allowed_types {
                    let selected = state.editor.active_tool == Some(geometry_type);
                    let label = draw_tool_label(messages, geometry_type);
                    if ui.selectable_label(selected, label).clicked() {
                        events.push(AppIntent::DrawToolToggled { geometry_type });
                    }
                }

                if ui
                    .add_enabled(
                        state.editor.is_drawing(),
                        egui::Button::new(format!("✔ {}", messages.finish_drawing)),
                    )
                    .clicked()
                {
                    events.push(AppIntent::DrawFinishRequested);
                }

                ui.separator();

                if ui.button(format!("⬆ {}", messages.import_title)).clicked() {
                    events.push(AppIntent::ImportDialogOpenRequested);
                }
                if state.ui.upload_enabled && ui.button(format!("📂 {}", messages.upload)).clicked()
                {
                    events.push(AppIntent::UploadFileRequested);
                }

                ui.separator();
            }

            if ui.button(format!("⛶ {}", messages.zoom_to_extent)).clicked() {
                events.push(AppIntent::ZoomToExtentRequested);
            }

            render_geolocation_toggles(ui, state, &mut events);

            ui.separator();
            render_basemap_selector(ui, state, &mut events);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .selectable_label(state.view.panel_visible, &messages.toggle_panel)
                    .clicked()
                {
                    events.push(AppIntent::PanelToggled);
                }
            });
        });
    });

    events
}

/// Beschriftung eines Zeichen-Toggles.
fn draw_tool_label(messages: &Messages, geometry_type: GeometryType) -> String {
    match geometry_type {
        GeometryType::Point => format!("● {}", messages.draw_point),
        GeometryType::LineString => format!("╱ {}", messages.draw_line),
        GeometryType::Polygon => format!("⬟ {}", messages.draw_polygon),
        other => other.to_string(),
    }
}

/// Ein Geolocation-Toggle je Karte, deaktiviert wenn die Quelle ausgefallen ist.
fn render_geolocation_toggles(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let messages = &state.options.messages;
    let multiple = state.view.maps.len() > 1;

    for (map, instance) in state.view.maps.iter().enumerate() {
        let geolocation = &instance.geolocation;
        let label = if multiple {
            format!("◎ {} {}", messages.geolocation, map + 1)
        } else {
            format!("◎ {}", messages.geolocation)
        };

        let response = ui.add_enabled(
            geolocation.is_available(),
            egui::Button::new(label).selected(geolocation.is_tracking()),
        );
        let response = match geolocation.last_error() {
            Some(error) => response.on_disabled_hover_text(format!(
                "{}: {}",
                messages.geolocation_unavailable, error
            )),
            None => response,
        };
        if response.clicked() {
            events.push(AppIntent::GeolocationToggled { map });
        }
    }
}

/// Auswahlmenü der Basemaps (nur wenn welche konfiguriert sind).
fn render_basemap_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let basemaps = &state.view.basemaps;
    if basemaps.is_empty() {
        return;
    }

    let selected_text = basemaps
        .active_layer()
        .map(|layer| layer.name.clone())
        .unwrap_or_default();

    egui::ComboBox::from_id_salt("basemap_selector")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for layer in basemaps.layers() {
                if ui.selectable_label(layer.visible, &layer.name).clicked() && !layer.visible {
                    events.push(AppIntent::BasemapSelected { lid: layer.lid });
                }
            }
        });
}
