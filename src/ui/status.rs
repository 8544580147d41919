//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditMode};
use crate::core::projection::to_lon_lat;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Features: {} ({:?})",
                state.feature_count(),
                state.features.mode()
            ));

            ui.separator();

            let view = &state.view.primary().view;
            let center = to_lon_lat(view.center);
            ui.label(format!(
                "Zoom: {:.1} | Zentrum: {:.5}, {:.5}",
                view.zoom, center.x, center.y
            ));

            ui.separator();

            let mode = match state.editor.mode {
                EditMode::Viewing => match state.editor.active_tool {
                    Some(tool) => format!("Bereit: {}", tool),
                    None => "Anzeigen".to_string(),
                },
                EditMode::Drawing(tool) => {
                    format!("Zeichnen: {} ({} Punkte)", tool, state.editor.sketch.len())
                }
                EditMode::Modifying => "Bearbeiten".to_string(),
            };
            ui.label(mode);

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{}: {} Zeichen", state.form.name, state.form.value.len()));
            });
        });
    });
}
