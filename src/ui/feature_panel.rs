//! Seitenpanel mit der Feature-Liste.

use crate::app::{AppIntent, AppState};

/// Rendert das Seitenpanel, solange es sichtbar ist.
///
/// Features mit Kennung lassen sich anklicken, um die Karte darauf einzupassen.
pub fn render_feature_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.view.panel_visible {
        return events;
    }

    egui::SidePanel::left("feature_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading(format!("Features ({})", state.feature_count()));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, feature) in state.features.iter().enumerate() {
                    let label = feature
                        .property_text(&state.options.popup_label_property)
                        .or_else(|| feature.identifier())
                        .unwrap_or_else(|| format!("#{}", index + 1));
                    let text = format!("{} · {}", label, feature.geometry_type());
                    let selected = state.overlays.hovered == Some(index);

                    match feature.identifier() {
                        Some(id) => {
                            if ui.selectable_label(selected, text).clicked() {
                                events.push(AppIntent::FocusFeatureRequested { id });
                            }
                        }
                        None => {
                            ui.label(text);
                        }
                    }
                }
            });
        });

    events
}
