//! Feature-Popup mit Titel und Bearbeiten-Link.

use super::canvas::ScreenMapping;
use crate::app::{AppIntent, AppState};

/// Zeigt das Popup am Anker des gewählten Features.
///
/// Liegt der Anker außerhalb der Karte, wird nichts gezeichnet, das Popup
/// bleibt aber geöffnet.
pub(crate) fn show_popup(
    ctx: &egui::Context,
    state: &AppState,
    mapping: &ScreenMapping,
    map: usize,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(popup) = &state.overlays.popup else {
        return events;
    };
    let anchor = mapping.pos(popup.anchor);
    if !mapping.rect.contains(anchor) {
        return events;
    }

    egui::Area::new(egui::Id::new(("feature_popup", map)))
        .fixed_pos(anchor + egui::vec2(8.0, -8.0))
        .pivot(egui::Align2::LEFT_BOTTOM)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.strong(&popup.label);
                    if ui.small_button("✕").clicked() {
                        events.push(AppIntent::PopupCloseRequested);
                    }
                });
                if let Some(href) = &popup.href {
                    ui.hyperlink_to(&state.options.messages.edit_link, href);
                }
            });
        });

    events
}
