//! Use-Case-Funktionen für Feature-Popup und Hover.

use glam::DVec2;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use crate::app::state::PopupState;
use crate::app::AppState;

/// Platzhalter `[…]` in der Link-Vorlage des Hosts.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]").expect("Platzhalter-Muster ist gültig"));

/// Ersetzt alle Platzhalter der Vorlage durch die Kennung.
pub fn build_edit_link(template: &str, identifier: &str) -> String {
    PLACEHOLDER
        .replace_all(template, NoExpand(identifier))
        .into_owned()
}

/// Wählt das oberste Feature an der Position und öffnet das Popup.
///
/// Ein Klick ins Leere schließt das Popup.
pub fn select_feature_at(state: &mut AppState, world_pos: DVec2, tolerance: f64) {
    let Some(index) = state.features.hit_test(world_pos, tolerance) else {
        state.overlays.popup = None;
        return;
    };
    let Some(feature) = state.features.get(index) else {
        return;
    };
    let Some(anchor) = feature.geometry.first_coordinate() else {
        return;
    };
    let identifier = feature.identifier();
    let label = feature
        .property_text(&state.options.popup_label_property)
        .or_else(|| identifier.clone())
        .unwrap_or_default();
    let href = match (&state.host.popup, identifier) {
        (Some(popup), Some(id)) if !popup.href.is_empty() => {
            Some(build_edit_link(&popup.href, &id))
        }
        _ => None,
    };
    state.overlays.popup = Some(PopupState {
        feature: index,
        anchor: anchor.xy(),
        label,
        href,
    });
}

/// Schließt das Popup.
pub fn close(state: &mut AppState) {
    state.overlays.popup = None;
}

/// Merkt das Feature unter dem Mauszeiger (Zeiger-Cursor).
pub fn update_hover(state: &mut AppState, world_pos: DVec2, tolerance: f64) {
    state.overlays.hovered = state.features.hit_test(world_pos, tolerance);
}
