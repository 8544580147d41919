//! Use-Case-Funktionen für das Verschieben von Stützpunkten.

use anyhow::Result;
use glam::DVec2;

use super::feature_store;
use crate::app::state::EditMode;
use crate::app::AppState;

/// Greift den nächstgelegenen Stützpunkt innerhalb der Toleranz.
///
/// Ohne Treffer bleibt der Modus unverändert (die UI verschiebt dann die Karte).
pub fn begin_drag(state: &mut AppState, world_pos: DVec2, tolerance: f64) {
    if !state.editor.enabled || !state.editor.sketch.is_empty() {
        return;
    }
    if let Some(vref) = state.features.nearest_vertex(world_pos, tolerance) {
        state.editor.drag = Some(vref);
        state.editor.drag_moved = false;
        state.editor.mode = EditMode::Modifying;
        log::debug!(
            "Stützpunkt {} von Feature {} gegriffen",
            vref.vertex,
            vref.feature
        );
    }
}

/// Bewegt den gegriffenen Stützpunkt. Das Formularfeld bleibt unverändert.
pub fn move_dragged(state: &mut AppState, world_pos: DVec2) {
    let Some(vref) = state.editor.drag else {
        return;
    };
    if state.features.move_vertex(vref, world_pos) {
        state.editor.drag_moved = true;
    }
}

/// Beendet das Ziehen und serialisiert das veränderte Feature (mit Z).
pub fn end_drag(state: &mut AppState) -> Result<()> {
    let Some(vref) = state.editor.drag.take() else {
        return Ok(());
    };
    state.editor.mode = EditMode::Viewing;
    if !std::mem::take(&mut state.editor.drag_moved) {
        return Ok(());
    }
    log::info!("Feature {} verändert", vref.feature);
    feature_store::serialize_to_form(state, true)
}
