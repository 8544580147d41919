//! Handler für Positionsverfolgung, Popup und Hover.

use anyhow::Result;
use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet die Positionsverfolgung einer Karte um.
pub fn toggle_geolocation(state: &mut AppState, map: usize) -> Result<()> {
    use_cases::geolocation::toggle(state, map)
}

/// Übernimmt eine neue Position.
pub fn update_geolocation(
    state: &mut AppState,
    map: usize,
    position: DVec2,
    accuracy: Option<f64>,
) -> Result<()> {
    use_cases::geolocation::update_position(state, map, position, accuracy)
}

/// Markiert die Positionsquelle als fehlerhaft.
pub fn fail_geolocation(state: &mut AppState, map: usize, message: String) -> Result<()> {
    use_cases::geolocation::fail(state, map, message)
}

/// Öffnet das Popup für das Feature an der Position.
pub fn select_feature_at(state: &mut AppState, world_pos: DVec2, tolerance: f64) {
    use_cases::popup::select_feature_at(state, world_pos, tolerance);
}

/// Schließt das Popup.
pub fn close_popup(state: &mut AppState) {
    use_cases::popup::close(state);
}

/// Aktualisiert das Feature unter dem Mauszeiger.
pub fn update_hover(state: &mut AppState, world_pos: DVec2, tolerance: f64) {
    use_cases::popup::update_hover(state, world_pos, tolerance);
}
