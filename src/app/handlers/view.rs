//! Handler für Kamera, Kartengröße, Basemap und Einpassen.

use anyhow::Result;
use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;

/// Baut die Ansicht aus den Host-Standardwerten auf.
pub fn initialize(state: &mut AppState) {
    use_cases::camera::initialize_view(state);
}

/// Wählt die Basemap nach Präferenz.
pub fn select_basemap(state: &mut AppState) {
    use_cases::basemap::select_basemap(state);
}

/// Schaltet auf eine Basemap um.
pub fn show_basemap(state: &mut AppState, lid: i64) {
    use_cases::basemap::show_basemap(state, lid);
}

/// Aktualisiert die Größe einer Karte.
pub fn set_map_size(state: &mut AppState, map: usize, size: DVec2) -> Result<()> {
    use_cases::viewport::resize(state, map, size)
}

/// Schaltet das umgebende Panel um.
pub fn toggle_panel(state: &mut AppState) {
    use_cases::viewport::toggle_panel(state);
}

/// Markiert alle Kartengrößen als veraltet.
pub fn mark_sizes_stale(state: &mut AppState) {
    use_cases::viewport::mark_sizes_stale(state);
}

/// Verschiebt die Kamera um ein Karten-Delta.
pub fn pan(state: &mut AppState, map: usize, delta: DVec2) -> Result<()> {
    use_cases::camera::pan(state, map, delta)
}

/// Zoomt mit optionalem Fokuspunkt.
pub fn zoom_towards(
    state: &mut AppState,
    map: usize,
    factor: f64,
    focus_world: Option<DVec2>,
) -> Result<()> {
    use_cases::camera::zoom_towards(state, map, factor, focus_world)
}

/// Schreibt den Permalink-Cookie.
pub fn store_permalink(state: &mut AppState, map: usize) -> Result<()> {
    use_cases::camera::store_permalink(state, map)
}

/// Passt die Ansicht ein.
pub fn zoom_to_extent(state: &mut AppState, force: bool) {
    use_cases::extent::zoom_to_extent(state, force);
}

/// Passt die Ansicht auf ein Feature ein.
pub fn focus_feature(state: &mut AppState, id: &str) {
    use_cases::extent::focus_feature(state, id);
}
