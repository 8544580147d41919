//! Handler für Zeichnen und Stützpunkt-Bearbeitung.

use anyhow::Result;
use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeometryType;

/// Schaltet einen Zeichen-Toggle um.
pub fn toggle_draw_tool(state: &mut AppState, geometry_type: GeometryType) {
    use_cases::drawing::toggle_tool(state, geometry_type);
}

/// Fügt einen Skizzen-Stützpunkt hinzu.
pub fn add_draw_vertex(state: &mut AppState, world_pos: DVec2) -> Result<()> {
    use_cases::drawing::add_vertex(state, world_pos)
}

/// Schließt die Skizze ab.
pub fn finish_draw(state: &mut AppState) -> Result<()> {
    use_cases::drawing::finish(state)
}

/// Verwirft die Skizze.
pub fn abort_draw(state: &mut AppState) {
    use_cases::drawing::abort(state);
}

/// Greift einen Stützpunkt.
pub fn begin_vertex_drag(state: &mut AppState, world_pos: DVec2, tolerance: f64) {
    use_cases::modify::begin_drag(state, world_pos, tolerance);
}

/// Bewegt den gegriffenen Stützpunkt.
pub fn move_dragged_vertex(state: &mut AppState, world_pos: DVec2) {
    use_cases::modify::move_dragged(state, world_pos);
}

/// Beendet das Ziehen.
pub fn end_vertex_drag(state: &mut AppState) -> Result<()> {
    use_cases::modify::end_drag(state)
}
