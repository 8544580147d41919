//! Use-Case-Funktionen für das Zeichnen neuer Features.
//!
//! Zustandsübergänge: Toggle wählt `Drawing(typ)`, Abschluss führt zurück nach
//! `Viewing` (Toggle bleibt scharf), der nächste Klick startet die nächste Skizze.

use anyhow::Result;
use glam::DVec2;

use super::feature_store;
use crate::app::state::EditMode;
use crate::app::AppState;
use crate::core::{Feature, FeatureCollection, Geometry, GeometryType};

/// Repräsentativer Z-Wert des vorhandenen Features (0 ohne Feature).
pub fn representative_z(features: &FeatureCollection) -> f64 {
    features
        .get(0)
        .map_or(0.0, |f| f.geometry.representative_z())
}

/// Schaltet einen Zeichen-Toggle um (Toggles schließen sich gegenseitig aus).
pub fn toggle_tool(state: &mut AppState, geometry_type: GeometryType) {
    if state.editor.active_tool == Some(geometry_type) {
        deactivate_tool(state);
    } else {
        activate_tool(state, geometry_type);
    }
}

/// Aktiviert einen Zeichen-Toggle und beginnt den Zeichenmodus.
pub fn activate_tool(state: &mut AppState, geometry_type: GeometryType) {
    state.editor.sketch.clear();
    state.editor.active_tool = Some(geometry_type);
    enter_drawing(state, geometry_type);
}

/// Deaktiviert den Zeichen-Toggle, eine laufende Skizze wird verworfen.
pub fn deactivate_tool(state: &mut AppState) {
    state.editor.active_tool = None;
    state.editor.sketch.clear();
    state.editor.mode = EditMode::Viewing;
}

fn enter_drawing(state: &mut AppState, geometry_type: GeometryType) {
    state.editor.representative_z = representative_z(&state.features);
    state.editor.mode = EditMode::Drawing(geometry_type);
    log::debug!(
        "Zeichnen {} mit Z = {}",
        geometry_type,
        state.editor.representative_z
    );
}

/// Fügt der Skizze einen Stützpunkt hinzu. Punkte werden sofort abgeschlossen.
pub fn add_vertex(state: &mut AppState, world_pos: DVec2) -> Result<()> {
    let Some(geometry_type) = state.editor.active_tool else {
        return Ok(());
    };
    // Jede neue Skizze liest den Z-Wert des aktuellen Features neu ein
    if state.editor.sketch.is_empty() {
        enter_drawing(state, geometry_type);
    }
    state.editor.sketch.push(world_pos);

    if geometry_type == GeometryType::Point {
        finish(state)?;
    }
    Ok(())
}

/// Schließt die Skizze ab, ersetzt im Einzelmodus die Sammlung und serialisiert.
///
/// Mit zu wenigen Stützpunkten bleibt die Skizze offen.
pub fn finish(state: &mut AppState) -> Result<()> {
    let EditMode::Drawing(geometry_type) = state.editor.mode else {
        return Ok(());
    };
    let Some(mut geometry) = Geometry::from_sketch(geometry_type, &state.editor.sketch) else {
        log::debug!(
            "{} braucht mindestens {} Stützpunkte, Skizze hat {}",
            geometry_type,
            geometry_type.min_sketch_points(),
            state.editor.sketch.len()
        );
        return Ok(());
    };
    geometry.set_z(state.editor.representative_z);

    state.editor.sketch.clear();
    state.editor.mode = EditMode::Viewing;
    state.features.add_drawn(Feature::new(geometry));
    state.overlays.popup = None;
    log::info!("{} gezeichnet ({} Features)", geometry_type, state.features.len());

    feature_store::serialize_to_form(state, true)
}

/// Verwirft die laufende Skizze; der Toggle bleibt aktiv.
pub fn abort(state: &mut AppState) {
    state.editor.sketch.clear();
    state.editor.mode = EditMode::Viewing;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CollectionMode, Coordinate};

    fn editing_state(types: &[GeometryType]) -> AppState {
        let mut state = AppState::new();
        state.editor.enabled = true;
        state.editor.allowed_types = types.to_vec();
        state
    }

    #[test]
    fn test_toggle_is_exclusive_and_deactivates_on_second_press() {
        let mut state = editing_state(&[GeometryType::Point, GeometryType::Polygon]);
        toggle_tool(&mut state, GeometryType::Point);
        toggle_tool(&mut state, GeometryType::Polygon);
        assert_eq!(state.editor.active_tool, Some(GeometryType::Polygon));
        toggle_tool(&mut state, GeometryType::Polygon);
        assert_eq!(state.editor.active_tool, None);
        assert_eq!(state.editor.mode, EditMode::Viewing);
    }

    #[test]
    fn test_point_finishes_on_first_click() {
        let mut state = editing_state(&[GeometryType::Point]);
        activate_tool(&mut state, GeometryType::Point);
        add_vertex(&mut state, DVec2::new(5.0, 6.0)).unwrap();
        assert_eq!(state.features.len(), 1);
        assert_eq!(state.editor.mode, EditMode::Viewing);
        assert_eq!(state.editor.active_tool, Some(GeometryType::Point));
        assert_eq!(state.form.revision, 1);
    }

    #[test]
    fn test_polygon_needs_three_vertices() {
        let mut state = editing_state(&[GeometryType::Polygon]);
        activate_tool(&mut state, GeometryType::Polygon);
        add_vertex(&mut state, DVec2::new(0.0, 0.0)).unwrap();
        add_vertex(&mut state, DVec2::new(10.0, 0.0)).unwrap();
        finish(&mut state).unwrap();
        assert!(state.features.is_empty());
        assert!(state.editor.is_drawing());

        add_vertex(&mut state, DVec2::new(10.0, 10.0)).unwrap();
        finish(&mut state).unwrap();
        let Geometry::Polygon(rings) = &state.features.features()[0].geometry else {
            panic!("Polygon erwartet");
        };
        assert_eq!(rings[0].len(), 4);
        assert_eq!(rings[0][0], rings[0][3]);
    }

    #[test]
    fn test_single_mode_keeps_exactly_one_feature() {
        let mut state = editing_state(&[GeometryType::Point]);
        activate_tool(&mut state, GeometryType::Point);
        for i in 0..3 {
            add_vertex(&mut state, DVec2::new(i as f64, 0.0)).unwrap();
        }
        assert_eq!(state.features.len(), 1);
        assert_eq!(state.form.revision, 3);
    }

    #[test]
    fn test_multi_mode_appends() {
        let mut state = editing_state(&[GeometryType::Point]);
        state.features.set_mode(CollectionMode::Multi);
        activate_tool(&mut state, GeometryType::Point);
        add_vertex(&mut state, DVec2::new(0.0, 0.0)).unwrap();
        add_vertex(&mut state, DVec2::new(1.0, 0.0)).unwrap();
        assert_eq!(state.features.len(), 2);
    }

    #[test]
    fn test_new_drawing_uses_mean_of_present_z() {
        let mut state = editing_state(&[GeometryType::LineString]);
        state.features.replace_all(vec![Feature::new(Geometry::LineString(vec![
            Coordinate::with_z(0.0, 0.0, 5.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::with_z(2.0, 2.0, 15.0),
        ]))]);
        activate_tool(&mut state, GeometryType::LineString);
        assert_eq!(state.editor.representative_z, 10.0);

        add_vertex(&mut state, DVec2::new(0.0, 0.0)).unwrap();
        add_vertex(&mut state, DVec2::new(3.0, 3.0)).unwrap();
        finish(&mut state).unwrap();
        assert!(state.features.features()[0]
            .geometry
            .coordinates()
            .all(|c| c.z == Some(10.0)));
    }

    #[test]
    fn test_abort_discards_sketch_but_keeps_tool() {
        let mut state = editing_state(&[GeometryType::LineString]);
        activate_tool(&mut state, GeometryType::LineString);
        add_vertex(&mut state, DVec2::ZERO).unwrap();
        abort(&mut state);
        assert!(state.editor.sketch.is_empty());
        assert_eq!(state.editor.mode, EditMode::Viewing);
        assert_eq!(state.editor.active_tool, Some(GeometryType::LineString));
    }
}
