//! Use-Case-Funktionen für den Seitenstart: Host-Kontext, Ausgangsdaten, Werkzeuge.

use anyhow::{Context, Result};

use super::{drawing, feature_store};
use crate::app::host::{CookieJar, HostConfig};
use crate::app::state::EditorState;
use crate::app::AppState;
use crate::format;

/// Übernimmt die Host-Konfiguration in den State.
pub fn apply_host_context(state: &mut AppState, host: HostConfig) {
    state.cookies = CookieJar::new(host.cookies.clone());
    state.features.set_mode(host.collection_mode());
    state.ui.upload_enabled = host.upload;
    log::info!(
        "Host-Kontext übernommen: Modus {:?}, Bearbeitung '{}', {} Basemaps",
        state.features.mode(),
        host.edit.as_deref().unwrap_or_default(),
        host.layers.len()
    );
    state.host = host;
}

/// Lädt Ausgangsgeometrie und Projektgrenze.
///
/// Eine fehlerhafte Ausgangsgeometrie ist ein Fehler, eine fehlerhafte
/// Projektgrenze wird protokolliert und ignoriert.
pub fn load_initial_features(state: &mut AppState) -> Result<()> {
    let features = match state.host.geom.clone() {
        Some(value) => {
            format::read_features_value(value).context("Ausgangsgeometrie (geom) ungültig")?
        }
        None => Vec::new(),
    };
    state.features.replace_all(features);

    state.boundary = match state.host.bounds.clone() {
        Some(value) => match format::read_feature(value) {
            Ok(boundary) => boundary,
            Err(e) => {
                log::warn!("Projektgrenze ignoriert: {:#}", e);
                None
            }
        },
        None => None,
    };

    log::info!(
        "{} Features geladen, Projektgrenze: {}",
        state.features.len(),
        if state.boundary.is_some() { "ja" } else { "nein" }
    );

    // Feld einmal mit der eigenen Kodierung füllen
    feature_store::serialize_to_form(state, false)
}

/// Hängt Zeichenwerkzeuge (mit Bearbeitungsrechten) oder das Popup-Verhalten an.
pub fn attach_interactions(state: &mut AppState) {
    let allowed = state.host.allowed_types();
    if allowed.is_empty() {
        state.editor = EditorState::new();
        state.overlays.popup_enabled = true;
        log::info!("Keine Bearbeitungsrechte: Popup-Modus");
        return;
    }

    state.editor.enabled = true;
    state.editor.allowed_types = allowed;
    state.overlays.popup_enabled = false;
    state.overlays.popup = None;

    // Toggle passend zum vorhandenen Feature vorbelegen
    let current = state.features.get(0).map(|f| f.geometry_type());
    if let Some(geometry_type) = current.filter(|t| state.editor.allows(*t)) {
        drawing::activate_tool(state, geometry_type);
    }
    log::info!(
        "Bearbeitung aktiv für: {}",
        state
            .editor
            .allowed_types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::EditMode;
    use crate::core::{CollectionMode, GeometryType};

    fn host(json: &str) -> HostConfig {
        HostConfig::from_json(json).unwrap()
    }

    #[test]
    fn test_malformed_geom_is_an_error() {
        let mut state = AppState::new();
        apply_host_context(&mut state, host(r#"{"geom":"{kaputt"}"#));
        assert!(load_initial_features(&mut state).is_err());
    }

    #[test]
    fn test_malformed_bounds_are_ignored() {
        let mut state = AppState::new();
        apply_host_context(
            &mut state,
            host(r#"{"bounds":{"type":"Feature","geometry":{"type":"Point","coordinates":[1]}}}"#),
        );
        load_initial_features(&mut state).unwrap();
        assert!(state.boundary.is_none());
    }

    #[test]
    fn test_existing_feature_preactivates_matching_tool() {
        let mut state = AppState::new();
        apply_host_context(
            &mut state,
            host(
                r#"{"edit":"Point LineString",
                    "geom":{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0,4],[1,1,8]]},"properties":{}}}"#,
            ),
        );
        load_initial_features(&mut state).unwrap();
        attach_interactions(&mut state);
        assert!(state.editor.enabled);
        assert_eq!(state.editor.active_tool, Some(GeometryType::LineString));
        assert_eq!(state.editor.mode, EditMode::Drawing(GeometryType::LineString));
        assert_eq!(state.editor.representative_z, 6.0);
        assert!(!state.overlays.popup_enabled);
    }

    #[test]
    fn test_without_edit_rights_popup_is_attached() {
        let mut state = AppState::new();
        apply_host_context(&mut state, host("{}"));
        attach_interactions(&mut state);
        assert!(!state.editor.enabled);
        assert!(state.overlays.popup_enabled);
        assert_eq!(state.features.mode(), CollectionMode::Multi);
    }
}
