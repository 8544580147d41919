//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::projection::from_lon_lat;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::HostPageLoaded { host } => vec![
            AppCommand::ApplyHostContext { host },
            AppCommand::InitializeView,
            AppCommand::SelectBasemap,
            AppCommand::LoadInitialFeatures,
            AppCommand::AttachInteractions,
            AppCommand::ZoomToExtent { force: false },
        ],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::ViewportResized { map, size } => vec![AppCommand::SetMapSize { map, size }],
        AppIntent::PanelToggled => vec![AppCommand::TogglePanel, AppCommand::MarkMapSizesStale],
        AppIntent::CameraPan { map, delta } => vec![
            AppCommand::PanCamera { map, delta },
            AppCommand::StorePermalink { map },
        ],
        AppIntent::CameraZoom {
            map,
            factor,
            focus_world,
        } => vec![
            AppCommand::ZoomCamera {
                map,
                factor,
                focus_world,
            },
            AppCommand::StorePermalink { map },
        ],
        AppIntent::BasemapSelected { lid } => vec![AppCommand::ShowBasemap { lid }],
        AppIntent::ZoomToExtentRequested => vec![AppCommand::ZoomToExtent { force: true }],
        AppIntent::FocusFeatureRequested { id } => vec![AppCommand::FocusFeature { id }],

        AppIntent::DrawToolToggled { geometry_type } => {
            if state.editor.allows(geometry_type) {
                vec![AppCommand::ToggleDrawTool { geometry_type }]
            } else {
                log::warn!("Geometrietyp {} ist nicht freigegeben", geometry_type);
                vec![]
            }
        }
        AppIntent::MapClicked { map, world_pos } => {
            if state.editor.enabled && state.editor.active_tool.is_some() {
                vec![AppCommand::AddDrawVertex { world_pos }]
            } else if state.overlays.popup_enabled {
                vec![AppCommand::SelectFeatureAt {
                    world_pos,
                    tolerance: hit_tolerance(state, map),
                }]
            } else {
                vec![]
            }
        }
        AppIntent::DrawFinishRequested => {
            if state.editor.is_drawing() {
                vec![AppCommand::FinishDraw]
            } else {
                vec![]
            }
        }
        AppIntent::DrawAbortRequested => {
            if state.editor.is_drawing() {
                vec![AppCommand::AbortDraw]
            } else {
                vec![]
            }
        }
        AppIntent::VertexDragStarted { map, world_pos } => {
            // Während einer Skizze wird nicht modifiziert
            if state.editor.enabled && state.editor.sketch.is_empty() {
                vec![AppCommand::BeginVertexDrag {
                    world_pos,
                    tolerance: hit_tolerance(state, map),
                }]
            } else {
                vec![]
            }
        }
        AppIntent::VertexDragUpdated { world_pos } => {
            if state.editor.drag.is_some() {
                vec![AppCommand::MoveDraggedVertex { world_pos }]
            } else {
                vec![]
            }
        }
        AppIntent::VertexDragEnded => {
            if state.editor.drag.is_some() {
                vec![AppCommand::EndVertexDrag]
            } else {
                vec![]
            }
        }
        AppIntent::PointerMoved { map, world_pos } => vec![AppCommand::UpdateHover {
            world_pos,
            tolerance: hit_tolerance(state, map),
        }],

        AppIntent::ImportDialogOpenRequested => vec![AppCommand::OpenImportDialog],
        AppIntent::ImportTextChanged { text } => vec![AppCommand::SetImportText { text }],
        AppIntent::UploadFileRequested => vec![AppCommand::RequestUploadDialog],
        AppIntent::UploadedFileRead { mime, contents } => {
            vec![AppCommand::LoadUploadedFile { mime, contents }]
        }
        AppIntent::ImportConfirmed => vec![AppCommand::ConfirmImport],
        AppIntent::ImportCancelled => vec![AppCommand::CloseImportDialog],

        AppIntent::GeolocationToggled { map } => vec![AppCommand::ToggleGeolocation { map }],
        AppIntent::GeolocationPositionChanged {
            map,
            lon,
            lat,
            accuracy,
        } => vec![AppCommand::UpdateGeolocation {
            map,
            position: from_lon_lat(lon, lat),
            accuracy,
        }],
        AppIntent::GeolocationFailed { map, message } => {
            vec![AppCommand::FailGeolocation { map, message }]
        }
        AppIntent::PopupCloseRequested => vec![AppCommand::ClosePopup],
    }
}

/// Trefferradius in Karteneinheiten für die Auflösung der Karte.
fn hit_tolerance(state: &AppState, map: usize) -> f64 {
    let instance = state.view.map(map).unwrap_or_else(|_| state.view.primary());
    instance.view.pixel_tolerance(state.options.hit_tolerance_px)
}
