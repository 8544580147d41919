//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Initialisierung ===
            AppCommand::ApplyHostContext { host } => handlers::host::apply_context(state, *host),
            AppCommand::InitializeView => handlers::view::initialize(state),
            AppCommand::SelectBasemap => handlers::view::select_basemap(state),
            AppCommand::LoadInitialFeatures => handlers::host::load_initial_features(state)?,
            AppCommand::AttachInteractions => handlers::host::attach_interactions(state),
            AppCommand::ZoomToExtent { force } => handlers::view::zoom_to_extent(state, force),
            AppCommand::RequestExit => handlers::host::request_exit(state),

            // === Ansicht ===
            AppCommand::SetMapSize { map, size } => handlers::view::set_map_size(state, map, size)?,
            AppCommand::TogglePanel => handlers::view::toggle_panel(state),
            AppCommand::MarkMapSizesStale => handlers::view::mark_sizes_stale(state),
            AppCommand::PanCamera { map, delta } => handlers::view::pan(state, map, delta)?,
            AppCommand::ZoomCamera {
                map,
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, map, factor, focus_world)?,
            AppCommand::StorePermalink { map } => handlers::view::store_permalink(state, map)?,
            AppCommand::ShowBasemap { lid } => handlers::view::show_basemap(state, lid),
            AppCommand::FocusFeature { id } => handlers::view::focus_feature(state, &id),

            // === Zeichnen & Bearbeiten ===
            AppCommand::ToggleDrawTool { geometry_type } => {
                handlers::editing::toggle_draw_tool(state, geometry_type)
            }
            AppCommand::AddDrawVertex { world_pos } => {
                handlers::editing::add_draw_vertex(state, world_pos)?
            }
            AppCommand::FinishDraw => handlers::editing::finish_draw(state)?,
            AppCommand::AbortDraw => handlers::editing::abort_draw(state),
            AppCommand::BeginVertexDrag {
                world_pos,
                tolerance,
            } => handlers::editing::begin_vertex_drag(state, world_pos, tolerance),
            AppCommand::MoveDraggedVertex { world_pos } => {
                handlers::editing::move_dragged_vertex(state, world_pos)
            }
            AppCommand::EndVertexDrag => handlers::editing::end_vertex_drag(state)?,
            AppCommand::UpdateHover {
                world_pos,
                tolerance,
            } => handlers::overlays::update_hover(state, world_pos, tolerance),

            // === Import ===
            AppCommand::OpenImportDialog => handlers::dialog::open_import(state),
            AppCommand::SetImportText { text } => handlers::dialog::set_import_text(state, text),
            AppCommand::RequestUploadDialog => handlers::dialog::request_upload(state),
            AppCommand::LoadUploadedFile { mime, contents } => {
                handlers::dialog::load_uploaded_file(state, &mime, contents)
            }
            AppCommand::ConfirmImport => handlers::dialog::confirm_import(state)?,
            AppCommand::CloseImportDialog => handlers::dialog::close_import(state),

            // === Positionsverfolgung & Popup ===
            AppCommand::ToggleGeolocation { map } => {
                handlers::overlays::toggle_geolocation(state, map)?
            }
            AppCommand::UpdateGeolocation {
                map,
                position,
                accuracy,
            } => handlers::overlays::update_geolocation(state, map, position, accuracy)?,
            AppCommand::FailGeolocation { map, message } => {
                handlers::overlays::fail_geolocation(state, map, message)?
            }
            AppCommand::SelectFeatureAt {
                world_pos,
                tolerance,
            } => handlers::overlays::select_feature_at(state, world_pos, tolerance),
            AppCommand::ClosePopup => handlers::overlays::close_popup(state),
        }

        Ok(())
    }
}
