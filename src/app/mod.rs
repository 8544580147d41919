//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod host;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand des Editors (Features, Karten, Werkzeuge, Overlays).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use host::{CookieJar, FormField, HostConfig};
pub use state::{
    AppState, EditMode, EditorState, ImportDialogState, MapInstance, OverlayState, PopupState,
    UiState, ViewState,
};
