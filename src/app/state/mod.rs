//! Application State: zentrale Datenhaltung pro Editor-Instanz.

mod app_state;
mod dialogs;
mod editor;
mod overlays;
mod view;

pub use app_state::AppState;
pub use dialogs::{ImportDialogState, UiState};
pub use editor::{EditMode, EditorState};
pub use overlays::{OverlayState, PopupState};
pub use view::{MapInstance, ViewState};
