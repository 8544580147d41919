//! Handler für den Import-Dialog und den Upload.

use anyhow::Result;

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Import-Dialog.
pub fn open_import(state: &mut AppState) {
    use_cases::import::open_dialog(state);
}

/// Setzt den Import-Text.
pub fn set_import_text(state: &mut AppState, text: String) {
    use_cases::import::set_text(state, text);
}

/// Fordert den Upload-Dateidialog an.
pub fn request_upload(state: &mut AppState) {
    use_cases::import::request_upload(state);
}

/// Übernimmt eine hochgeladene Datei.
pub fn load_uploaded_file(state: &mut AppState, mime: &str, contents: String) {
    use_cases::import::load_uploaded_file(state, mime, contents);
}

/// Führt den Import aus.
pub fn confirm_import(state: &mut AppState) -> Result<()> {
    use_cases::import::confirm(state)
}

/// Schließt den Import-Dialog.
pub fn close_import(state: &mut AppState) {
    use_cases::import::close_dialog(state);
}
