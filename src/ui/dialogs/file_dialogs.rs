use std::path::Path;

use crate::app::{AppIntent, UiState};

/// Leitet aus der Dateiendung einen MIME-Typ ab, wie ihn ein Browser melden würde.
///
/// Dateien ohne Endung liefern einen leeren Typ.
pub(crate) fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        None => "",
        Some("geojson") => "application/geo+json",
        Some("json") => "application/json",
        Some("txt") => "text/plain",
        Some("xml") | Some("gpx") | Some("kml") => "application/xml",
        Some(_) => "application/octet-stream",
    }
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Upload-Dialog für den GeoJSON-Import
    if ui_state.show_upload_dialog {
        ui_state.show_upload_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("GeoJSON", &["geojson"])
            .add_filter("Alle Dateien", &["*"])
            .pick_file()
        {
            match std::fs::read_to_string(&path) {
                Ok(contents) => events.push(AppIntent::UploadedFileRead {
                    mime: mime_for_path(&path).to_string(),
                    contents,
                }),
                Err(e) => log::warn!("Datei {} nicht lesbar: {}", path.display(), e),
            }
        }
    }

    events
}
