//! Use-Case-Funktionen für den GeoJSON-Import (Einfügen oder Upload).

use anyhow::Result;

use super::{extent, feature_store};
use crate::app::AppState;
use crate::format;

/// Präfix der akzeptierten MIME-Typen (`application/geo+json`, `application/geojson`).
const GEOJSON_MIME_PREFIX: &str = "application/geo";

/// Prüft den deklarierten MIME-Typ einer hochgeladenen Datei.
///
/// Ein leerer Typ (Quelle kennt ihn nicht) wird akzeptiert.
pub fn is_geojson_mime(mime: &str) -> bool {
    let mime = mime.trim();
    mime.is_empty() || mime.to_ascii_lowercase().starts_with(GEOJSON_MIME_PREFIX)
}

/// Öffnet den Import-Dialog.
pub fn open_dialog(state: &mut AppState) {
    state.ui.import.visible = true;
    state.ui.import.error = None;
}

/// Übernimmt den Text aus dem Dialog.
pub fn set_text(state: &mut AppState, text: String) {
    state.ui.import.text = text;
    state.ui.import.error = None;
}

/// Fordert den Dateidialog für den Upload an.
pub fn request_upload(state: &mut AppState) {
    if state.ui.upload_enabled {
        state.ui.show_upload_dialog = true;
    } else {
        log::warn!("Upload ist für diese Seite nicht freigegeben");
    }
}

/// Übernimmt eine hochgeladene Datei in den Dialog.
///
/// Dateien mit falschem MIME-Typ werden abgewiesen; der bisherige Text bleibt.
pub fn load_uploaded_file(state: &mut AppState, mime: &str, contents: String) {
    if !is_geojson_mime(mime) {
        log::warn!("Upload mit MIME-Typ '{}' abgewiesen", mime);
        state.ui.status_message = Some(format!(
            "{}: {}",
            state.options.messages.unsupported_file_type, mime
        ));
        return;
    }
    state.ui.import.visible = true;
    set_text(state, contents);
}

/// Führt den Import aus: Sammlung ersetzen, serialisieren, Ansicht einpassen.
///
/// Ungültiges oder leeres GeoJSON lässt Dialog und Sammlung unverändert
/// und zeigt einen Hinweis.
pub fn confirm(state: &mut AppState) -> Result<()> {
    let features = match format::read_features(&state.ui.import.text) {
        Ok(features) if !features.is_empty() => features,
        Ok(_) => {
            log::warn!("Import enthält keine Features, Sammlung bleibt unverändert");
            state.ui.import.error = Some(state.options.messages.invalid_file.clone());
            return Ok(());
        }
        Err(e) => {
            log::warn!("Import fehlgeschlagen: {:#}", e);
            state.ui.import.error = Some(state.options.messages.invalid_file.clone());
            return Ok(());
        }
    };

    log::info!("{} Features importiert", features.len());
    state.features.replace_all(features);
    state.overlays.popup = None;
    state.ui.import.close();
    feature_store::serialize_to_form(state, false)?;
    extent::zoom_to_extent(state, true);
    Ok(())
}

/// Schließt den Dialog ohne Import.
pub fn close_dialog(state: &mut AppState) {
    state.ui.import.close();
}
