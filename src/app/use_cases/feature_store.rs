//! Use-Case-Funktionen für die Brücke zwischen Feature-Sammlung und Formularfeld.

use anyhow::Result;

use crate::app::AppState;
use crate::core::CollectionMode;
use crate::format;

/// Schreibt die aktuellen Features als GeoJSON-Text in das Formularfeld.
///
/// Einzelmodus: das erste Feature. Mehrfachmodus: alle Features als
/// FeatureCollection. Eine leere Sammlung lässt das Feld unverändert.
pub fn serialize_to_form(state: &mut AppState, include_z: bool) -> Result<()> {
    let value = match state.features.mode() {
        CollectionMode::Single => match state.features.get(0) {
            Some(feature) => format::write_feature(feature, include_z)?,
            None => return Ok(()),
        },
        CollectionMode::Multi => {
            if state.features.is_empty() {
                return Ok(());
            }
            format::write_feature_collection(state.features.features(), include_z)?
        }
    };
    state.form.write(value);
    log::debug!(
        "Formularfeld '{}' geschrieben (Revision {})",
        state.form.name,
        state.form.revision
    );
    Ok(())
}
