//! Use-Case-Funktionen für die Positionsverfolgung.

use anyhow::Result;
use glam::DVec2;

use crate::app::AppState;

/// Schaltet die Verfolgung (und den Marker-Layer) einer Karte um.
pub fn toggle(state: &mut AppState, map: usize) -> Result<()> {
    let geolocation = &mut state.view.map_mut(map)?.geolocation;
    let wanted = !geolocation.is_tracking();
    let active = geolocation.set_tracking(wanted);
    if wanted && !active {
        log::warn!("Positionsverfolgung ist nicht verfügbar");
    }
    Ok(())
}

/// Übernimmt eine neue Position.
///
/// Der erste Fix nach einem Einpassen auf den Standardmittelpunkt zentriert
/// einmalig; danach wird nur zentriert, wenn die Position den sichtbaren
/// Ausschnitt verlässt.
pub fn update_position(
    state: &mut AppState,
    map: usize,
    position: DVec2,
    accuracy: Option<f64>,
) -> Result<()> {
    let instance = state.view.map_mut(map)?;
    if !instance.geolocation.is_tracking() {
        log::debug!("Position ignoriert, Verfolgung ist aus");
        return Ok(());
    }
    instance.geolocation.update(position, accuracy);

    let size = instance.effective_size();
    if instance.geolocation.take_first_fix() || !instance.view.contains(position, size) {
        instance.view.set_center(position);
    }
    Ok(())
}

/// Quelle meldet einen Fehler: Verfolgung stoppen und Toggle deaktivieren.
pub fn fail(state: &mut AppState, map: usize, message: String) -> Result<()> {
    log::warn!("Positionsverfolgung fehlgeschlagen: {}", message);
    state.view.map_mut(map)?.geolocation.fail(message);
    state.ui.status_message = Some(state.options.messages.geolocation_unavailable.clone());
    Ok(())
}
