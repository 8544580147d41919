//! Use-Case-Funktionen für das Einpassen der Ansicht.

use crate::app::AppState;
use crate::core::{Extent, Permalink};

use super::camera;

/// Passt alle Karten nach fester Rangfolge an.
///
/// 1. Ohne `force` und mit aktivem Orts-/Entfernungsfilter: Permalink aus
///    dem Cookie (fehlt er oder ist er fehlerhaft, geht es bei 2 weiter).
/// 2. Features vorhanden: vereinigte Ausdehnung, begrenzt auf den Fit-Maximalzoom.
/// 3. Projektgrenze vorhanden: deren Ausdehnung.
/// 4. Sonst Standardmittelpunkt; der erste Positions-Fix zentriert einmalig.
pub fn zoom_to_extent(state: &mut AppState, force: bool) {
    if !force && state.host.filters.any_active() {
        match stored_permalink(state) {
            Ok(permalink) => {
                camera::apply_permalink(state, &permalink);
                log::debug!("Ansicht aus Permalink {} wiederhergestellt", permalink);
                return;
            }
            Err(e) => log::warn!("Permalink nicht verwendbar: {:#}", e),
        }
    }

    if let Some(extent) = state.features.extent() {
        fit_all(state, &extent);
    } else if let Some(extent) = state.boundary.as_ref().map(|b| b.geometry.extent()) {
        fit_all(state, &extent);
    } else {
        let center = state.view.default_center;
        for instance in &mut state.view.maps {
            instance.view.set_center(center);
            instance.geolocation.arm_first_fix_centering();
        }
    }
}

fn stored_permalink(state: &AppState) -> anyhow::Result<Permalink> {
    let raw = state
        .cookies
        .get(&state.options.permalink_cookie)
        .ok_or_else(|| anyhow::anyhow!("Cookie '{}' fehlt", state.options.permalink_cookie))?;
    raw.parse()
}

/// Passt jede Karte auf eine Ausdehnung ein.
fn fit_all(state: &mut AppState, extent: &Extent) {
    let max_zoom = state.view.fit_max_zoom;
    for instance in &mut state.view.maps {
        let size = instance.effective_size();
        instance.view.fit(extent, size, max_zoom);
    }
}

/// Passt alle Karten auf ein Feature (per Kennung) ein.
pub fn focus_feature(state: &mut AppState, id: &str) {
    let Some(extent) = state.features.find_by_id(id).map(|f| f.geometry.extent()) else {
        log::warn!("Feature '{}' nicht gefunden", id);
        return;
    };
    fit_all(state, &extent);
}
