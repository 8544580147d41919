//! Handler für den Seitenstart und das Beenden.

use anyhow::Result;

use crate::app::host::HostConfig;
use crate::app::use_cases;
use crate::app::AppState;

/// Übernimmt die Host-Konfiguration.
pub fn apply_context(state: &mut AppState, host: HostConfig) {
    use_cases::initialize::apply_host_context(state, host);
}

/// Lädt Ausgangsgeometrie und Projektgrenze.
pub fn load_initial_features(state: &mut AppState) -> Result<()> {
    use_cases::initialize::load_initial_features(state)
}

/// Hängt Werkzeuge oder Popup an.
pub fn attach_interactions(state: &mut AppState) {
    use_cases::initialize::attach_interactions(state);
}

/// Signalisiert dem Host das Beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!(
        "Beenden, Formularfeld '{}' (Revision {}): {}",
        state.form.name,
        state.form.revision,
        state.form.value
    );
    state.should_exit = true;
}
