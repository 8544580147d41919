//! Use-Case-Funktionen für Kartengrößen und Panel-Sichtbarkeit.

use anyhow::Result;
use glam::DVec2;

use crate::app::AppState;

/// Übernimmt die gemessene Größe einer Karte.
pub fn resize(state: &mut AppState, map: usize, size: DVec2) -> Result<()> {
    let instance = state.view.map_mut(map)?;
    instance.size = size;
    instance.size_stale = false;
    Ok(())
}

/// Schaltet die Sichtbarkeit des umgebenden Panels um.
pub fn toggle_panel(state: &mut AppState) {
    state.view.panel_visible = !state.view.panel_visible;
    log::debug!("Panel sichtbar: {}", state.view.panel_visible);
}

/// Markiert alle Kartengrößen als veraltet; die UI misst beim nächsten Frame neu.
pub fn mark_sizes_stale(state: &mut AppState) {
    for instance in &mut state.view.maps {
        instance.size_stale = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_then_resize_clears_stale_flag() {
        let mut state = AppState::new();
        resize(&mut state, 0, DVec2::new(800.0, 600.0)).unwrap();
        assert!(!state.view.maps[0].size_stale);

        toggle_panel(&mut state);
        mark_sizes_stale(&mut state);
        assert!(!state.view.panel_visible);
        assert!(state.view.maps[0].size_stale);

        resize(&mut state, 0, DVec2::new(400.0, 300.0)).unwrap();
        assert!(!state.view.maps[0].size_stale);
        assert_eq!(state.view.maps[0].size, DVec2::new(400.0, 300.0));
    }
}
