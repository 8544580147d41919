//! Use-Case-Funktionen für die Basemap-Auswahl.

use crate::app::AppState;
use crate::core::basemap::parse_preference;
use crate::core::BasemapSet;

/// Wählt die Basemap nach Cookie-Präferenz, sonst die erste.
///
/// Ohne konfigurierte Layer wird ein Hinweis angezeigt.
pub fn select_basemap(state: &mut AppState) {
    state.view.basemaps = BasemapSet::new(state.host.layers.clone());
    if state.view.basemaps.is_empty() {
        state.view.basemap_notice = Some(state.options.messages.no_basemap.clone());
        log::warn!("Keine Basemap konfiguriert");
        return;
    }
    state.view.basemap_notice = None;

    let preference = state
        .cookies
        .get(&state.options.basemap_cookie)
        .and_then(parse_preference);
    if let Some(index) = state.view.basemaps.select(preference) {
        log::info!(
            "Basemap {} aktiv (Präferenz {:?})",
            state.view.basemaps.layers()[index].name,
            preference
        );
    }
}

/// Schaltet auf eine Basemap um und merkt die Wahl im Cookie.
pub fn show_basemap(state: &mut AppState, lid: i64) {
    if state.view.basemaps.show(lid) {
        let name = state.options.basemap_cookie.clone();
        state.cookies.set(&name, lid.to_string());
    } else {
        log::warn!("Basemap {} ist nicht konfiguriert", lid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BasemapLayer;

    fn state_with_layers() -> AppState {
        let mut state = AppState::new();
        state.host.layers = vec![BasemapLayer::new(1, "A"), BasemapLayer::new(2, "B")];
        state
    }

    fn visible(state: &AppState) -> Vec<bool> {
        state.view.basemaps.layers().iter().map(|l| l.visible).collect()
    }

    #[test]
    fn test_cookie_preference_selects_layer() {
        let mut state = state_with_layers();
        state.cookies.set(&state.options.basemap_cookie.clone(), "2");
        select_basemap(&mut state);
        assert_eq!(visible(&state), vec![false, true]);
    }

    #[test]
    fn test_without_preference_first_layer_is_visible() {
        let mut state = state_with_layers();
        select_basemap(&mut state);
        assert_eq!(visible(&state), vec![true, false]);
    }

    #[test]
    fn test_no_layers_shows_notice() {
        let mut state = AppState::new();
        select_basemap(&mut state);
        assert_eq!(
            state.view.basemap_notice.as_deref(),
            Some(state.options.messages.no_basemap.as_str())
        );
    }

    #[test]
    fn test_switch_stores_cookie() {
        let mut state = state_with_layers();
        select_basemap(&mut state);
        show_basemap(&mut state, 2);
        assert_eq!(visible(&state), vec![false, true]);
        assert_eq!(state.cookies.get(&state.options.basemap_cookie), Some("2"));
    }
}
