//! Use-Case-Funktionen für Kamera-Steuerung und Permalink.

use anyhow::Result;
use glam::DVec2;

use crate::app::AppState;
use crate::core::projection::{degrees_to_radians, from_lon_lat, to_lon_lat};
use crate::core::{MapView, Permalink};

/// Baut die Ansicht aller Karten aus den Host-Standardwerten auf.
///
/// Fehlende oder unlesbare Werte fallen auf die Optionen zurück; die
/// Rotation kommt in Grad und wird in Bogenmaß umgerechnet.
pub fn initialize_view(state: &mut AppState) {
    let defaults = &state.host.defaults;
    let lon = defaults.lon.unwrap_or(state.options.default_lon);
    let lat = defaults.lat.unwrap_or(state.options.default_lat);
    let zoom = defaults.zoom.unwrap_or(state.options.default_zoom);
    let max_zoom = defaults.maxzoom.unwrap_or(state.options.default_max_zoom);
    let fit_max_zoom = defaults.fit_maxzoom.unwrap_or(state.options.fit_max_zoom);
    let rotation = degrees_to_radians(state.host.rotation.unwrap_or(0.0));

    let center = from_lon_lat(lon, lat);
    state.view.default_center = center;
    state.view.fit_max_zoom = fit_max_zoom;
    for instance in &mut state.view.maps {
        instance.view = MapView::new(center, zoom, max_zoom, rotation);
    }
    log::info!(
        "Ansicht initialisiert: {:.5}/{:.5}, Zoom {}, Maximalzoom {}, Rotation {:.3} rad",
        lon,
        lat,
        zoom,
        max_zoom,
        rotation
    );
}

/// Verschiebt die Kamera einer Karte.
pub fn pan(state: &mut AppState, map: usize, delta: DVec2) -> Result<()> {
    state.view.map_mut(map)?.view.pan(delta);
    Ok(())
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Kartenpunkt unter
/// der Maus nach dem Zoom an derselben Bildschirmposition.
pub fn zoom_towards(
    state: &mut AppState,
    map: usize,
    factor: f64,
    focus_world: Option<DVec2>,
) -> Result<()> {
    state.view.map_mut(map)?.view.zoom_towards(factor, focus_world);
    Ok(())
}

/// Permalink der aktuellen Ansicht.
pub fn permalink_of(view: &MapView) -> Permalink {
    let geo = to_lon_lat(view.center);
    Permalink {
        zoom: view.zoom.round() as i32,
        lon: geo.x,
        lat: geo.y,
        rotation: view.rotation,
    }
}

/// Schreibt den Permalink einer Karte in das Permalink-Cookie.
pub fn store_permalink(state: &mut AppState, map: usize) -> Result<()> {
    let permalink = permalink_of(&state.view.map(map)?.view);
    let name = state.options.permalink_cookie.clone();
    state.cookies.set(&name, permalink.to_string());
    Ok(())
}

/// Stellt alle Karten aus einem Permalink wieder her.
pub fn apply_permalink(state: &mut AppState, permalink: &Permalink) {
    let center = from_lon_lat(permalink.lon, permalink.lat);
    for instance in &mut state.view.maps {
        instance.view.set_zoom(permalink.zoom as f64);
        instance.view.set_center(center);
        instance.view.rotation = permalink.rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::host::HostConfig;
    use approx::assert_relative_eq;

    #[test]
    fn test_initialize_view_uses_host_defaults_and_converts_rotation() {
        let mut state = AppState::new();
        state.host = HostConfig::from_json(
            r#"{"defaults":{"lon":"139.7","lat":"35.6","zoom":"10","maxzoom":"16"},"rotation":"90"}"#,
        )
        .unwrap();
        initialize_view(&mut state);
        let view = &state.view.maps[0].view;
        assert_eq!(view.zoom, 10.0);
        assert_eq!(view.max_zoom, 16.0);
        assert_relative_eq!(view.rotation, std::f64::consts::FRAC_PI_2);
        let expected = from_lon_lat(139.7, 35.6);
        assert_relative_eq!(view.center.x, expected.x);
        assert_relative_eq!(view.center.y, expected.y);
    }

    #[test]
    fn test_initialize_view_falls_back_to_options() {
        let mut state = AppState::new();
        initialize_view(&mut state);
        let view = &state.view.maps[0].view;
        assert_eq!(view.zoom, state.options.default_zoom);
        assert_eq!(view.max_zoom, state.options.default_max_zoom);
        assert_eq!(view.rotation, 0.0);
    }

    #[test]
    fn test_store_permalink_writes_cookie() {
        let mut state = AppState::new();
        initialize_view(&mut state);
        store_permalink(&mut state, 0).unwrap();
        let cookie = state.cookies.get(&state.options.permalink_cookie).unwrap();
        let permalink: Permalink = cookie.parse().unwrap();
        assert_eq!(permalink.zoom, 13);
        assert_relative_eq!(permalink.lon, 135.1955, epsilon = 1e-5);
        assert_relative_eq!(permalink.lat, 34.6901, epsilon = 1e-5);
    }

    #[test]
    fn test_unknown_map_is_an_error() {
        let mut state = AppState::new();
        assert!(pan(&mut state, 3, DVec2::ONE).is_err());
    }
}
