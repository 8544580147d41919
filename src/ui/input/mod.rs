//! Karten-Input-Handling: Maus-Events, Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks`: Klick-Events (Einfach-/Doppel-Klick, Werkzeug-Routing)
//! - `drag_primary`: Drag-Start/-Ende (Stützpunkt ziehen oder Kamera-Pan)
//! - `pointer_delta`: Pan-Deltas und Hover während der Mausbewegung
//! - `zoom`: Scroll-Zoom auf Mausposition

mod clicks;
mod drag_primary;
mod pointer_delta;
mod zoom;

use glam::DVec2;

use super::keyboard::{self, KeyboardContext};
use crate::app::{AppIntent, AppState, EditMode};
use crate::core::{FeatureCollection, MapView};
use crate::shared::EditorOptions;

/// Modus des primären (Links-)Drags in der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    CameraPan,
    /// Stützpunkt eines Features wird gezogen
    VertexDrag,
}

/// Bündelt die gemeinsamen Parameter für die Event-Verarbeitung einer Karte.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub map: usize,
    pub size: DVec2,
    pub view: &'a MapView,
    pub features: &'a FeatureCollection,
    /// Stützpunkte dürfen gegriffen werden
    pub can_modify: bool,
    pub options: &'a EditorOptions,
}

impl ViewportContext<'_> {
    /// Rechnet eine Bildschirmposition in Kartenkoordinaten um.
    pub fn to_world(&self, pointer_pos: egui::Pos2) -> DVec2 {
        screen_pos_to_world(pointer_pos, self.response, self.size, self.view)
    }

    /// Trefferradius in Karteneinheiten.
    pub fn tolerance(&self) -> f64 {
        self.view.pixel_tolerance(self.options.hit_tolerance_px)
    }
}

/// Verwaltet den Input-Zustand einer Karte (Drag-Modus, letzte Hover-Position).
#[derive(Debug, Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
    last_hover: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Karten-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus, Scroll, Tastatur und
    /// Größenänderungen einer Karte.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        map: usize,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let Ok(instance) = state.view.map(map) else {
            return events;
        };

        let size = DVec2::new(response.rect.width() as f64, response.rect.height() as f64);
        if instance.size_stale || instance.size != size {
            events.push(AppIntent::ViewportResized { map, size });
        }

        let ctx = ViewportContext {
            ui,
            response,
            map,
            size,
            view: &instance.view,
            features: &state.features,
            can_modify: state.editor.enabled
                && state.editor.sketch.is_empty()
                && state.editor.mode != EditMode::Modifying,
            options: &state.options,
        };

        // Tastenkürzel nur für die Karte unter dem Mauszeiger
        if response.hovered() || response.has_focus() {
            events.extend(keyboard::collect_keyboard_intents(
                ui,
                KeyboardContext {
                    drawing: state.editor.is_drawing(),
                    editing_enabled: state.editor.enabled,
                    popup_open: state.overlays.popup.is_some(),
                    import_open: state.ui.import.visible,
                },
            ));
        }

        self.handle_drag_start(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_hover(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Kartenkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    size: DVec2,
    view: &MapView,
) -> DVec2 {
    let local = pointer_pos - response.rect.min;
    view.screen_to_world(DVec2::new(local.x as f64, local.y as f64), size)
}

/// Rechnet Kartenkoordinaten in eine Bildschirmposition um.
pub(crate) fn world_to_screen_pos(
    world: DVec2,
    rect: egui::Rect,
    size: DVec2,
    view: &MapView,
) -> egui::Pos2 {
    let local = view.world_to_screen(world, size);
    rect.min + egui::vec2(local.x as f32, local.y as f32)
}
