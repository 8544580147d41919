//! Klick-Events: Einfach-/Doppel-Klick, Werkzeug-Routing.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Einfach- und Doppelklick-Events in der Karte.
    ///
    /// Doppelklick schließt eine laufende Skizze ab. Der erste Klick des
    /// Doppelklicks hat den letzten Stützpunkt bereits gesetzt.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if ctx.response.double_clicked_by(egui::PointerButton::Primary) {
            events.push(AppIntent::DrawFinishRequested);
            self.primary_drag_mode = PrimaryDragMode::None;
        } else if ctx.response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                events.push(AppIntent::MapClicked {
                    map: ctx.map,
                    world_pos: ctx.to_world(pointer_pos),
                });
            }
            self.primary_drag_mode = PrimaryDragMode::None;
        }
    }
}
