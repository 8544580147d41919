//! Pointer-Delta-Verarbeitung: Kamera-Pan, Stützpunkt-Drag und Hover.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas für Kamera-Pan und Stützpunkt-Drag.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
            return;
        };

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::VertexDrag => {
                    events.push(AppIntent::VertexDragUpdated {
                        world_pos: ctx.to_world(pointer_pos),
                    });
                }
                PrimaryDragMode::CameraPan | PrimaryDragMode::None => {
                    events.push(pan_intent(ctx, pointer_pos, pointer_delta));
                }
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(pan_intent(ctx, pointer_pos, pointer_delta));
        }
    }

    /// Meldet Mausbewegungen über der Karte für Hover-Hervorhebung.
    pub(crate) fn handle_hover(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let hover = ctx.response.hover_pos();
        if hover == self.last_hover {
            return;
        }
        self.last_hover = hover;

        if let Some(pos) = hover {
            events.push(AppIntent::PointerMoved {
                map: ctx.map,
                world_pos: ctx.to_world(pos),
            });
        }
    }
}

/// Verschiebt die Kamera so, dass der Kartenpunkt unter dem Zeiger mitwandert.
fn pan_intent(
    ctx: &ViewportContext,
    pointer_pos: egui::Pos2,
    pointer_delta: egui::Vec2,
) -> AppIntent {
    let previous = ctx.to_world(pointer_pos - pointer_delta);
    let current = ctx.to_world(pointer_pos);
    AppIntent::CameraPan {
        map: ctx.map,
        delta: previous - current,
    }
}
