//! Drag-Start/-Ende: Stützpunkt greifen oder Kamera verschieben.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Entscheidet beim Drag-Start zwischen Stützpunkt-Drag und Kamera-Pan.
    pub(crate) fn handle_drag_start(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
            return;
        };
        let world_pos = ctx.to_world(pointer_pos);

        let hits_vertex = ctx.can_modify
            && ctx
                .features
                .nearest_vertex(world_pos, ctx.tolerance())
                .is_some();

        if hits_vertex {
            self.primary_drag_mode = PrimaryDragMode::VertexDrag;
            events.push(AppIntent::VertexDragStarted {
                map: ctx.map,
                world_pos,
            });
        } else {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
        }
    }

    /// Schließt einen laufenden Drag ab.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }

        if self.primary_drag_mode == PrimaryDragMode::VertexDrag {
            events.push(AppIntent::VertexDragEnded);
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
