//! Tastenkürzel der Karte.
//!
//! Mappt Tastendrücke abhängig vom Bearbeitungszustand auf `AppIntent`s.

use crate::app::AppIntent;

/// Zustandsausschnitt, den die Tastenkürzel benötigen.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct KeyboardContext {
    /// Eine Skizze läuft
    pub drawing: bool,
    /// Bearbeitung ist freigeschaltet
    pub editing_enabled: bool,
    /// Ein Popup ist geöffnet
    pub popup_open: bool,
    /// Der Import-Dialog hat den Fokus
    pub import_open: bool,
}

/// Verarbeitet Tastenkürzel und gibt AppIntents zurück.
pub(crate) fn collect_keyboard_intents(ui: &egui::Ui, kb: KeyboardContext) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Textfelder im Import-Dialog behalten Enter und Escape
    if kb.import_open {
        return events;
    }

    let (modifiers, enter, escape, key_i, key_q) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::I),
            i.key_pressed(egui::Key::Q),
        )
    });

    if enter && kb.drawing {
        events.push(AppIntent::DrawFinishRequested);
    }

    if escape {
        if kb.drawing {
            events.push(AppIntent::DrawAbortRequested);
        } else if kb.popup_open {
            events.push(AppIntent::PopupCloseRequested);
        }
    }

    if modifiers.command && key_i && kb.editing_enabled {
        events.push(AppIntent::ImportDialogOpenRequested);
    }

    if modifiers.command && key_q {
        events.push(AppIntent::ExitRequested);
    }

    events
}

#[cfg(test)]
mod tests;
