use crate::app::{AppIntent, AppState};

/// Zeigt den GeoJSON-Import-Dialog.
///
/// Text kann eingefügt oder per Upload geladen werden. Ungültige Eingaben
/// lassen den Dialog offen und zeigen die Fehlermeldung.
pub fn show_import_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let dialog = &state.ui.import;
    let messages = &state.options.messages;

    if !dialog.visible {
        return events;
    }

    egui::Window::new(&messages.import_title)
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(420.0);
            ui.label(&messages.import_hint);
            ui.add_space(6.0);

            let mut text = dialog.text.clone();
            let response = ui.add(
                egui::TextEdit::multiline(&mut text)
                    .code_editor()
                    .desired_rows(12)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                events.push(AppIntent::ImportTextChanged { text });
            }

            if let Some(error) = &dialog.error {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::LIGHT_RED, error);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if state.ui.upload_enabled && ui.button(&messages.upload).clicked() {
                    events.push(AppIntent::UploadFileRequested);
                }
                if ui.button(&messages.import_confirm).clicked() {
                    events.push(AppIntent::ImportConfirmed);
                }
                if ui.button(&messages.cancel).clicked() {
                    events.push(AppIntent::ImportCancelled);
                }
            });
        });

    events
}
