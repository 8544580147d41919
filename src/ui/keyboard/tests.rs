use super::*;

fn key(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event, kb: KeyboardContext) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, kb);
        });
    });

    events
}

#[test]
fn test_enter_finishes_running_sketch() {
    let kb = KeyboardContext {
        drawing: true,
        editing_enabled: true,
        ..Default::default()
    };
    let events = collect_with_key_event(key(egui::Key::Enter, egui::Modifiers::default()), kb);

    assert!(events
        .iter()
        .any(|e| matches!(e, AppIntent::DrawFinishRequested)));
}

#[test]
fn test_enter_without_sketch_is_ignored() {
    let kb = KeyboardContext {
        editing_enabled: true,
        ..Default::default()
    };
    let events = collect_with_key_event(key(egui::Key::Enter, egui::Modifiers::default()), kb);

    assert!(events.is_empty());
}

#[test]
fn test_escape_aborts_sketch_before_closing_popup() {
    let kb = KeyboardContext {
        drawing: true,
        popup_open: true,
        ..Default::default()
    };
    let events = collect_with_key_event(key(egui::Key::Escape, egui::Modifiers::default()), kb);

    assert!(events
        .iter()
        .any(|e| matches!(e, AppIntent::DrawAbortRequested)));
    assert!(!events
        .iter()
        .any(|e| matches!(e, AppIntent::PopupCloseRequested)));
}

#[test]
fn test_escape_closes_popup() {
    let kb = KeyboardContext {
        popup_open: true,
        ..Default::default()
    };
    let events = collect_with_key_event(key(egui::Key::Escape, egui::Modifiers::default()), kb);

    assert!(events
        .iter()
        .any(|e| matches!(e, AppIntent::PopupCloseRequested)));
}

#[test]
fn test_import_shortcut_requires_edit_rights() {
    let events = collect_with_key_event(
        key(egui::Key::I, egui::Modifiers::COMMAND),
        KeyboardContext::default(),
    );
    assert!(events.is_empty());

    let kb = KeyboardContext {
        editing_enabled: true,
        ..Default::default()
    };
    let events = collect_with_key_event(key(egui::Key::I, egui::Modifiers::COMMAND), kb);
    assert!(events
        .iter()
        .any(|e| matches!(e, AppIntent::ImportDialogOpenRequested)));
}

#[test]
fn test_open_import_dialog_swallows_keys() {
    let kb = KeyboardContext {
        drawing: true,
        import_open: true,
        ..Default::default()
    };
    let events = collect_with_key_event(key(egui::Key::Escape, egui::Modifiers::default()), kb);

    assert!(events.is_empty());
}
