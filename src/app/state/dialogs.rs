/// Zustand des GeoJSON-Import-Dialogs.
#[derive(Debug, Clone, Default)]
pub struct ImportDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Eingefügter oder hochgeladener GeoJSON-Text
    pub text: String,
    /// Fehlermeldung im Dialog (z.B. ungültige Datei)
    pub error: Option<String>,
}

impl ImportDialogState {
    /// Erstellt einen geschlossenen Dialog-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schließt den Dialog und verwirft Text und Fehler.
    pub fn close(&mut self) {
        self.visible = false;
        self.text.clear();
        self.error = None;
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Import-Dialog
    pub import: ImportDialogState,
    /// Ob der Datei-Dialog für den Upload geöffnet werden soll
    pub show_upload_dialog: bool,
    /// Upload-Schalter sichtbar
    pub upload_enabled: bool,
    /// Temporäre Statusnachricht (nicht blockierend)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}
