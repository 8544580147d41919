use crate::app::host::{CookieJar, FormField, HostConfig};
use crate::app::CommandLog;
use crate::core::{CollectionMode, Feature, FeatureCollection};
use crate::shared::EditorOptions;

use super::{EditorState, OverlayState, UiState, ViewState};

/// Hauptzustand einer Editor-Instanz.
///
/// Wird einmal pro Seite erzeugt und per `&mut` an alle Handler gereicht.
pub struct AppState {
    /// Host-Konfiguration der Seite
    pub host: HostConfig,
    /// Cookies der Seite
    pub cookies: CookieJar,
    /// Formularfeld für das GeoJSON
    pub form: FormField,
    /// Editierbare Features
    pub features: FeatureCollection,
    /// Projektgrenze (nur Anzeige und Einpassen)
    pub boundary: Option<Feature>,
    /// View-State
    pub view: ViewState,
    /// Zeichen-/Bearbeitungswerkzeuge
    pub editor: EditorState,
    /// Popup und Hover
    pub overlays: OverlayState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            host: HostConfig::default(),
            cookies: CookieJar::default(),
            form: FormField::new(&options.form_field),
            features: FeatureCollection::new(CollectionMode::Single),
            boundary: None,
            view: ViewState::new(),
            editor: EditorState::new(),
            overlays: OverlayState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl der Features (für UI-Anzeige)
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
