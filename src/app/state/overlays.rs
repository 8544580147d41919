use glam::DVec2;

/// Geöffnetes Feature-Popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupState {
    /// Index des gewählten Features
    pub feature: usize,
    /// Anker (erste Koordinate des Features, projiziert)
    pub anchor: DVec2,
    /// Titel
    pub label: String,
    /// Bearbeiten-Link (None ohne Link-Vorlage oder Kennung)
    pub href: Option<String>,
}

/// Zustand von Popup und Hover.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    /// Popup-Verhalten aktiv (nur ohne Bearbeitungsrechte)
    pub popup_enabled: bool,
    /// Aktuelles Popup
    pub popup: Option<PopupState>,
    /// Feature unter dem Mauszeiger
    pub hovered: Option<usize>,
}

impl OverlayState {
    /// Leerer Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeiger-Cursor über einem Feature.
    pub fn pointer_cursor(&self) -> bool {
        self.hovered.is_some()
    }
}
