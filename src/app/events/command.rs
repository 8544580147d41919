use glam::DVec2;

use crate::app::host::HostConfig;
use crate::core::GeometryType;

/// App-Command: mutierende Schritte, zentral vom Controller ausgeführt.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Initialisierung ===
    /// Host-Konfiguration, Cookies und Sammlungsmodus übernehmen
    ApplyHostContext { host: Box<HostConfig> },
    /// Ansicht aus Host-Standardwerten aufbauen
    InitializeView,
    /// Basemap nach Cookie-Präferenz wählen
    SelectBasemap,
    /// Ausgangsgeometrie und Projektgrenze laden
    LoadInitialFeatures,
    /// Zeichenwerkzeuge oder Popup-Verhalten anhängen
    AttachInteractions,
    /// Ansicht einpassen (`force` überspringt den Permalink)
    ZoomToExtent { force: bool },
    /// Anwendung beenden
    RequestExit,

    // === Ansicht ===
    /// Gemessene Kartengröße setzen
    SetMapSize { map: usize, size: DVec2 },
    /// Panel-Sichtbarkeit umschalten
    TogglePanel,
    /// Größen aller Karten als veraltet markieren
    MarkMapSizesStale,
    /// Kamera verschieben
    PanCamera { map: usize, delta: DVec2 },
    /// Kamera zoomen
    ZoomCamera {
        map: usize,
        factor: f64,
        focus_world: Option<DVec2>,
    },
    /// Permalink-Cookie aus der Ansicht schreiben
    StorePermalink { map: usize },
    /// Basemap sichtbar schalten und Präferenz speichern
    ShowBasemap { lid: i64 },
    /// Auf ein Feature einpassen
    FocusFeature { id: String },

    // === Zeichnen & Bearbeiten ===
    /// Zeichen-Toggle umschalten
    ToggleDrawTool { geometry_type: GeometryType },
    /// Stützpunkt zur Skizze hinzufügen
    AddDrawVertex { world_pos: DVec2 },
    /// Skizze abschließen
    FinishDraw,
    /// Skizze verwerfen
    AbortDraw,
    /// Stützpunkt greifen
    BeginVertexDrag { world_pos: DVec2, tolerance: f64 },
    /// Gegriffenen Stützpunkt bewegen
    MoveDraggedVertex { world_pos: DVec2 },
    /// Ziehen beenden und serialisieren
    EndVertexDrag,
    /// Feature unter dem Mauszeiger ermitteln
    UpdateHover { world_pos: DVec2, tolerance: f64 },

    // === Import ===
    /// Import-Dialog öffnen
    OpenImportDialog,
    /// Import-Text setzen
    SetImportText { text: String },
    /// Dateidialog für den Upload anfordern
    RequestUploadDialog,
    /// Hochgeladene Datei übernehmen (MIME-Prüfung)
    LoadUploadedFile { mime: String, contents: String },
    /// Import ausführen
    ConfirmImport,
    /// Import-Dialog schließen
    CloseImportDialog,

    // === Positionsverfolgung & Popup ===
    /// Positionsverfolgung umschalten
    ToggleGeolocation { map: usize },
    /// Position übernehmen (projiziert)
    UpdateGeolocation {
        map: usize,
        position: DVec2,
        accuracy: Option<f64>,
    },
    /// Quelle als nicht verfügbar markieren
    FailGeolocation { map: usize, message: String },
    /// Feature an einer Position wählen (Popup)
    SelectFeatureAt { world_pos: DVec2, tolerance: f64 },
    /// Popup schließen
    ClosePopup,
}
