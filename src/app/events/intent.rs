use glam::DVec2;

use crate::app::host::HostConfig;
use crate::core::GeometryType;

/// App-Intent: Eingaben aus UI, Host oder Positionsquelle ohne Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Host-Seite ist geladen, Konfiguration liegt vor
    HostPageLoaded { host: Box<HostConfig> },
    /// Anwendung beenden
    ExitRequested,

    // === Ansicht ===
    /// Kartengröße wurde (neu) gemessen
    ViewportResized { map: usize, size: DVec2 },
    /// Umgebendes Panel ein-/ausgeblendet
    PanelToggled,
    /// Kamera um ein Karten-Delta verschieben
    CameraPan { map: usize, delta: DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        map: usize,
        factor: f64,
        focus_world: Option<DVec2>,
    },
    /// Basemap im Auswahlmenü gewählt
    BasemapSelected { lid: i64 },
    /// Schaltfläche "Auf Ausdehnung zoomen"
    ZoomToExtentRequested,
    /// Listenzeile angeklickt: auf ein Feature zoomen
    FocusFeatureRequested { id: String },

    // === Zeichnen & Bearbeiten ===
    /// Zeichen-Toggle für einen Geometrietyp betätigt
    DrawToolToggled { geometry_type: GeometryType },
    /// Klick in die Karte
    MapClicked { map: usize, world_pos: DVec2 },
    /// Skizze abschließen (Doppelklick/Enter)
    DrawFinishRequested,
    /// Skizze verwerfen (Escape)
    DrawAbortRequested,
    /// Ziehen in der Karte begonnen
    VertexDragStarted { map: usize, world_pos: DVec2 },
    /// Ziehen fortgesetzt
    VertexDragUpdated { world_pos: DVec2 },
    /// Ziehen beendet
    VertexDragEnded,
    /// Mauszeiger bewegt (Hover)
    PointerMoved { map: usize, world_pos: DVec2 },

    // === Import ===
    /// Import-Dialog öffnen
    ImportDialogOpenRequested,
    /// Text im Import-Dialog geändert
    ImportTextChanged { text: String },
    /// Datei-Upload angefordert (zeigt Dateidialog)
    UploadFileRequested,
    /// Hochgeladene Datei wurde gelesen
    UploadedFileRead { mime: String, contents: String },
    /// Import bestätigt
    ImportConfirmed,
    /// Import abgebrochen
    ImportCancelled,

    // === Positionsverfolgung & Popup ===
    /// Geolocation-Toggle betätigt
    GeolocationToggled { map: usize },
    /// Neue Position der Quelle (geographisch)
    GeolocationPositionChanged {
        map: usize,
        lon: f64,
        lat: f64,
        accuracy: Option<f64>,
    },
    /// Quelle meldet einen Fehler
    GeolocationFailed { map: usize, message: String },
    /// Popup schließen
    PopupCloseRequested,
}
