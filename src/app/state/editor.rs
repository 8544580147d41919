use glam::DVec2;

use crate::core::{GeometryType, VertexRef};

/// Bearbeitungsmodus des Vektor-Layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Anzeigen (ein Zeichenwerkzeug kann dennoch scharf geschaltet sein)
    #[default]
    Viewing,
    /// Skizze eines neuen Features läuft
    Drawing(GeometryType),
    /// Stützpunkt wird gezogen
    Modifying,
}

/// Zustand der Zeichen- und Bearbeitungswerkzeuge.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Bearbeitung freigeschaltet (Host hat Geometrietypen erlaubt)
    pub enabled: bool,
    /// Erlaubte Geometrietypen in Toolbar-Reihenfolge
    pub allowed_types: Vec<GeometryType>,
    /// Aktueller Modus
    pub mode: EditMode,
    /// Aktiver Zeichen-Toggle (höchstens einer)
    pub active_tool: Option<GeometryType>,
    /// Stützpunkte der laufenden Skizze
    pub sketch: Vec<DVec2>,
    /// Z-Wert für neu gezeichnete Koordinaten
    pub representative_z: f64,
    /// Gezogener Stützpunkt
    pub drag: Option<VertexRef>,
    /// Ob der Stützpunkt während des Ziehens tatsächlich bewegt wurde
    pub drag_moved: bool,
}

impl EditorState {
    /// Leerer Zustand, Bearbeitung deaktiviert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ob gerade eine Skizze läuft.
    pub fn is_drawing(&self) -> bool {
        matches!(self.mode, EditMode::Drawing(_))
    }

    /// Ob ein Geometrietyp gezeichnet werden darf.
    pub fn allows(&self, geometry_type: GeometryType) -> bool {
        self.enabled && self.allowed_types.contains(&geometry_type)
    }
}
