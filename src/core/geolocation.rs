//! Zustand der Positionsverfolgung (Marker, Genauigkeit, Einmal-Zentrierung).

use glam::DVec2;

use super::projection::scale_factor_at;

/// Positionsverfolgung einer Karte.
///
/// Die eigentliche Positionsquelle liegt beim Host; dieser Typ hält nur den
/// zuletzt gemeldeten Stand und die Schalterzustände.
#[derive(Debug, Clone)]
pub struct Geolocation {
    tracking: bool,
    available: bool,
    position: Option<DVec2>,
    accuracy: Option<f64>,
    center_on_first_fix: bool,
    last_error: Option<String>,
}

impl Default for Geolocation {
    fn default() -> Self {
        Self::new()
    }
}

impl Geolocation {
    /// Verfolgung aus, Schalter verfügbar.
    pub fn new() -> Self {
        Self {
            tracking: false,
            available: true,
            position: None,
            accuracy: None,
            center_on_first_fix: false,
            last_error: None,
        }
    }

    /// Ob die Verfolgung (und damit der Marker-Layer) aktiv ist.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Ob der Schalter bedienbar ist (nach Fehlern deaktiviert).
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Schaltet die Verfolgung. Ohne verfügbare Quelle bleibt sie aus.
    pub fn set_tracking(&mut self, active: bool) -> bool {
        self.tracking = active && self.available;
        self.tracking
    }

    /// Letzte Position (projiziert).
    pub fn position(&self) -> Option<DVec2> {
        self.position
    }

    /// Radius des Genauigkeitskreises in projizierten Einheiten.
    pub fn accuracy_radius(&self) -> Option<f64> {
        let position = self.position?;
        self.accuracy.map(|m| m * scale_factor_at(position))
    }

    /// Übernimmt eine neue Position.
    pub fn update(&mut self, position: DVec2, accuracy: Option<f64>) {
        self.position = Some(position);
        self.accuracy = accuracy;
    }

    /// Merkt vor, beim nächsten Positions-Fix einmalig zu zentrieren.
    pub fn arm_first_fix_centering(&mut self) {
        self.center_on_first_fix = true;
    }

    /// Ob eine Einmal-Zentrierung aussteht.
    pub fn first_fix_pending(&self) -> bool {
        self.center_on_first_fix
    }

    /// Liefert genau einmal `true` nach `arm_first_fix_centering`.
    pub fn take_first_fix(&mut self) -> bool {
        std::mem::take(&mut self.center_on_first_fix)
    }

    /// Quelle nicht verfügbar: Verfolgung stoppen und Schalter deaktivieren.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.tracking = false;
        self.available = false;
        self.center_on_first_fix = false;
        self.last_error = Some(message.into());
    }

    /// Letzte Fehlermeldung der Quelle.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
