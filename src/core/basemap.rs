//! Hintergrundkarten (Basemaps): Kachel-Layer-Definitionen und Sichtbarkeit.

use serde::{Deserialize, Serialize};

/// Definition eines Kachel-Layers, wie vom Host geliefert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasemapLayer {
    /// Layer-ID (wird als Präferenz im Cookie gespeichert)
    pub lid: i64,
    /// Anzeigename
    #[serde(default)]
    pub name: String,
    /// Kachel-URL-Vorlage (`{z}/{x}/{y}`)
    #[serde(default)]
    pub url: String,
    /// Quellenangabe
    #[serde(default)]
    pub attribution: String,
    /// Sichtbarkeit (wird nur vom Editor gesetzt)
    #[serde(skip)]
    pub visible: bool,
}

impl BasemapLayer {
    /// Erstellt einen unsichtbaren Layer.
    pub fn new(lid: i64, name: &str) -> Self {
        Self {
            lid,
            name: name.to_string(),
            url: String::new(),
            attribution: String::new(),
            visible: false,
        }
    }
}

/// Alle verfügbaren Basemaps; höchstens eine ist sichtbar.
#[derive(Debug, Clone, Default)]
pub struct BasemapSet {
    layers: Vec<BasemapLayer>,
    active: Option<usize>,
}

impl BasemapSet {
    /// Übernimmt die Layer (alle zunächst unsichtbar).
    pub fn new(layers: Vec<BasemapLayer>) -> Self {
        let layers = layers
            .into_iter()
            .map(|mut l| {
                l.visible = false;
                l
            })
            .collect();
        Self {
            layers,
            active: None,
        }
    }

    /// `true`, wenn keine Basemap konfiguriert ist.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Read-only Sicht auf alle Layer.
    pub fn layers(&self) -> &[BasemapLayer] {
        &self.layers
    }

    /// Index des sichtbaren Layers.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Der sichtbare Layer.
    pub fn active_layer(&self) -> Option<&BasemapLayer> {
        self.active.and_then(|i| self.layers.get(i))
    }

    /// Wählt den sichtbaren Layer anhand einer gespeicherten Präferenz.
    ///
    /// Passt keine Layer-ID zur Präferenz (oder fehlt sie), wird der erste
    /// Layer angezeigt. Ohne Layer: `None`.
    pub fn select(&mut self, preference: Option<i64>) -> Option<usize> {
        if self.layers.is_empty() {
            self.active = None;
            return None;
        }
        let index = preference
            .and_then(|lid| self.layers.iter().position(|l| l.lid == lid))
            .unwrap_or(0);
        self.show_index(index);
        Some(index)
    }

    /// Macht den Layer mit der ID sichtbar. `false`, wenn unbekannt.
    pub fn show(&mut self, lid: i64) -> bool {
        match self.layers.iter().position(|l| l.lid == lid) {
            Some(index) => {
                self.show_index(index);
                true
            }
            None => false,
        }
    }

    fn show_index(&mut self, index: usize) {
        for (i, layer) in self.layers.iter_mut().enumerate() {
            layer.visible = i == index;
        }
        self.active = Some(index);
    }
}

/// Liest die Layer-Präferenz aus einem Cookie-Wert (`parseInt`-Semantik).
///
/// Führende Ziffern zählen, der Rest wird ignoriert; `0` gilt als keine Präferenz.
pub fn parse_preference(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse::<i64>().ok().filter(|lid| *lid != 0)
}
