//! Features (Geometrie + Eigenschaften) und die editierbare Feature-Sammlung.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::{Extent, Geometry, GeometryType};

/// Feature-ID auf oberster GeoJSON-Ebene (Text oder Zahl).
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureId {
    /// Textuelle ID
    Text(String),
    /// Numerische ID
    Number(serde_json::Number),
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Geometrie mit Eigenschaften, die atomare Einheit der Anzeige/Bearbeitung.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Optionale Feature-ID
    pub id: Option<FeatureId>,
    /// Geometrie in Kartenprojektion
    pub geometry: Geometry,
    /// Eigenschaften in Eingabereihenfolge
    pub properties: Map<String, Value>,
}

impl Feature {
    /// Erstellt ein Feature ohne Eigenschaften.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            id: None,
            geometry,
            properties: Map::new(),
        }
    }

    /// Setzt eine Eigenschaft (Builder-Stil).
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// Liest eine Eigenschaft als Text (Zahlen und Bools werden formatiert).
    pub fn property_text(&self, key: &str) -> Option<String> {
        match self.properties.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Kennung des Features: Eigenschaft `id`, sonst die Feature-ID.
    pub fn identifier(&self) -> Option<String> {
        self.property_text("id")
            .or_else(|| self.id.as_ref().map(FeatureId::to_string))
    }

    /// Geometrietyp des Features.
    pub fn geometry_type(&self) -> GeometryType {
        self.geometry.geometry_type()
    }
}

/// Verhalten der Sammlung beim Zeichnen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionMode {
    /// Einzelgeometrie-Bearbeitung: ein neues Feature ersetzt alle bisherigen
    #[default]
    Single,
    /// Mehrfachanzeige: Features werden angehängt
    Multi,
}

/// Verweis auf einen Stützpunkt innerhalb der Sammlung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRef {
    /// Index des Features
    pub feature: usize,
    /// Index des Stützpunkts innerhalb der Geometrie
    pub vertex: usize,
}

/// Geordnete Feature-Sammlung hinter dem editierbaren Vektor-Layer.
///
/// Es gibt keinen räumlichen Index: Ausdehnung und Treffer werden durch
/// Iteration über alle Features berechnet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
    mode: CollectionMode,
}

impl FeatureCollection {
    /// Erstellt eine leere Sammlung.
    pub fn new(mode: CollectionMode) -> Self {
        Self {
            features: Vec::new(),
            mode,
        }
    }

    /// Erstellt eine Sammlung aus vorhandenen Features.
    pub fn from_features(mode: CollectionMode, features: Vec<Feature>) -> Self {
        Self { features, mode }
    }

    /// Aktueller Modus.
    pub fn mode(&self) -> CollectionMode {
        self.mode
    }

    /// Setzt den Modus (bestehende Features bleiben erhalten).
    pub fn set_mode(&mut self, mode: CollectionMode) {
        self.mode = mode;
    }

    /// Anzahl der Features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// `true`, wenn keine Features vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Read-only Sicht auf alle Features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Iteriert über alle Features.
    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Feature per Index.
    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    /// Fügt ein gezeichnetes Feature hinzu.
    ///
    /// Im Einzelmodus wird die Sammlung vorher geleert, danach enthält sie
    /// genau dieses eine Feature.
    pub fn add_drawn(&mut self, feature: Feature) {
        if self.mode == CollectionMode::Single {
            self.features.clear();
        }
        self.features.push(feature);
    }

    /// Ersetzt den gesamten Inhalt (Import).
    pub fn replace_all(&mut self, features: Vec<Feature>) {
        self.features = features;
    }

    /// Vereinigte Ausdehnung aller Feature-Geometrien.
    ///
    /// `None` bei leerer Sammlung.
    pub fn extent(&self) -> Option<Extent> {
        let extent = self
            .features
            .iter()
            .fold(Extent::empty(), |mut acc, feature| {
                acc.extend(&feature.geometry.extent());
                acc
            });
        (!extent.is_empty()).then_some(extent)
    }

    /// Sucht ein Feature anhand seiner Kennung.
    pub fn find_by_id(&self, id: &str) -> Option<&Feature> {
        self.features
            .iter()
            .find(|f| f.identifier().as_deref() == Some(id))
    }

    /// Oberstes Feature an einer Position (zuletzt hinzugefügte liegen oben).
    pub fn hit_test(&self, pos: DVec2, tolerance: f64) -> Option<usize> {
        self.features
            .iter()
            .rposition(|f| f.geometry.hit_test(pos, tolerance))
    }

    /// Nächstgelegener Stützpunkt aller Features innerhalb der Toleranz.
    pub fn nearest_vertex(&self, pos: DVec2, tolerance: f64) -> Option<VertexRef> {
        self.features
            .iter()
            .enumerate()
            .filter_map(|(fi, f)| {
                f.geometry
                    .nearest_vertex(pos, tolerance)
                    .map(|(vi, d)| (VertexRef { feature: fi, vertex: vi }, d))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(vref, _)| vref)
    }

    /// Verschiebt einen Stützpunkt.
    pub fn move_vertex(&mut self, vref: VertexRef, pos: DVec2) -> bool {
        self.features
            .get_mut(vref.feature)
            .is_some_and(|f| f.geometry.move_vertex(vref.vertex, pos))
    }
}
