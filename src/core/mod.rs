//! Core-Domänentypen: Geometrien, Features, Projektion, Kartenansicht.

pub mod basemap;
pub mod extent;
pub mod feature;
pub mod geolocation;
/// Geometrie-Modell für Vektor-Features
///
/// Punkte, Linien und Flächen (plus Multi-Varianten) mit optionalem Z-Wert,
/// inklusive Z-Auswertung, Stützpunkt-Bearbeitung und Trefferprüfung.
pub mod geometry;
pub mod map_view;
pub mod permalink;
pub mod projection;

pub use basemap::{BasemapLayer, BasemapSet};
pub use extent::{Coordinate, Extent};
pub use feature::{CollectionMode, Feature, FeatureCollection, FeatureId, VertexRef};
pub use geolocation::Geolocation;
pub use geometry::{Geometry, GeometryType};
pub use map_view::MapView;
pub use permalink::Permalink;
