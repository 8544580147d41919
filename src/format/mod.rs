//! GeoJSON Import/Export an der Host-Grenze.
//!
//! Eingehende Daten sind geographisch (EPSG:4326) und werden beim Lesen nach
//! Web-Mercator projiziert; beim Schreiben wird zurückgerechnet.

pub mod reader;
pub mod writer;

pub use reader::{read_feature, read_features, read_features_value};
pub use writer::{write_feature, write_feature_collection};
