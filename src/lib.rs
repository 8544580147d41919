//! GTT Map Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod format;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditMode, EditorState, HostConfig, UiState,
    ViewState,
};
pub use core::{
    BasemapLayer, BasemapSet, CollectionMode, Coordinate, Extent, Feature, FeatureCollection,
    Geometry, GeometryType, MapView, Permalink,
};
pub use format::{read_features, write_feature, write_feature_collection};
pub use shared::{EditorOptions, Messages};
