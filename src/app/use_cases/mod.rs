//! Use-Cases der Application-Layer-Orchestrierung.

pub mod basemap;
pub mod camera;
pub mod drawing;
pub mod extent;
pub mod feature_store;
pub mod geolocation;
pub mod import;
pub mod initialize;
pub mod modify;
pub mod popup;
pub mod viewport;
