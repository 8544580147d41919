//! Übersetzbare UI-Texte.

use serde::{Deserialize, Serialize};

/// Texte, die der Editor anzeigt. Über `gtt_map_editor.toml` überschreibbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub no_basemap: String,
    pub invalid_file: String,
    pub unsupported_file_type: String,
    pub import_title: String,
    pub import_hint: String,
    pub import_confirm: String,
    pub cancel: String,
    pub upload: String,
    pub zoom_to_extent: String,
    pub geolocation: String,
    pub geolocation_unavailable: String,
    pub edit_link: String,
    pub draw_point: String,
    pub draw_line: String,
    pub draw_polygon: String,
    pub finish_drawing: String,
    pub toggle_panel: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_basemap: "There is no layer configured for this map.".into(),
            invalid_file: "Invalid file".into(),
            unsupported_file_type: "Unsupported file type".into(),
            import_title: "Import GeoJSON".into(),
            import_hint: "Paste GeoJSON or upload a file".into(),
            import_confirm: "Import".into(),
            cancel: "Cancel".into(),
            upload: "Upload".into(),
            zoom_to_extent: "Zoom to extent".into(),
            geolocation: "Geolocation".into(),
            geolocation_unavailable: "Geolocation unavailable".into(),
            edit_link: "Edit".into(),
            draw_point: "Point".into(),
            draw_line: "Line".into(),
            draw_polygon: "Polygon".into(),
            finish_drawing: "Finish".into(),
            toggle_panel: "Map".into(),
        }
    }
}
