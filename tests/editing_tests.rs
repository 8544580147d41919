use approx::assert_relative_eq;
use glam::DVec2;
use gtt_map_editor::core::projection::from_lon_lat;
use gtt_map_editor::{
    AppController, AppIntent, AppState, CollectionMode, EditMode, GeometryType, HostConfig,
};
use serde_json::Value;

fn load_host(json: &str) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let host = HostConfig::from_json(json).expect("Host-JSON sollte gültig sein");
    controller
        .handle_intent(
            &mut state,
            AppIntent::HostPageLoaded {
                host: Box::new(host),
            },
        )
        .expect("HostPageLoaded sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn click(controller: &mut AppController, state: &mut AppState, lon: f64, lat: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::MapClicked {
                map: 0,
                world_pos: from_lon_lat(lon, lat),
            },
        )
        .expect("MapClicked sollte funktionieren");
}

fn form_json(state: &AppState) -> Value {
    serde_json::from_str(&state.form.value).expect("Formularfeld sollte JSON enthalten")
}

const LINE_WITH_PARTIAL_Z: &str = r#"{
    "geom": {"type": "Feature", "geometry": {"type": "LineString",
        "coordinates": [[0, 0, 5], [1, 1], [2, 2, 15]]}, "properties": {}},
    "edit": "LineString Polygon"
}"#;

#[test]
fn test_initial_load_writes_form_without_z_backfill() {
    let (_, state) = load_host(LINE_WITH_PARTIAL_Z);

    let json = form_json(&state);
    let coords = json["geometry"]["coordinates"]
        .as_array()
        .expect("Koordinaten erwartet");
    assert_eq!(coords[0].as_array().map(Vec::len), Some(3));
    assert_eq!(coords[1].as_array().map(Vec::len), Some(2));
    assert_eq!(coords[2].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_matching_tool_is_preactivated_for_existing_feature() {
    let (_, state) = load_host(LINE_WITH_PARTIAL_Z);

    assert!(state.editor.enabled);
    assert_eq!(
        state.editor.allowed_types,
        vec![GeometryType::LineString, GeometryType::Polygon]
    );
    assert_eq!(state.editor.active_tool, Some(GeometryType::LineString));
    assert_eq!(state.editor.mode, EditMode::Drawing(GeometryType::LineString));
    assert_eq!(state.features.mode(), CollectionMode::Single);
}

#[test]
fn test_drawing_replaces_feature_and_applies_representative_z() {
    let (mut controller, mut state) = load_host(LINE_WITH_PARTIAL_Z);
    assert_relative_eq!(state.editor.representative_z, 10.0);

    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 11.0, 11.0);
    click(&mut controller, &mut state, 12.0, 10.0);
    controller
        .handle_intent(&mut state, AppIntent::DrawFinishRequested)
        .expect("DrawFinishRequested sollte funktionieren");

    assert_eq!(state.features.len(), 1);
    assert_eq!(state.editor.mode, EditMode::Viewing);
    assert_eq!(state.editor.active_tool, Some(GeometryType::LineString));

    let json = form_json(&state);
    assert_eq!(json["geometry"]["type"], "LineString");
    let coords = json["geometry"]["coordinates"]
        .as_array()
        .expect("Koordinaten erwartet");
    assert_eq!(coords.len(), 3);
    for coord in coords {
        assert_relative_eq!(coord[2].as_f64().unwrap_or(f64::NAN), 10.0);
    }
    assert_relative_eq!(coords[0][0].as_f64().unwrap_or(f64::NAN), 10.0, epsilon = 1e-6);
    assert_relative_eq!(coords[0][1].as_f64().unwrap_or(f64::NAN), 10.0, epsilon = 1e-6);
}

#[test]
fn test_next_click_after_finish_starts_new_sketch() {
    let (mut controller, mut state) = load_host(LINE_WITH_PARTIAL_Z);

    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 11.0, 11.0);
    controller
        .handle_intent(&mut state, AppIntent::DrawFinishRequested)
        .expect("DrawFinishRequested sollte funktionieren");

    click(&mut controller, &mut state, 20.0, 20.0);

    assert_eq!(state.editor.mode, EditMode::Drawing(GeometryType::LineString));
    assert_eq!(state.editor.sketch.len(), 1);
}

#[test]
fn test_finish_with_too_few_vertices_keeps_sketch_open() {
    let (mut controller, mut state) = load_host(LINE_WITH_PARTIAL_Z);
    let revision = state.form.revision;

    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawToolToggled {
                geometry_type: GeometryType::Polygon,
            },
        )
        .expect("DrawToolToggled sollte funktionieren");
    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 11.0, 11.0);
    controller
        .handle_intent(&mut state, AppIntent::DrawFinishRequested)
        .expect("DrawFinishRequested sollte funktionieren");

    assert_eq!(state.editor.mode, EditMode::Drawing(GeometryType::Polygon));
    assert_eq!(state.editor.sketch.len(), 2);
    assert_eq!(state.form.revision, revision);
}

#[test]
fn test_abort_discards_sketch_but_keeps_tool() {
    let (mut controller, mut state) = load_host(LINE_WITH_PARTIAL_Z);

    click(&mut controller, &mut state, 10.0, 10.0);
    controller
        .handle_intent(&mut state, AppIntent::DrawAbortRequested)
        .expect("DrawAbortRequested sollte funktionieren");

    assert!(state.editor.sketch.is_empty());
    assert_eq!(state.editor.mode, EditMode::Viewing);
    assert_eq!(state.editor.active_tool, Some(GeometryType::LineString));
    assert_eq!(state.features.len(), 1);
}

#[test]
fn test_toggles_are_mutually_exclusive_and_deactivate_on_second_press() {
    let (mut controller, mut state) = load_host(LINE_WITH_PARTIAL_Z);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawToolToggled {
                geometry_type: GeometryType::Polygon,
            },
        )
        .expect("DrawToolToggled sollte funktionieren");
    assert_eq!(state.editor.active_tool, Some(GeometryType::Polygon));

    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawToolToggled {
                geometry_type: GeometryType::Polygon,
            },
        )
        .expect("DrawToolToggled sollte funktionieren");
    assert_eq!(state.editor.active_tool, None);
    assert_eq!(state.editor.mode, EditMode::Viewing);

    // Point ist nicht erlaubt
    controller
        .handle_intent(
            &mut state,
            AppIntent::DrawToolToggled {
                geometry_type: GeometryType::Point,
            },
        )
        .expect("DrawToolToggled sollte robust sein");
    assert_eq!(state.editor.active_tool, None);
}

#[test]
fn test_multi_mode_appends_drawn_points() {
    let (mut controller, mut state) = load_host(
        r#"{
            "geom": {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 1, 7]}, "properties": {}},
            "edit": "Point",
            "collection_mode": "multi"
        }"#,
    );
    assert_eq!(state.features.mode(), CollectionMode::Multi);

    click(&mut controller, &mut state, 2.0, 2.0);
    click(&mut controller, &mut state, 3.0, 3.0);

    assert_eq!(state.features.len(), 3);
    let json = form_json(&state);
    assert_eq!(json["type"], "FeatureCollection");
    let features = json["features"].as_array().expect("Features erwartet");
    assert_eq!(features.len(), 3);
    assert_relative_eq!(
        features[2]["geometry"]["coordinates"][2]
            .as_f64()
            .unwrap_or(f64::NAN),
        7.0
    );
}

#[test]
fn test_vertex_drag_moves_vertex_and_serializes_with_z() {
    let (mut controller, mut state) = load_host(
        r#"{
            "geom": {"type": "Feature", "geometry": {"type": "LineString",
                "coordinates": [[10, 10], [11, 11]]}, "properties": {"subject": "Weg"}},
            "edit": "LineString"
        }"#,
    );
    let revision = state.form.revision;
    let start = from_lon_lat(10.0, 10.0);
    let target = from_lon_lat(10.5, 10.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::VertexDragStarted {
                map: 0,
                world_pos: start,
            },
        )
        .expect("VertexDragStarted sollte funktionieren");
    assert_eq!(state.editor.mode, EditMode::Modifying);

    controller
        .handle_intent(&mut state, AppIntent::VertexDragUpdated { world_pos: target })
        .expect("VertexDragUpdated sollte funktionieren");
    assert_eq!(state.form.revision, revision);

    controller
        .handle_intent(&mut state, AppIntent::VertexDragEnded)
        .expect("VertexDragEnded sollte funktionieren");

    assert_eq!(state.editor.mode, EditMode::Viewing);
    assert_eq!(state.form.revision, revision + 1);

    let json = form_json(&state);
    let first = &json["geometry"]["coordinates"][0];
    assert_relative_eq!(first[0].as_f64().unwrap_or(f64::NAN), 10.5, epsilon = 1e-6);
    assert_relative_eq!(first[2].as_f64().unwrap_or(f64::NAN), 0.0);
    assert_eq!(json["properties"]["subject"], "Weg");
}

#[test]
fn test_drag_without_vertex_hit_keeps_mode() {
    let (mut controller, mut state) = load_host(
        r#"{
            "geom": {"type": "Feature", "geometry": {"type": "Point", "coordinates": [10, 10]}, "properties": {}},
            "edit": "LineString"
        }"#,
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::VertexDragStarted {
                map: 0,
                world_pos: from_lon_lat(50.0, 50.0),
            },
        )
        .expect("VertexDragStarted sollte robust sein");

    assert_eq!(state.editor.mode, EditMode::Viewing);
    assert!(state.editor.drag.is_none());
}

#[test]
fn test_import_invalid_text_keeps_dialog_with_message() {
    let (mut controller, mut state) = load_host(r#"{"edit": "Point"}"#);

    controller
        .handle_intent(&mut state, AppIntent::ImportDialogOpenRequested)
        .expect("ImportDialogOpenRequested sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportTextChanged {
                text: "{not geojson".into(),
            },
        )
        .expect("ImportTextChanged sollte funktionieren");
    controller
        .handle_intent(&mut state, AppIntent::ImportConfirmed)
        .expect("Ungültiger Import darf keinen Fehler liefern");

    assert!(state.ui.import.visible);
    assert_eq!(state.ui.import.error.as_deref(), Some("Invalid file"));
    assert!(state.features.is_empty());
}

#[test]
fn test_import_replaces_features_and_fits_view() {
    let (mut controller, mut state) = load_host(
        r#"{
            "geom": {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0, 0]}, "properties": {}},
            "edit": "Point",
            "upload": true
        }"#,
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::UploadedFileRead {
                mime: "application/geo+json".into(),
                contents: r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [135, 35]}, "properties": {"id": 9}}"#.into(),
            },
        )
        .expect("UploadedFileRead sollte funktionieren");
    assert!(state.ui.import.visible);

    controller
        .handle_intent(&mut state, AppIntent::ImportConfirmed)
        .expect("ImportConfirmed sollte funktionieren");

    assert!(!state.ui.import.visible);
    assert_eq!(state.features.len(), 1);
    assert_eq!(
        state.features.get(0).and_then(|f| f.identifier()).as_deref(),
        Some("9")
    );

    let expected = from_lon_lat(135.0, 35.0);
    let center = state.view.maps[0].view.center;
    assert_relative_eq!(center.x, expected.x, epsilon = 1e-6);
    assert_relative_eq!(center.y, expected.y, epsilon = 1e-6);

    let json = form_json(&state);
    assert_relative_eq!(
        json["geometry"]["coordinates"][0].as_f64().unwrap_or(f64::NAN),
        135.0,
        epsilon = 1e-6
    );
}

fn import_text(controller: &mut AppController, state: &mut AppState, text: &str) {
    controller
        .handle_intent(state, AppIntent::ImportDialogOpenRequested)
        .expect("ImportDialogOpenRequested sollte funktionieren");
    controller
        .handle_intent(state, AppIntent::ImportTextChanged { text: text.into() })
        .expect("ImportTextChanged sollte funktionieren");
    controller
        .handle_intent(state, AppIntent::ImportConfirmed)
        .expect("ImportConfirmed darf keinen Fehler liefern");
}

#[test]
fn test_drawing_after_import_uses_z_of_imported_feature() {
    let (mut controller, mut state) = load_host(
        r#"{
            "geom": {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 1, 5]}, "properties": {}},
            "edit": "Point"
        }"#,
    );
    assert_eq!(state.editor.mode, EditMode::Drawing(GeometryType::Point));
    assert_relative_eq!(state.editor.representative_z, 5.0);

    import_text(
        &mut controller,
        &mut state,
        r#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [3, 3, 100]}, "properties": {}}"#,
    );
    assert!(!state.ui.import.visible);

    click(&mut controller, &mut state, 2.0, 2.0);

    let json = form_json(&state);
    assert_relative_eq!(
        json["geometry"]["coordinates"][2].as_f64().unwrap_or(f64::NAN),
        100.0
    );
}

#[test]
fn test_empty_import_keeps_features_and_form() {
    let (mut controller, mut state) = load_host(
        r#"{
            "geom": {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}, "properties": {}},
            "edit": "Point"
        }"#,
    );
    let form_before = state.form.value.clone();

    for text in ["", "   ", "null", r#"{"type": "FeatureCollection", "features": []}"#] {
        import_text(&mut controller, &mut state, text);

        assert!(state.ui.import.visible, "Dialog bleibt offen für {text:?}");
        assert_eq!(state.ui.import.error.as_deref(), Some("Invalid file"));
        assert_eq!(state.features.len(), 1);
        assert_eq!(state.form.value, form_before);

        controller
            .handle_intent(&mut state, AppIntent::ImportCancelled)
            .expect("ImportCancelled sollte funktionieren");
    }
}

#[test]
fn test_upload_with_wrong_mime_is_rejected() {
    let (mut controller, mut state) = load_host(r#"{"edit": "Point", "upload": "1"}"#);

    controller
        .handle_intent(&mut state, AppIntent::ImportDialogOpenRequested)
        .expect("ImportDialogOpenRequested sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportTextChanged {
                text: "bisher".into(),
            },
        )
        .expect("ImportTextChanged sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::UploadedFileRead {
                mime: "image/png".into(),
                contents: "PNG".into(),
            },
        )
        .expect("UploadedFileRead sollte robust sein");

    assert_eq!(state.ui.import.text, "bisher");
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_upload_request_requires_upload_flag() {
    let (mut controller, mut state) = load_host(r#"{"edit": "Point"}"#);

    controller
        .handle_intent(&mut state, AppIntent::UploadFileRequested)
        .expect("UploadFileRequested sollte robust sein");
    assert!(!state.ui.show_upload_dialog);

    let (mut controller, mut state) = load_host(r#"{"edit": "Point", "upload": true}"#);
    controller
        .handle_intent(&mut state, AppIntent::UploadFileRequested)
        .expect("UploadFileRequested sollte funktionieren");
    assert!(state.ui.show_upload_dialog);
}

#[test]
fn test_hover_tracks_feature_under_pointer() {
    let (mut controller, mut state) = load_host(
        r#"{"geom": {"type": "Feature", "geometry": {"type": "Point", "coordinates": [10, 10]}, "properties": {}}}"#,
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                map: 0,
                world_pos: from_lon_lat(10.0, 10.0),
            },
        )
        .expect("PointerMoved sollte funktionieren");
    assert!(state.overlays.pointer_cursor());

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                map: 0,
                world_pos: from_lon_lat(10.0, 10.0) + DVec2::new(1.0e6, 0.0),
            },
        )
        .expect("PointerMoved sollte funktionieren");
    assert!(!state.overlays.pointer_cursor());
}
