//! Integration tests for model discovery and the public file tree

use std::fs;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use verkstad::handler::AppState;
use verkstad::items::ItemStore;

struct TestApp {
    app: Router,
    public: TempDir,
}

fn test_app() -> TestApp {
    let public = TempDir::new().expect("Failed to create temp dir");
    let state = AppState {
        store: Arc::new(ItemStore::new()),
        public_dir: public.path().to_path_buf(),
    };
    TestApp {
        app: verkstad::router(state),
        public,
    }
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get(app, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn empty_index_creates_the_models_layout() {
    let fixture = test_app();

    let (status, body) = get_json(&fixture.app, "/api/models").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let models_dir = fixture.public.path().join("models");
    assert!(models_dir.is_dir());
    assert!(models_dir.join("meshes").is_dir());
}

#[tokio::test]
async fn index_lists_urdf_files_with_derived_names() {
    let fixture = test_app();
    let models_dir = fixture.public.path().join("models");
    fs::create_dir_all(&models_dir).unwrap();
    fs::write(models_dir.join("ur5_robot.urdf"), "<robot name=\"ur5\"/>").unwrap();
    fs::write(models_dir.join("readme.md"), "not a model").unwrap();

    let (status, body) = get_json(&fixture.app, "/api/models").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"id": "ur5_robot", "name": "Ur5 Robot", "urdf": "ur5_robot.urdf"}])
    );
}

#[tokio::test]
async fn stl_query_adds_mesh_entries_without_ids() {
    let fixture = test_app();
    let models_dir = fixture.public.path().join("models");
    fs::create_dir_all(&models_dir).unwrap();
    fs::write(models_dir.join("arm.urdf"), "<robot name=\"arm\"/>").unwrap();
    fs::write(models_dir.join("base_plate.stl"), "solid base").unwrap();

    let (_, without) = get_json(&fixture.app, "/api/models").await;
    assert_eq!(without.as_array().unwrap().len(), 1);

    let (status, with) = get_json(&fixture.app, "/api/models?stl=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        with,
        json!([
            {"id": "arm", "name": "Arm", "urdf": "arm.urdf"},
            {"name": "Base Plate", "urdf": "base_plate.stl"}
        ])
    );
}

#[tokio::test]
async fn index_responses_disable_caching() {
    let fixture = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/models")
        .body(Body::empty())
        .unwrap();
    let response = fixture.app.clone().oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .map(|v| v.to_str().unwrap()),
        Some("no-store, no-cache, must-revalidate")
    );
    assert_eq!(
        response
            .headers()
            .get(header::PRAGMA)
            .map(|v| v.to_str().unwrap()),
        Some("no-cache")
    );
}

#[tokio::test]
async fn public_tree_serves_model_files_from_disk() {
    let fixture = test_app();
    let models_dir = fixture.public.path().join("models");
    fs::create_dir_all(&models_dir).unwrap();
    fs::write(models_dir.join("arm.urdf"), "<robot name=\"arm\"/>").unwrap();

    let (status, bytes) = get(&fixture.app, "/public/models/arm.urdf").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"<robot name=\"arm\"/>");
}

#[tokio::test]
async fn viewer_pages_are_embedded_in_the_binary() {
    let fixture = test_app();

    let (status, bytes) = get(&fixture.app, "/urdf_viewer.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(bytes).unwrap().contains("/api/models"));

    let (status, _) = get(&fixture.app, "/index.html").await;
    assert_eq!(status, StatusCode::OK);
}
