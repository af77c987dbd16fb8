#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, Response};
use devreg::config::ConfigV1;
use devreg::models::Device;
use devreg::routes::{create_metrics_router, create_router};
use devreg::startup::build_state;
use tower::ServiceExt;

pub struct TestApp {
    pub devices: Router,
    pub metrics: Router,
}

pub async fn build_app(config: ConfigV1) -> TestApp {
    let state = build_state(Arc::new(config))
        .await
        .expect("failed to build state");

    TestApp {
        devices: create_router(state.clone()),
        metrics: create_metrics_router(state),
    }
}

pub async fn default_app() -> TestApp {
    build_app(ConfigV1::default()).await
}

pub fn request(method: Method, path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("request should succeed")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is not UTF-8")
}

pub async fn list_devices(app: &TestApp) -> Vec<Device> {
    let response = send(&app.devices, request(Method::GET, "/devices", "")).await;
    let body = body_string(response).await;
    serde_json::from_str(&body).expect("device list should be JSON")
}

pub async fn scrape(app: &TestApp) -> String {
    let response = send(&app.metrics, request(Method::GET, "/metrics", "")).await;
    body_string(response).await
}
