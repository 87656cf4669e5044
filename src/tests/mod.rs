
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;

use crate::AppState;
use crate::config::Config;
use crate::routes;
use crate::service::InvitationService;
use crate::store::memory::MemoryInvitationStore;

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        host: "127.0.0.1".into(),
        port: 0,
        base_url: "http://localhost:3000".into(),
        rsvp_transition_guard: false,
    }
}

pub fn test_app() -> Router {
    test_app_with_config(test_config())
}

pub fn test_app_with_config(config: Config) -> Router {
    let store = Arc::new(MemoryInvitationStore::new());
    let state = AppState {
        service: InvitationService::new(store, &config),
    };
    routes::api_router().with_state(state)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn response_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The in-memory store timestamps with `Utc::now()`; spacing writes out keeps
/// ordering assertions deterministic on coarse clocks.
pub async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
}
