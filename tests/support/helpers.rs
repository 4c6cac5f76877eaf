// tests/support/helpers.rs
use super::builders::{category, feed};
use super::mocks::{ScriptedSearchClient, StaticLookups};
use axum::body::{self, Body};
use axum::response::Response;
use search_sync::application::{
    ports::{LookupClientPort, SearchClientPort},
    search::{SearchPageService, SessionSettings},
};
use search_sync::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub fn sample_lookups() -> StaticLookups {
    StaticLookups {
        categories: vec![category(3, "Análise do Comportamento"), category(5, "Autismo")],
        feeds: vec![feed(7, "JABA")],
    }
}

pub fn build_service(
    client: Arc<SearchClientPort>,
    lookups: Arc<LookupClientPort>,
) -> SearchPageService {
    SearchPageService::new(client, lookups, SessionSettings::default())
}

pub fn make_test_router(client: Arc<ScriptedSearchClient>) -> axum::Router {
    let services = Arc::new(build_service(client, Arc::new(sample_lookups())));
    let state = HttpState {
        services,
        repository_path: "/repository".into(),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

pub fn get(uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
