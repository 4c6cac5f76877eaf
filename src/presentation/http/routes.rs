// src/presentation/http/routes.rs
use crate::presentation::http::controllers::search;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let view_path = state.repository_path.clone();
    let suggestions_path = format!("{}/suggestions", view_path.trim_end_matches('/'));

    Router::new()
        .route("/health", get(health))
        .route(&view_path, get(search::repository_view))
        .route(&suggestions_path, get(search::suggestions))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "ignoring malformed CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
