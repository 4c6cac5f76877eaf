// src/presentation/http/controllers/search.rs
use crate::application::{dto::SearchViewDto, search::service::SUGGESTION_DEFAULT_LIMIT};
use crate::infrastructure::location::MemoryLocation;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Query, RawQuery},
};
use serde::Deserialize;
use std::sync::Arc;

fn default_suggestion_limit() -> u32 {
    SUGGESTION_DEFAULT_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_suggestion_limit")]
    pub limit: u32,
}

/// Opens a session from the request's query string. A failed search is part
/// of the view (`status.state == "error"`), not an HTTP error.
pub async fn repository_view(
    Extension(state): Extension<HttpState>,
    RawQuery(query): RawQuery,
) -> Json<SearchViewDto> {
    let location = Arc::new(MemoryLocation::new());
    let session = state
        .services
        .open(query.as_deref().unwrap_or_default(), location)
        .await;
    Json(SearchViewDto::from_session(&session))
}

pub async fn suggestions(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SuggestionParams>,
) -> HttpResult<Json<Vec<String>>> {
    let suggestions = state
        .services
        .suggestions(&params.q, params.limit)
        .await
        .into_http()?;
    Ok(Json(suggestions))
}
