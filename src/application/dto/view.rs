use super::ArticleSummary;
use crate::application::search::{SearchSession, SearchStatus};
use crate::domain::{
    filter::{FilterField, FilterModel, FilterValue},
    search::{ActiveFilter, PaginationState},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveFilterDto {
    pub key: FilterField,
    pub label: String,
    pub value: Value,
}

impl From<ActiveFilter> for ActiveFilterDto {
    fn from(entry: ActiveFilter) -> Self {
        Self {
            key: entry.key,
            label: entry.label,
            value: filter_value_json(&entry.value),
        }
    }
}

fn filter_value_json(value: &FilterValue) -> Value {
    match value {
        FilterValue::SourceType(source) => json!(source.as_str()),
        FilterValue::Feed(id) => json!(i64::from(*id)),
        FilterValue::Category(id) => json!(i64::from(*id)),
        FilterValue::Language(code) => json!(code.as_str()),
        FilterValue::DateFrom(date) | FilterValue::DateTo(date) => {
            json!(date.format("%Y-%m-%d").to_string())
        }
        FilterValue::Author(author) => json!(author),
        FilterValue::HasPdf | FilterValue::Highlighted => json!(true),
    }
}

/// Snapshot of a session as rendered by the repository view.
#[derive(Debug, Clone, Serialize)]
pub struct SearchViewDto {
    pub query: String,
    pub filters: FilterModel,
    pub status: SearchStatus,
    pub results: Vec<ArticleSummary>,
    pub pagination: PaginationState,
    pub active_filters: Vec<ActiveFilterDto>,
    pub active_filter_count: usize,
    /// `date_from` is after `date_to`. A hint only; the search still runs.
    pub inverted_date_range: bool,
    pub href: String,
}

impl SearchViewDto {
    pub fn from_session(session: &SearchSession) -> Self {
        Self {
            query: session.query_text().to_string(),
            filters: session.filters().clone(),
            status: session.status(),
            results: session.results().to_vec(),
            pagination: *session.pagination(),
            active_filters: session
                .active_filters()
                .into_iter()
                .map(ActiveFilterDto::from)
                .collect(),
            active_filter_count: session.active_filter_count(),
            inverted_date_range: session.filters().has_inverted_date_range(),
            href: session.href(),
        }
    }
}
