use crate::domain::filter::{CategoryId, FeedId, FilterModel, SortBy, SortOrder, SourceType};
use chrono::NaiveDate;
use serde::Serialize;

/// Parameters of one call to the remote article listing.
///
/// The backend filters on a single category and a single feed, so only the
/// first selected value (insertion order) is forwarded. Languages are not a
/// backend parameter at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_category: Option<SourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_id: Option<FeedId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_pdf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<bool>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub page: u32,
    #[serde(rename = "page_size")]
    pub limit: u32,
}

impl SearchRequest {
    pub fn build(query_text: &str, filters: &FilterModel, page: u32, limit: u32) -> Self {
        let search = if query_text.trim().is_empty() {
            None
        } else {
            Some(query_text.to_string())
        };

        Self {
            search,
            category_id: filters.category_ids().first().copied(),
            source_category: filters.source_category(),
            feed_id: filters.feed_ids().first().copied(),
            date_from: filters.date_from(),
            date_to: filters.date_to(),
            author: filters.author().map(str::to_string),
            has_pdf: filters.has_pdf().then_some(true),
            highlighted: filters.highlighted().then_some(true),
            sort_by: filters.sort_by(),
            sort_order: filters.sort_order(),
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Backend query string for `GET /articles`.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}
