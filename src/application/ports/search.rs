// src/application/ports/search.rs
use crate::application::{
    ApplicationResult,
    dto::{CategoryDto, FeedDto, SearchResultPage},
};
use crate::domain::search::SearchRequest;
use async_trait::async_trait;

/// Remote article search endpoint.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> ApplicationResult<SearchResultPage>;

    /// Query completions for the search box. Terms shorter than two
    /// characters yield no suggestions.
    async fn suggestions(&self, term: &str, limit: u32) -> ApplicationResult<Vec<String>>;
}

/// Read-only category and feed listings used to label chips.
#[async_trait]
pub trait LookupClient: Send + Sync {
    async fn categories(&self) -> ApplicationResult<Vec<CategoryDto>>;
    async fn feeds(&self) -> ApplicationResult<Vec<FeedDto>>;
}
