use async_trait::async_trait;
use search_sync::application::{
    ApplicationResult,
    dto::{CategoryDto, FeedDto},
    error::ApplicationError,
    ports::search::LookupClient,
};

#[derive(Default, Clone)]
pub struct StaticLookups {
    pub categories: Vec<CategoryDto>,
    pub feeds: Vec<FeedDto>,
}

#[async_trait]
impl LookupClient for StaticLookups {
    async fn categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        Ok(self.categories.clone())
    }

    async fn feeds(&self) -> ApplicationResult<Vec<FeedDto>> {
        Ok(self.feeds.clone())
    }
}

pub struct FailingLookups;

#[async_trait]
impl LookupClient for FailingLookups {
    async fn categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        Err(ApplicationError::upstream(503, "categories unavailable"))
    }

    async fn feeds(&self) -> ApplicationResult<Vec<FeedDto>> {
        Err(ApplicationError::transport("connection refused"))
    }
}
