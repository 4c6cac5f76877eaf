use super::error::{ensure_success, map_reqwest};
use crate::application::{
    dto::{CategoryDto, CategoryListResponse, FeedDto, FeedListResponse, SearchResultPage},
    error::{ApplicationError, ApplicationResult},
    ports::search::{LookupClient, SearchClient},
};
use crate::domain::search::SearchRequest;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// JSON client of the article backend. Implements both the search and the
/// lookup ports.
#[derive(Clone)]
pub struct HttpBackendClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpBackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApplicationResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|err| {
                ApplicationError::infrastructure(format!("failed to build http client: {err}"))
            })?;

        Ok(Self::with_client(client, base_url, timeout))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str, query: &str) -> String {
        let path = path.trim_start_matches('/');
        if query.is_empty() {
            format!("{}/{path}", self.base_url)
        } else {
            format!("{}/{path}?{query}", self.base_url)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApplicationResult<T> {
        tracing::debug!(url, "backend request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| map_reqwest(err, self.timeout))?;
        let response = ensure_success(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApplicationError::decode(err.to_string()))
    }
}

#[async_trait]
impl SearchClient for HttpBackendClient {
    async fn search(&self, request: &SearchRequest) -> ApplicationResult<SearchResultPage> {
        let query = request
            .to_query_string()
            .map_err(|err| ApplicationError::validation(format!("unencodable search request: {err}")))?;
        self.get_json(&self.endpoint("articles", &query)).await
    }

    async fn suggestions(&self, term: &str, limit: u32) -> ApplicationResult<Vec<String>> {
        let limit = limit.to_string();
        let query = serde_urlencoded::to_string([("q", term), ("limit", limit.as_str())])
            .map_err(|err| ApplicationError::validation(err.to_string()))?;
        self.get_json(&self.endpoint("search/suggestions", &query)).await
    }
}

#[async_trait]
impl LookupClient for HttpBackendClient {
    async fn categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let body: CategoryListResponse = self.get_json(&self.endpoint("categories", "")).await?;
        Ok(body.categories)
    }

    async fn feeds(&self) -> ApplicationResult<Vec<FeedDto>> {
        let body: FeedListResponse = self.get_json(&self.endpoint("feeds", "")).await?;
        tracing::debug!(count = body.feeds.len(), total = body.total, "feeds loaded");
        Ok(body.feeds)
    }
}
