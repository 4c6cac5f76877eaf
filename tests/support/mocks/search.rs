use async_trait::async_trait;
use search_sync::application::{
    ApplicationResult,
    dto::{Page, SearchResultPage},
    error::ApplicationError,
    ports::search::SearchClient,
};
use search_sync::domain::search::SearchRequest;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::oneshot;

/// Answers searches from a queue; an empty queue echoes an empty page.
#[derive(Default)]
pub struct ScriptedSearchClient {
    responses: Mutex<VecDeque<ApplicationResult<SearchResultPage>>>,
    requests: Mutex<Vec<SearchRequest>>,
    suggestions: Mutex<Vec<String>>,
    suggestion_calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedSearchClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: ApplicationResult<SearchResultPage>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_suggestions(self, suggestions: &[&str]) -> Self {
        *self.suggestions.lock().unwrap() = suggestions.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn suggestion_calls(&self) -> Vec<(String, u32)> {
        self.suggestion_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchClient for ScriptedSearchClient {
    async fn search(&self, request: &SearchRequest) -> ApplicationResult<SearchResultPage> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(Page::empty(request.page, request.limit)))
    }

    async fn suggestions(&self, term: &str, limit: u32) -> ApplicationResult<Vec<String>> {
        self.suggestion_calls
            .lock()
            .unwrap()
            .push((term.to_string(), limit));
        let all = self.suggestions.lock().unwrap().clone();
        Ok(all.into_iter().take(limit as usize).collect())
    }
}

/// Holds each search open until the test releases it, keyed by query text.
/// Lets a test settle overlapping requests in any order.
#[derive(Default)]
pub struct GatedSearchClient {
    gates: Mutex<HashMap<String, oneshot::Receiver<ApplicationResult<SearchResultPage>>>>,
}

impl GatedSearchClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self, query: &str) -> oneshot::Sender<ApplicationResult<SearchResultPage>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(query.to_string(), rx);
        tx
    }
}

#[async_trait]
impl SearchClient for GatedSearchClient {
    async fn search(&self, request: &SearchRequest) -> ApplicationResult<SearchResultPage> {
        let key = request.search.clone().unwrap_or_default();
        let gate = self.gates.lock().unwrap().remove(&key);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApplicationError::transport("gate dropped"))),
            None => Ok(Page::empty(request.page, request.limit)),
        }
    }

    async fn suggestions(&self, _term: &str, _limit: u32) -> ApplicationResult<Vec<String>> {
        Ok(Vec::new())
    }
}
