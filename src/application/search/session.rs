//! The search orchestrator of one repository view.
//!
//! A session owns the query text, the filter model, pagination and the last
//! accepted results. Every input change starts a search cycle tagged with a
//! fresh generation; a completion is applied only if it carries the current
//! generation, so a slow response can never overwrite a newer one. The
//! session itself performs no I/O: callers dispatch the returned
//! [`PendingSearch`] and feed the [`SearchCompletion`] back in.

use super::changes::FilterChange;
use crate::application::{
    dto::{ArticleSummary, SearchResultPage},
    error::{ApplicationError, ApplicationResult},
    ports::location::LocationWriter,
};
use crate::domain::{
    filter::FilterModel,
    search::{
        ActiveFilter, LookupTables, PaginationState, SearchLocation, SearchRequest,
        active_filter_count, project,
    },
};
use serde::Serialize;
use std::{sync::Arc, time::Duration};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_LOCATION_PATH: &str = "/repository";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub page_size: u32,
    pub request_timeout: Duration,
    pub location_path: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            location_path: DEFAULT_LOCATION_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching { generation: u64 },
    Accepted,
    /// `retry_page` is the page the failed cycle asked for; pagination itself
    /// is back on page 1 until a retry is accepted.
    Failed { message: String, retry_page: u32 },
}

/// Tri-state observed by the rendering layer, next to the last good result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum SearchStatus {
    Idle,
    Loading,
    Error(String),
}

/// A search cycle that has been started but not yet dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending search does nothing until it is dispatched"]
pub struct PendingSearch {
    generation: u64,
    request: SearchRequest,
}

impl PendingSearch {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &SearchRequest {
        &self.request
    }
}

/// The settled remote call of one cycle.
#[derive(Debug)]
pub struct SearchCompletion {
    generation: u64,
    page: u32,
    result: ApplicationResult<SearchResultPage>,
}

impl SearchCompletion {
    pub fn new(pending: &PendingSearch, result: ApplicationResult<SearchResultPage>) -> Self {
        Self {
            generation: pending.generation,
            page: pending.request.page,
            result,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Page the cycle requested.
    pub fn page(&self) -> u32 {
        self.page
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    Applied,
    Failed,
    Stale,
}

pub struct SearchSession {
    query_text: String,
    filters: FilterModel,
    pagination: PaginationState,
    results: Vec<ArticleSummary>,
    phase: SearchPhase,
    generation: u64,
    lookups: LookupTables,
    location: Arc<dyn LocationWriter>,
    location_path: String,
    /// Page decoded from the opening location, requested by the initial
    /// search only; pagination stays on page 1 until the server confirms it.
    seed_page: u32,
}

impl SearchSession {
    /// Seed a session from a decoded location. No search is started.
    pub fn new(
        seed: SearchLocation,
        lookups: LookupTables,
        location: Arc<dyn LocationWriter>,
        settings: &SessionSettings,
    ) -> Self {
        Self {
            query_text: seed.query_text,
            filters: seed.filters,
            pagination: PaginationState::new(settings.page_size),
            results: Vec::new(),
            phase: SearchPhase::Idle,
            generation: 0,
            lookups,
            location,
            location_path: settings.location_path.clone(),
            seed_page: seed.page.max(1),
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn filters(&self) -> &FilterModel {
        &self.filters
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn results(&self) -> &[ArticleSummary] {
        &self.results
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn lookups(&self) -> &LookupTables {
        &self.lookups
    }

    pub fn status(&self) -> SearchStatus {
        match &self.phase {
            SearchPhase::Idle | SearchPhase::Accepted => SearchStatus::Idle,
            SearchPhase::Searching { .. } => SearchStatus::Loading,
            SearchPhase::Failed { message, .. } => SearchStatus::Error(message.clone()),
        }
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        project(&self.filters, &self.lookups)
    }

    pub fn active_filter_count(&self) -> usize {
        active_filter_count(&self.filters)
    }

    /// Composite state as a location value.
    pub fn location(&self) -> SearchLocation {
        SearchLocation::new(
            self.query_text.clone(),
            self.filters.clone(),
            self.pagination.page(),
        )
    }

    pub fn href(&self) -> String {
        self.location().href(&self.location_path)
    }

    /// Search on open only when the location carries a query or a filter.
    pub fn initial_search(&mut self) -> Option<PendingSearch> {
        if self.query_text.trim().is_empty() && !self.filters.has_active_filters() {
            return None;
        }
        Some(self.begin_at(self.seed_page))
    }

    /// Typing in the search box. Nothing is searched until submit.
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    pub fn submit(&mut self) -> PendingSearch {
        self.pagination.reset_page();
        self.begin()
    }

    pub fn submit_query(&mut self, text: impl Into<String>) -> PendingSearch {
        self.set_query_text(text);
        self.submit()
    }

    pub fn change_filters(&mut self, change: FilterChange) -> PendingSearch {
        change.apply(&mut self.filters);
        self.pagination.reset_page();
        self.begin()
    }

    pub fn remove_filter(&mut self, entry: &ActiveFilter) -> PendingSearch {
        self.change_filters(FilterChange::Remove(entry.value.clone()))
    }

    pub fn clear_filters(&mut self) -> PendingSearch {
        self.change_filters(FilterChange::ClearAll)
    }

    /// `None` when the page is outside `1..=max(total_pages, 1)`.
    pub fn change_page(&mut self, page: u32) -> Option<PendingSearch> {
        if !self.pagination.set_page(page) {
            tracing::debug!(
                page,
                last_page = self.pagination.last_page(),
                "page change rejected"
            );
            return None;
        }
        Some(self.begin())
    }

    /// Re-run the current state after a failure, on the page that failed.
    pub fn retry(&mut self) -> PendingSearch {
        match self.phase {
            SearchPhase::Failed { retry_page, .. } => self.begin_at(retry_page),
            _ => self.begin(),
        }
    }

    pub fn complete(&mut self, completion: SearchCompletion) -> CompletionOutcome {
        let SearchCompletion {
            generation,
            page,
            result,
        } = completion;
        let in_flight = matches!(
            self.phase,
            SearchPhase::Searching { generation: current } if current == generation
        );
        if generation != self.generation || !in_flight {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale search response"
            );
            return CompletionOutcome::Stale;
        }

        match result {
            Ok(page) => {
                self.accept(page);
                CompletionOutcome::Applied
            }
            Err(err) => {
                self.fail(err, page);
                CompletionOutcome::Failed
            }
        }
    }

    fn begin(&mut self) -> PendingSearch {
        self.begin_at(self.pagination.page())
    }

    fn begin_at(&mut self, page: u32) -> PendingSearch {
        self.generation += 1;
        let generation = self.generation;
        self.phase = SearchPhase::Searching { generation };

        let request = SearchRequest::build(
            &self.query_text,
            &self.filters,
            page,
            self.pagination.page_size(),
        );
        tracing::debug!(generation, page = request.page, "search cycle started");

        PendingSearch {
            generation,
            request,
        }
    }

    fn accept(&mut self, page: SearchResultPage) {
        self.pagination
            .replace(page.total, page.page, page.page_size, page.total_pages);
        self.results = retain_languages(&self.filters, page.items);
        self.phase = SearchPhase::Accepted;
        tracing::info!(
            generation = self.generation,
            total = self.pagination.total(),
            page = self.pagination.page(),
            shown = self.results.len(),
            "search accepted"
        );

        // State is applied; only now may the location reflect it.
        let href = self.href();
        self.location.replace(&href);
    }

    fn fail(&mut self, err: ApplicationError, retry_page: u32) {
        tracing::warn!(generation = self.generation, error = %err, "search failed");
        self.results.clear();
        self.pagination.clear_totals();
        self.phase = SearchPhase::Failed {
            message: err.to_string(),
            retry_page,
        };
        if err.is_timeout() {
            // A response that still arrives for the timed-out cycle is stale.
            self.generation += 1;
        }
    }
}

fn retain_languages(filters: &FilterModel, items: Vec<ArticleSummary>) -> Vec<ArticleSummary> {
    let languages = filters.languages();
    if languages.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|article| languages.iter().any(|code| code.matches(&article.language)))
        .collect()
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
