use super::{
    dispatcher::SearchDispatcher,
    session::{CompletionOutcome, PendingSearch, SearchSession, SessionSettings},
};
use crate::application::{
    dto::lookup_tables,
    error::{ApplicationError, ApplicationResult},
    ports::{LocationWriterPort, LookupClientPort, SearchClientPort},
};
use crate::domain::search::{LookupTables, SearchLocation};
use std::sync::Arc;

pub const SUGGESTION_MIN_CHARS: usize = 2;
pub const SUGGESTION_MAX_CHARS: usize = 100;
pub const SUGGESTION_DEFAULT_LIMIT: u32 = 10;
pub const SUGGESTION_MAX_LIMIT: u32 = 20;

/// Wires sessions to the backend ports.
pub struct SearchPageService {
    dispatcher: SearchDispatcher,
    client: Arc<SearchClientPort>,
    lookups: Arc<LookupClientPort>,
    settings: SessionSettings,
}

impl SearchPageService {
    pub fn new(
        client: Arc<SearchClientPort>,
        lookups: Arc<LookupClientPort>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            dispatcher: SearchDispatcher::new(Arc::clone(&client), settings.request_timeout),
            client,
            lookups,
            settings,
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn dispatcher(&self) -> &SearchDispatcher {
        &self.dispatcher
    }

    /// Categories and feeds are fetched concurrently. A failing lookup only
    /// costs chip labels, so it degrades to an empty table.
    pub async fn load_lookups(&self) -> LookupTables {
        let (categories, feeds) = tokio::join!(self.lookups.categories(), self.lookups.feeds());

        let categories = categories.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "category lookup failed");
            Vec::new()
        });
        let feeds = feeds.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "feed lookup failed");
            Vec::new()
        });

        lookup_tables(&categories, &feeds)
    }

    /// Decode the location, load lookups and run the initial search if the
    /// location asks for one.
    pub async fn open(&self, raw_query: &str, location: Arc<LocationWriterPort>) -> SearchSession {
        let seed = SearchLocation::decode(raw_query);
        let lookups = self.load_lookups().await;
        let mut session = SearchSession::new(seed, lookups, location, &self.settings);

        if let Some(pending) = session.initial_search() {
            self.run(&mut session, pending).await;
        }
        session
    }

    /// Dispatch one cycle and apply its completion. Callers that overlap
    /// cycles use [`SearchDispatcher::execute`] and
    /// [`SearchSession::complete`] directly.
    pub async fn run(&self, session: &mut SearchSession, pending: PendingSearch) -> CompletionOutcome {
        let completion = self.dispatcher.execute(pending).await;
        session.complete(completion)
    }

    pub async fn suggestions(&self, term: &str, limit: u32) -> ApplicationResult<Vec<String>> {
        let term = term.trim();
        let length = term.chars().count();
        if length < SUGGESTION_MIN_CHARS {
            return Ok(Vec::new());
        }
        if length > SUGGESTION_MAX_CHARS {
            return Err(ApplicationError::validation(format!(
                "search term must be at most {SUGGESTION_MAX_CHARS} characters"
            )));
        }
        let limit = limit.clamp(1, SUGGESTION_MAX_LIMIT);
        self.client.suggestions(term, limit).await
    }
}
