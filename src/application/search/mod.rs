pub mod changes;
pub mod dispatcher;
pub mod service;
pub mod session;

pub use changes::FilterChange;
pub use dispatcher::SearchDispatcher;
pub use service::SearchPageService;
pub use session::{
    CompletionOutcome, PendingSearch, SearchCompletion, SearchPhase, SearchSession, SearchStatus,
    SessionSettings,
};
