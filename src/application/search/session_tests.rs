use super::*;
use crate::application::dto::Page;
use crate::domain::filter::{CategoryId, LanguageCode, SourceType};
use crate::infrastructure::location::MemoryLocation;
use std::time::Duration;

fn article(id: i64, language: &str) -> ArticleSummary {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": format!("Artigo {id}"),
        "language": language,
    }))
    .unwrap()
}

fn page_of(items: Vec<ArticleSummary>, total: u64, page: u32) -> SearchResultPage {
    Page::new(items, total, page, 20)
}

fn session_at(raw: &str) -> (SearchSession, Arc<MemoryLocation>) {
    let location = Arc::new(MemoryLocation::new());
    let session = SearchSession::new(
        SearchLocation::decode(raw),
        LookupTables::default(),
        location.clone(),
        &SessionSettings::default(),
    );
    (session, location)
}

#[test]
fn empty_location_starts_idle_without_searching() {
    let (mut session, location) = session_at("");
    assert!(session.initial_search().is_none());
    assert_eq!(session.status(), SearchStatus::Idle);
    assert!(location.history().is_empty());
}

#[test]
fn seeded_location_searches_on_open() {
    let (mut session, _) = session_at("?q=verbal&page=2&category_id=3");
    let pending = session.initial_search().expect("active filters trigger a search");
    assert_eq!(pending.request().page, 2);
    assert_eq!(pending.request().category_id, Some(CategoryId::new(3).unwrap()));
    assert_eq!(session.status(), SearchStatus::Loading);
}

#[test]
fn typing_does_not_start_a_cycle() {
    let (mut session, _) = session_at("");
    session.set_query_text("compor");
    assert_eq!(session.generation(), 0);
    assert_eq!(session.phase(), &SearchPhase::Idle);
}

#[test]
fn stale_completion_is_discarded() {
    let (mut session, location) = session_at("");
    let first = session.submit_query("a");
    let second = session.submit_query("ab");

    let late = SearchCompletion::new(&first, Ok(page_of(vec![article(1, "en")], 1, 1)));
    let fresh = SearchCompletion::new(&second, Ok(page_of(vec![article(2, "en")], 1, 1)));

    assert_eq!(session.complete(fresh), CompletionOutcome::Applied);
    assert_eq!(session.complete(late), CompletionOutcome::Stale);
    assert_eq!(session.results()[0].id, 2);
    assert_eq!(location.history(), vec!["/repository?q=ab".to_string()]);
}

#[test]
fn older_failure_does_not_mask_newer_cycle() {
    let (mut session, _) = session_at("");
    let first = session.submit();
    let _second = session.submit();
    let outcome = session.complete(SearchCompletion::new(
        &first,
        Err(ApplicationError::transport("connection reset")),
    ));
    assert_eq!(outcome, CompletionOutcome::Stale);
    assert_eq!(session.status(), SearchStatus::Loading);
}

#[test]
fn filter_change_resets_page() {
    let (mut session, _) = session_at("?q=x");
    let pending = session.initial_search().unwrap();
    session.complete(SearchCompletion::new(
        &pending,
        Ok(page_of(vec![], 95, 1)),
    ));
    let paged = session.change_page(4).unwrap();
    assert_eq!(paged.request().page, 4);
    session.complete(SearchCompletion::new(&paged, Ok(page_of(vec![], 95, 4))));

    let pending = session.change_filters(FilterChange::ToggleSourceType(SourceType::Journal));
    assert_eq!(pending.request().page, 1);
    assert_eq!(pending.request().source_category, Some(SourceType::Journal));
}

#[test]
fn out_of_range_page_starts_nothing() {
    let (mut session, _) = session_at("");
    let generation = session.generation();
    assert!(session.change_page(2).is_none());
    assert!(session.change_page(0).is_none());
    assert_eq!(session.generation(), generation);
}

#[test]
fn failure_clears_results_and_totals() {
    let (mut session, location) = session_at("");
    let ok = session.submit();
    session.complete(SearchCompletion::new(&ok, Ok(page_of(vec![article(1, "pt")], 1, 1))));

    let failing = session.submit();
    let outcome = session.complete(SearchCompletion::new(
        &failing,
        Err(ApplicationError::upstream(500, "boom")),
    ));
    assert_eq!(outcome, CompletionOutcome::Failed);
    assert!(session.results().is_empty());
    assert_eq!(session.pagination().total(), 0);
    assert!(matches!(session.status(), SearchStatus::Error(_)));
    assert_eq!(location.history().len(), 1);
}

#[test]
fn timeout_bumps_the_generation() {
    let (mut session, _) = session_at("");
    let pending = session.submit();
    session.complete(SearchCompletion::new(
        &pending,
        Err(ApplicationError::Timeout(Duration::from_secs(15))),
    ));
    assert!(session.generation() > pending.generation());

    let late = SearchCompletion::new(&pending, Ok(page_of(vec![article(1, "en")], 1, 1)));
    assert_eq!(session.complete(late), CompletionOutcome::Stale);
    assert!(session.results().is_empty());
}

#[test]
fn retry_requests_the_page_that_failed() {
    let (mut session, _) = session_at("?q=x&page=3");
    let pending = session.initial_search().unwrap();
    assert_eq!(pending.request().page, 3);
    session.complete(SearchCompletion::new(
        &pending,
        Err(ApplicationError::transport("offline")),
    ));
    assert_eq!(session.pagination().page(), 1);
    assert_eq!(session.retry().request().page, 3);
}

#[test]
fn failure_on_a_later_page_keeps_pagination_consistent() {
    let (mut session, _) = session_at("?q=x");
    let pending = session.initial_search().unwrap();
    session.complete(SearchCompletion::new(&pending, Ok(page_of(vec![], 100, 1))));
    let paged = session.change_page(4).unwrap();
    session.complete(SearchCompletion::new(
        &paged,
        Err(ApplicationError::transport("connection reset")),
    ));

    let pagination = session.pagination();
    assert_eq!(pagination.total_pages(), 0);
    assert!(pagination.page() <= pagination.last_page());
    assert_eq!(
        session.phase(),
        &SearchPhase::Failed {
            message: "transport failure: connection reset".into(),
            retry_page: 4,
        }
    );
    assert!(session.change_page(1).is_some());
}

#[test]
fn language_filter_narrows_returned_items() {
    let (mut session, _) = session_at("");
    let pending = session.change_filters(FilterChange::ToggleLanguage(LanguageCode::new("pt").unwrap()));
    session.complete(SearchCompletion::new(
        &pending,
        Ok(page_of(vec![article(1, "pt-BR"), article(2, "en"), article(3, "pt")], 3, 1)),
    ));
    let ids: Vec<i64> = session.results().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 3]);
    // Totals still describe the unfiltered server result.
    assert_eq!(session.pagination().total(), 3);
}

#[test]
fn clear_all_runs_one_cycle_and_empties_the_chips() {
    let (mut session, _) = session_at("?category_id=3&language=pt&has_pdf=true");
    assert_eq!(session.active_filter_count(), 3);
    let before = session.generation();
    let pending = session.clear_filters();
    assert_eq!(pending.generation(), before + 1);
    assert!(session.active_filters().is_empty());
    assert_eq!(pending.request().category_id, None);
}

#[test]
fn removing_a_chip_drops_only_that_value() {
    let (mut session, _) = session_at("?category_id=3,5");
    let chips = session.active_filters();
    assert_eq!(chips.len(), 2);
    let pending = session.remove_filter(&chips[0]);
    assert_eq!(pending.request().category_id, Some(CategoryId::new(5).unwrap()));
    assert_eq!(session.active_filter_count(), 1);
}

#[test]
fn location_reflects_accepted_server_page() {
    let (mut session, location) = session_at("?q=x&page=9");
    let pending = session.initial_search().unwrap();
    session.complete(SearchCompletion::new(&pending, Ok(page_of(vec![], 40, 2))));
    assert_eq!(session.pagination().page(), 2);
    assert_eq!(location.current().as_deref(), Some("/repository?q=x&page=2"));
}

#[test]
fn server_page_past_the_end_is_not_kept_or_shared() {
    let (mut session, location) = session_at("?q=x&page=9");
    assert_eq!(session.pagination().page(), 1);
    let pending = session.initial_search().unwrap();
    assert_eq!(pending.request().page, 9);

    session.complete(SearchCompletion::new(&pending, Ok(Page::new(vec![], 40, 9, 20))));

    let pagination = session.pagination();
    assert_eq!(pagination.total_pages(), 2);
    assert_eq!(pagination.page(), 1);
    assert!(pagination.page() <= pagination.last_page());
    assert_eq!(location.current().as_deref(), Some("/repository?q=x"));
}
