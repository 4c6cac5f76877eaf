use crate::domain::filter::{
    CategoryId, FeedId, FilterModel, FilterValue, LanguageCode, SortBy, SortOrder, SourceType,
};
use chrono::NaiveDate;

/// Every way the filter panel, the chip bar or the sort controls can alter
/// the filter model. Each change starts exactly one search cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    ToggleSourceType(SourceType),
    ToggleFeed(FeedId),
    ToggleCategory(CategoryId),
    ToggleLanguage(LanguageCode),
    SetDateFrom(Option<NaiveDate>),
    SetDateTo(Option<NaiveDate>),
    SetAuthor(String),
    SetHasPdf(bool),
    SetHighlighted(bool),
    SetSortBy(SortBy),
    SetSortOrder(SortOrder),
    /// Chip removal.
    Remove(FilterValue),
    ClearAll,
    Replace(FilterModel),
}

impl FilterChange {
    pub fn apply(self, filters: &mut FilterModel) {
        match self {
            FilterChange::ToggleSourceType(source) => {
                filters.toggle_source_type(source);
            }
            FilterChange::ToggleFeed(feed) => {
                filters.toggle_feed(feed);
            }
            FilterChange::ToggleCategory(category) => {
                filters.toggle_category(category);
            }
            FilterChange::ToggleLanguage(language) => {
                filters.toggle_language(language);
            }
            FilterChange::SetDateFrom(date) => filters.set_date_from(date),
            FilterChange::SetDateTo(date) => filters.set_date_to(date),
            FilterChange::SetAuthor(author) => filters.set_author(author),
            FilterChange::SetHasPdf(required) => filters.set_has_pdf(required),
            FilterChange::SetHighlighted(required) => filters.set_highlighted(required),
            FilterChange::SetSortBy(sort_by) => filters.set_sort_by(sort_by),
            FilterChange::SetSortOrder(sort_order) => filters.set_sort_order(sort_order),
            FilterChange::Remove(value) => {
                filters.remove(&value);
            }
            FilterChange::ClearAll => filters.clear(),
            FilterChange::Replace(model) => *filters = model,
        }
    }
}
