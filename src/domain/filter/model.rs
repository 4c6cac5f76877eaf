use super::{
    field::FilterValue,
    selection::SelectionSet,
    value_objects::{CategoryId, FeedId, LanguageCode, SortBy, SortOrder, SourceType},
};
use chrono::NaiveDate;
use serde::Serialize;

/// Every active facet and sort constraint, free-text query excluded.
///
/// Defaults mean "no restriction": empty selections, no dates, no author,
/// both flags off, newest publications first. The flags are `true | unset`;
/// an unset flag never restricts the search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterModel {
    source_types: SelectionSet<SourceType>,
    feed_ids: SelectionSet<FeedId>,
    category_ids: SelectionSet<CategoryId>,
    languages: SelectionSet<LanguageCode>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    author: Option<String>,
    has_pdf: bool,
    highlighted: bool,
    sort_by: SortBy,
    sort_order: SortOrder,
}

impl FilterModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_types(&self) -> &SelectionSet<SourceType> {
        &self.source_types
    }

    pub fn feed_ids(&self) -> &SelectionSet<FeedId> {
        &self.feed_ids
    }

    pub fn category_ids(&self) -> &SelectionSet<CategoryId> {
        &self.category_ids
    }

    pub fn languages(&self) -> &SelectionSet<LanguageCode> {
        &self.languages
    }

    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn has_pdf(&self) -> bool {
        self.has_pdf
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn with_source_type(mut self, source: SourceType) -> Self {
        self.source_types.insert(source);
        self
    }

    pub fn with_feed(mut self, feed: FeedId) -> Self {
        self.feed_ids.insert(feed);
        self
    }

    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category_ids.insert(category);
        self
    }

    pub fn with_language(mut self, language: LanguageCode) -> Self {
        self.languages.insert(language);
        self
    }

    pub fn with_date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn with_date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.set_author(author);
        self
    }

    pub fn with_has_pdf(mut self, required: bool) -> Self {
        self.has_pdf = required;
        self
    }

    pub fn with_highlighted(mut self, required: bool) -> Self {
        self.highlighted = required;
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn toggle_source_type(&mut self, source: SourceType) -> bool {
        self.source_types.toggle(source)
    }

    pub fn toggle_feed(&mut self, feed: FeedId) -> bool {
        self.feed_ids.toggle(feed)
    }

    pub fn toggle_category(&mut self, category: CategoryId) -> bool {
        self.category_ids.toggle(category)
    }

    pub fn toggle_language(&mut self, language: LanguageCode) -> bool {
        self.languages.toggle(language)
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) {
        self.date_from = date;
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) {
        self.date_to = date;
    }

    /// The author is stored trimmed; a blank value clears the filter.
    pub fn set_author(&mut self, author: impl Into<String>) {
        let author = author.into();
        let trimmed = author.trim();
        self.author = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    pub fn set_has_pdf(&mut self, required: bool) {
        self.has_pdf = required;
    }

    pub fn set_highlighted(&mut self, required: bool) {
        self.highlighted = required;
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
    }

    /// Remove a single constraint value. Multi-valued fields lose only that
    /// value; scalar fields go back to their default. Returns whether
    /// anything changed.
    pub fn remove(&mut self, value: &FilterValue) -> bool {
        match value {
            FilterValue::SourceType(source) => self.source_types.remove(source),
            FilterValue::Feed(feed) => self.feed_ids.remove(feed),
            FilterValue::Category(category) => self.category_ids.remove(category),
            FilterValue::Language(language) => self.languages.remove(language),
            FilterValue::DateFrom(_) => self.date_from.take().is_some(),
            FilterValue::DateTo(_) => self.date_to.take().is_some(),
            FilterValue::Author(_) => self.author.take().is_some(),
            FilterValue::HasPdf => std::mem::replace(&mut self.has_pdf, false),
            FilterValue::Highlighted => std::mem::replace(&mut self.highlighted, false),
        }
    }

    /// Reset every field, sort included.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any facet restricts the search. Sort order is not a facet.
    pub fn has_active_filters(&self) -> bool {
        !self.source_types.is_empty()
            || !self.feed_ids.is_empty()
            || !self.category_ids.is_empty()
            || !self.languages.is_empty()
            || self.date_from.is_some()
            || self.date_to.is_some()
            || self.author.is_some()
            || self.has_pdf
            || self.highlighted
    }

    pub fn has_default_sort(&self) -> bool {
        self.sort_by == SortBy::default() && self.sort_order == SortOrder::default()
    }

    /// `date_from` later than `date_to`. Never enforced, only reported.
    pub fn has_inverted_date_range(&self) -> bool {
        matches!((self.date_from, self.date_to), (Some(from), Some(to)) if from > to)
    }

    /// The single source category the backend can filter on: set only when
    /// exactly one source type is selected. Both selected means no
    /// restriction.
    pub fn source_category(&self) -> Option<SourceType> {
        if self.source_types.len() == 1 {
            self.source_types.first().copied()
        } else {
            None
        }
    }
}
