//! Projection of the filter model into removable chips.

use crate::domain::filter::{CategoryId, FeedId, FilterField, FilterModel, FilterValue};
use std::collections::HashMap;

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Display names for category and feed ids, fetched once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTables {
    categories: HashMap<CategoryId, String>,
    feeds: HashMap<FeedId, String>,
}

impl LookupTables {
    pub fn new(
        categories: impl IntoIterator<Item = (CategoryId, String)>,
        feeds: impl IntoIterator<Item = (FeedId, String)>,
    ) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            feeds: feeds.into_iter().collect(),
        }
    }

    pub fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.categories.get(&id).map(String::as_str)
    }

    pub fn feed_name(&self, id: FeedId) -> Option<&str> {
        self.feeds.get(&id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.feeds.is_empty()
    }
}

/// One removable chip. Derived data, never the source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub key: FilterField,
    pub label: String,
    pub value: FilterValue,
}

impl ActiveFilter {
    fn new(value: FilterValue, label: impl Into<String>) -> Self {
        Self {
            key: value.field(),
            label: label.into(),
            value,
        }
    }
}

/// One chip per selected value of a multi-valued field, one per populated
/// scalar. Both source types selected still yield two chips even though the
/// request carries no source restriction.
pub fn project(filters: &FilterModel, lookups: &LookupTables) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    for source in filters.source_types() {
        chips.push(ActiveFilter::new(FilterValue::SourceType(*source), source.label()));
    }

    for feed in filters.feed_ids() {
        let label = lookups
            .feed_name(*feed)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{feed}"));
        chips.push(ActiveFilter::new(FilterValue::Feed(*feed), label));
    }

    for category in filters.category_ids() {
        let label = lookups
            .category_name(*category)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{category}"));
        chips.push(ActiveFilter::new(FilterValue::Category(*category), label));
    }

    for language in filters.languages() {
        chips.push(ActiveFilter::new(
            FilterValue::Language(language.clone()),
            language.label(),
        ));
    }

    if let Some(date) = filters.date_from() {
        chips.push(ActiveFilter::new(
            FilterValue::DateFrom(date),
            format!("De: {}", date.format(DISPLAY_DATE_FORMAT)),
        ));
    }

    if let Some(date) = filters.date_to() {
        chips.push(ActiveFilter::new(
            FilterValue::DateTo(date),
            format!("Até: {}", date.format(DISPLAY_DATE_FORMAT)),
        ));
    }

    if let Some(author) = filters.author() {
        chips.push(ActiveFilter::new(
            FilterValue::Author(author.to_string()),
            format!("Autor: {author}"),
        ));
    }

    if filters.has_pdf() {
        chips.push(ActiveFilter::new(FilterValue::HasPdf, "Com PDF"));
    }

    if filters.highlighted() {
        chips.push(ActiveFilter::new(FilterValue::Highlighted, "Em destaque"));
    }

    chips
}

pub fn active_filter_count(filters: &FilterModel) -> usize {
    filters.source_types().len()
        + filters.feed_ids().len()
        + filters.category_ids().len()
        + filters.languages().len()
        + usize::from(filters.date_from().is_some())
        + usize::from(filters.date_to().is_some())
        + usize::from(filters.author().is_some())
        + usize::from(filters.has_pdf())
        + usize::from(filters.highlighted())
}
