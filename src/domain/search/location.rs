//! Location codec: the shareable query string of the repository view.
//!
//! Encoding is canonical (default-valued fields are omitted, parameters appear
//! in a fixed order) and decoding is lenient, because the address bar is
//! user-editable and a bad value must never break the page.

use crate::domain::filter::{CategoryId, FeedId, FilterModel, LanguageCode, SortBy, SortOrder, SourceType};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

const LIST_DELIMITER: char = ',';
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query text, filters and page: everything the location carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLocation {
    pub query_text: String,
    pub filters: FilterModel,
    pub page: u32,
}

impl Default for SearchLocation {
    fn default() -> Self {
        Self {
            query_text: String::new(),
            filters: FilterModel::default(),
            page: 1,
        }
    }
}

impl SearchLocation {
    pub fn new(query_text: impl Into<String>, filters: FilterModel, page: u32) -> Self {
        Self {
            query_text: query_text.into(),
            filters,
            page: page.max(1),
        }
    }

    pub fn encode(&self) -> String {
        encode(&self.query_text, &self.filters, self.page)
    }

    pub fn decode(raw: &str) -> Self {
        decode(raw)
    }

    /// `path` alone for the canonical "nothing selected" state, otherwise
    /// `path?query`.
    pub fn href(&self, path: &str) -> String {
        let query = self.encode();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

pub fn encode(query_text: &str, filters: &FilterModel, page: u32) -> String {
    let mut pairs: Vec<(&'static str, String)> = Vec::new();

    if !query_text.is_empty() {
        pairs.push(("q", query_text.to_string()));
    }
    if page > 1 {
        pairs.push(("page", page.to_string()));
    }
    if !filters.source_types().is_empty() {
        pairs.push(("source_type", join(filters.source_types().iter().map(|s| s.as_str()))));
    }
    if !filters.category_ids().is_empty() {
        pairs.push(("category_id", join(filters.category_ids().iter())));
    }
    if !filters.feed_ids().is_empty() {
        pairs.push(("feed_id", join(filters.feed_ids().iter())));
    }
    if !filters.languages().is_empty() {
        pairs.push(("language", join(filters.languages().iter())));
    }
    if let Some(date) = filters.date_from() {
        pairs.push(("date_from", date.format(DATE_FORMAT).to_string()));
    }
    if let Some(date) = filters.date_to() {
        pairs.push(("date_to", date.format(DATE_FORMAT).to_string()));
    }
    if let Some(author) = filters.author() {
        pairs.push(("author", author.to_string()));
    }
    if filters.has_pdf() {
        pairs.push(("has_pdf", "true".to_string()));
    }
    if filters.highlighted() {
        pairs.push(("highlighted", "true".to_string()));
    }
    if filters.sort_by() != SortBy::default() {
        pairs.push(("sort_by", filters.sort_by().as_str().to_string()));
    }
    if filters.sort_order() != SortOrder::default() {
        pairs.push(("sort_order", filters.sort_order().as_str().to_string()));
    }

    // Plain string pairs always serialize.
    serde_urlencoded::to_string(&pairs).unwrap_or_default()
}

pub fn decode(raw: &str) -> SearchLocation {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).unwrap_or_default();

    // First occurrence wins, like URLSearchParams.get.
    let mut params: HashMap<String, String> = HashMap::new();
    for (key, value) in pairs {
        params.entry(key).or_insert(value);
    }
    let get = |key: &str| params.get(key).map(String::as_str);

    let mut filters = FilterModel::new();

    if let Some(value) = get("source_type") {
        for source in split_parsed::<SourceType>(value) {
            filters = filters.with_source_type(source);
        }
    }
    if let Some(value) = get("category_id") {
        for id in split_ids(value).filter_map(|id| CategoryId::new(id).ok()) {
            filters = filters.with_category(id);
        }
    }
    if let Some(value) = get("feed_id") {
        for id in split_ids(value).filter_map(|id| FeedId::new(id).ok()) {
            filters = filters.with_feed(id);
        }
    }
    if let Some(value) = get("language") {
        for code in value.split(LIST_DELIMITER).filter_map(|c| LanguageCode::new(c).ok()) {
            filters = filters.with_language(code);
        }
    }
    filters.set_date_from(get("date_from").and_then(parse_date));
    filters.set_date_to(get("date_to").and_then(parse_date));
    if let Some(author) = get("author") {
        filters.set_author(author);
    }
    filters.set_has_pdf(get("has_pdf") == Some("true"));
    filters.set_highlighted(get("highlighted") == Some("true"));
    if let Some(sort_by) = get("sort_by").and_then(|v| v.parse::<SortBy>().ok()) {
        filters.set_sort_by(sort_by);
    }
    if let Some(sort_order) = get("sort_order").and_then(|v| v.parse::<SortOrder>().ok()) {
        filters.set_sort_order(sort_order);
    }

    let page = get("page")
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1);

    SearchLocation {
        query_text: get("q").unwrap_or_default().to_string(),
        filters,
        page,
    }
}

fn join<T: ToString>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn split_parsed<T: FromStr>(value: &str) -> impl Iterator<Item = T> + '_ {
    value
        .split(LIST_DELIMITER)
        .filter_map(|part| part.trim().parse::<T>().ok())
}

fn split_ids(value: &str) -> impl Iterator<Item = i64> + '_ {
    split_parsed::<i64>(value)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod location_tests;
