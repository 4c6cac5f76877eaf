use super::value_objects::{CategoryId, FeedId, LanguageCode, SourceType};
use chrono::NaiveDate;
use serde::Serialize;

/// Name of a removable filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    SourceType,
    FeedIds,
    CategoryIds,
    Languages,
    DateFrom,
    DateTo,
    Author,
    HasPdf,
    Highlighted,
}

/// One concrete constraint value, tagged with the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    SourceType(SourceType),
    Feed(FeedId),
    Category(CategoryId),
    Language(LanguageCode),
    DateFrom(NaiveDate),
    DateTo(NaiveDate),
    Author(String),
    HasPdf,
    Highlighted,
}

impl FilterValue {
    pub fn field(&self) -> FilterField {
        match self {
            FilterValue::SourceType(_) => FilterField::SourceType,
            FilterValue::Feed(_) => FilterField::FeedIds,
            FilterValue::Category(_) => FilterField::CategoryIds,
            FilterValue::Language(_) => FilterField::Languages,
            FilterValue::DateFrom(_) => FilterField::DateFrom,
            FilterValue::DateTo(_) => FilterField::DateTo,
            FilterValue::Author(_) => FilterField::Author,
            FilterValue::HasPdf => FilterField::HasPdf,
            FilterValue::Highlighted => FilterField::Highlighted,
        }
    }
}
