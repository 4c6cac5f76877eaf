use crate::domain::filter::{CategoryId, FeedId};
use crate::domain::search::LookupTables;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedListResponse {
    pub feeds: Vec<FeedDto>,
    #[serde(default)]
    pub total: u64,
}

/// Entries with ids the domain rejects are skipped.
pub fn lookup_tables(categories: &[CategoryDto], feeds: &[FeedDto]) -> LookupTables {
    LookupTables::new(
        categories
            .iter()
            .filter_map(|c| CategoryId::new(c.id).ok().map(|id| (id, c.name.clone()))),
        feeds
            .iter()
            .filter_map(|f| FeedId::new(f.id).ok().map(|id| (id, f.name.clone()))),
    )
}
