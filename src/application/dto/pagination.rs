use super::ArticleSummary;
use serde::{Deserialize, Serialize};

/// Offset-paginated response envelope of the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(u64::from(page_size)) as u32
        };
        Self {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }

    pub fn empty(page: u32, page_size: u32) -> Self {
        Self::new(Vec::new(), 0, page, page_size)
    }
}

pub type SearchResultPage = Page<ArticleSummary>;
