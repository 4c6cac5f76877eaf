pub mod articles;
pub mod lookups;
pub mod pagination;
pub mod view;

pub use articles::{ArticleSummary, AuthorSummary, CategorySummary};
pub use lookups::{CategoryDto, CategoryListResponse, FeedDto, FeedListResponse, lookup_tables};
pub use pagination::{Page, SearchResultPage};
pub use view::{ActiveFilterDto, SearchViewDto};
