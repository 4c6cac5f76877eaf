pub mod active_filters;
pub mod location;
pub mod pagination;
pub mod request;

pub use active_filters::{ActiveFilter, LookupTables, active_filter_count, project};
pub use location::SearchLocation;
pub use pagination::PaginationState;
pub use request::SearchRequest;
