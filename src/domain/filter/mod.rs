pub mod field;
pub mod model;
pub mod selection;
pub mod value_objects;

pub use field::{FilterField, FilterValue};
pub use model::FilterModel;
pub use selection::SelectionSet;
pub use value_objects::{CategoryId, FeedId, LanguageCode, SortBy, SortOrder, SourceType};
