// tests/support/mocks/mod.rs
mod lookups;
mod search;

pub use lookups::{FailingLookups, StaticLookups};
pub use search::{GatedSearchClient, ScriptedSearchClient};
