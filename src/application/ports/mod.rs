// src/application/ports/mod.rs
pub mod location;
pub mod search;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type SearchClientPort = dyn search::SearchClient;
pub type LookupClientPort = dyn search::LookupClient;
pub type LocationWriterPort = dyn location::LocationWriter;
