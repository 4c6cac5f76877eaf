pub mod errors;
pub mod filter;
pub mod search;
