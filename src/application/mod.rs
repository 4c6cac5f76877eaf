pub mod dto;
pub mod error;
pub mod ports;
pub mod search;

pub use error::ApplicationResult;
