// src/infrastructure/http/mod.rs
mod client;
mod error;

pub use client::HttpBackendClient;
pub use error::{ensure_success, map_reqwest};
