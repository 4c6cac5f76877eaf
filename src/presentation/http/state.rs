// src/presentation/http/state.rs
use crate::application::search::SearchPageService;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<SearchPageService>,
    pub repository_path: String,
}
