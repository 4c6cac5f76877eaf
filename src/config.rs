// src/config.rs
use crate::application::search::SessionSettings;
use std::{env, time::Duration};
use thiserror::Error;

const MAX_PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    api_base_url: String,
    search_timeout: Duration,
    page_size: u32,
    repository_path: String,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api/v1".into()
}

fn default_search_timeout_secs() -> u64 {
    15
}

fn default_page_size() -> u32 {
    20
}

fn default_repository_path() -> String {
    "/repository".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Unset keys fall back
    /// to defaults; set keys must parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let api_base_url = lookup("API_BASE_URL").unwrap_or_else(default_api_base_url);
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(
                "API_BASE_URL must be an http(s) URL".into(),
            ));
        }

        let timeout_secs = match lookup("SEARCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid("SEARCH_TIMEOUT_SECS must be a positive integer".into())
                })?,
            None => default_search_timeout_secs(),
        };

        let page_size = match lookup("SEARCH_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "SEARCH_PAGE_SIZE must be between 1 and {MAX_PAGE_SIZE}"
                    ))
                })?,
            None => default_page_size(),
        };

        let repository_path = lookup("REPOSITORY_PATH").unwrap_or_else(default_repository_path);
        if !repository_path.starts_with('/') || repository_path.len() < 2 {
            return Err(ConfigError::Invalid(
                "REPOSITORY_PATH must be an absolute path other than /".into(),
            ));
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            api_base_url,
            search_timeout: Duration::from_secs(timeout_secs),
            page_size,
            repository_path,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn search_timeout(&self) -> Duration {
        self.search_timeout
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn repository_path(&self) -> &str {
        &self.repository_path
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            page_size: self.page_size,
            request_timeout: self.search_timeout,
            location_path: self.repository_path.clone(),
        }
    }
}
