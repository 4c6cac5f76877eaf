use crate::application::ports::location::LocationWriter;
use std::sync::{Mutex, PoisonError};

/// In-process stand-in for an address bar. Records every write so callers
/// can tell what the location was set to and when.
#[derive(Debug, Default)]
pub struct MemoryLocation {
    writes: Mutex<Vec<String>>,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LocationWriter for MemoryLocation {
    fn replace(&self, href: &str) {
        tracing::trace!(href, "location replaced");
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(href.to_string());
    }
}
