// src/application/ports/location.rs

/// The addressable location of a view (the browser address bar, or whatever
/// stands in for it). Writes replace the current entry instead of pushing
/// history.
pub trait LocationWriter: Send + Sync {
    fn replace(&self, href: &str);
}
