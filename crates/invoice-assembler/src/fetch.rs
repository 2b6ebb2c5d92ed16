//! Stylesheet retrieval

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error reading stylesheet: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "http")]
    #[error("HTTP error fetching stylesheet: {0}")]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "http")]
    #[error("stylesheet request for {location} returned status {status}")]
    Status { location: String, status: u16 },

    #[error("no stylesheet registered for location: {0}")]
    UnknownLocation(String),
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Provider of raw XSLT text for a named location.
///
/// The pipeline treats the returned text as an opaque string; whatever
/// validation happens, happens when the transformer parses it.
pub trait StylesheetFetcher {
    fn fetch(&self, location: &str) -> FetchResult<String>;
}

/// Reads the location as a filesystem path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl FileFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl StylesheetFetcher for FileFetcher {
    fn fetch(&self, location: &str) -> FetchResult<String> {
        debug!(location, "reading stylesheet from file");
        Ok(std::fs::read_to_string(location)?)
    }
}

/// Blocking HTTP GET of the location.
///
/// Non-success statuses are rejected instead of being passed downstream as
/// stylesheet text.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "http")]
impl StylesheetFetcher for HttpFetcher {
    fn fetch(&self, location: &str) -> FetchResult<String> {
        debug!(location, "fetching stylesheet over HTTP");
        let response = self.client.get(location).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

/// In-memory stylesheet store, for tests and embedded stylesheets.
#[derive(Debug, Clone, Default)]
pub struct StringFetcher {
    stylesheets: HashMap<String, String>,
}

impl StringFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, location: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(location, text);
        self
    }

    pub fn insert(&mut self, location: impl Into<String>, text: impl Into<String>) {
        self.stylesheets.insert(location.into(), text.into());
    }
}

impl StylesheetFetcher for StringFetcher {
    fn fetch(&self, location: &str) -> FetchResult<String> {
        self.stylesheets
            .get(location)
            .cloned()
            .ok_or_else(|| FetchError::UnknownLocation(location.to_string()))
    }
}
