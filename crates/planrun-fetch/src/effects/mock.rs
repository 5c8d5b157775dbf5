use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use url::Url;

use super::http::{HttpClient, HttpResponse};
use crate::error::TransportError;

/// Scripted HTTP client for tests.
///
/// Each URL maps to a fixed outcome. Unknown URLs fail as connection errors.
#[derive(Debug, Default)]
pub struct MockHttpClient {
    routes: Mutex<HashMap<String, std::result::Result<HttpResponse, TransportError>>>,
    calls: AtomicUsize,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `response`.
    pub fn respond(self, url: &str, response: HttpResponse) -> Self {
        self.insert(url, Ok(response));
        self
    }

    /// Fail `url` below the HTTP layer.
    pub fn fail(self, url: &str, error: TransportError) -> Self {
        self.insert(url, Err(error));
        self
    }

    /// Number of requests issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn insert(&self, url: &str, outcome: std::result::Result<HttpResponse, TransportError>) {
        let key = Url::parse(url).map_or_else(|_| url.to_string(), String::from);
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert(key, outcome);
        }
    }
}

impl HttpClient for MockHttpClient {
    async fn get(&self, url: &Url) -> std::result::Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let routes = self
            .routes
            .lock()
            .map_err(|_| TransportError::Connect("mock routes poisoned".to_string()))?;
        routes
            .get(url.as_str())
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Connect(format!("no route for {url}"))))
    }
}
