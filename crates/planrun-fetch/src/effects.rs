//! I/O operations: the HTTP client seam and the fetcher built on it.

mod fetcher;
mod http;
mod mock;

pub use fetcher::Fetcher;
pub use http::{HttpClient, HttpResponse};
pub use mock::MockHttpClient;

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
