use std::future::Future;

use bytes::Bytes;
use url::Url;

use crate::error::TransportError;

/// A fully buffered HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`, empty when unknown.
    pub reason: String,
    /// Raw `Content-Type` header value, empty when absent.
    pub media_type: String,
    pub body: Bytes,
}

impl HttpResponse {
    /// A `200 OK` response.
    pub fn ok(media_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            reason: "OK".to_string(),
            media_type: media_type.into(),
            body: body.into(),
        }
    }

    /// A bodiless response with an arbitrary status.
    pub fn with_status(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            media_type: String::new(),
            body: Bytes::new(),
        }
    }
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations own their timeout and redirect policy. A response with any
/// status is `Ok`; `Err` means nothing usable came back.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - [`MockHttpClient`](crate::MockHttpClient): scripted responses for tests
pub trait HttpClient: Send + Sync {
    /// Issue a binary-safe GET and buffer the whole body.
    fn get(
        &self,
        url: &Url,
    ) -> impl Future<Output = std::result::Result<HttpResponse, TransportError>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use std::time::Duration;

    use reqwest::header::CONTENT_TYPE;

    use super::*;
    use crate::error::{FetchError, Result};

    /// Production HTTP client implementation using reqwest.
    pub struct ReqwestClient {
        client: reqwest::Client,
        timeout: Duration,
    }

    impl ReqwestClient {
        /// The timeout covers the whole exchange, body included.
        pub fn new(timeout: Duration) -> Result<Self> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| FetchError::Client(e.to_string()))?;
            Ok(Self { client, timeout })
        }

        pub fn timeout(&self) -> Duration {
            self.timeout
        }
    }

    impl HttpClient for ReqwestClient {
        async fn get(&self, url: &Url) -> std::result::Result<HttpResponse, TransportError> {
            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            let media_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let body = response.bytes().await.map_err(transport_error)?;

            Ok(HttpResponse {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                media_type,
                body,
            })
        }
    }

    fn transport_error(e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Connect(e.to_string())
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
