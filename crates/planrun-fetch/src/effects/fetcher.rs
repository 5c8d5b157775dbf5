use tracing::{debug, info, warn};
use url::Url;

use crate::data::{DownloadRecord, Ledger};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result, TransportError};
use crate::sniff::{Payload, classify};

/// Performs single-shot retrievals and records their outcome in a [`Ledger`].
pub struct Fetcher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch `url` and append the outcome to `ledger`.
    ///
    /// Exactly one record is appended when a response arrives (success,
    /// non-200, or expiry notice). Invalid URLs, timeouts and connection
    /// failures append nothing.
    pub async fn fetch<'l>(&self, url: &str, ledger: &'l mut Ledger) -> Result<&'l DownloadRecord> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!(url = %parsed, "requesting");
        let response = self.client.get(&parsed).await.map_err(|e| match e {
            TransportError::Timeout => FetchError::Timeout {
                url: url.to_string(),
            },
            TransportError::Connect(message) => FetchError::Network {
                url: url.to_string(),
                message,
            },
        })?;

        if response.status != 200 {
            warn!(url, status = response.status, "unexpected status");
            ledger.append(DownloadRecord::rejected(url, response.media_type));
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
                reason: response.reason,
            });
        }

        match classify(&response.media_type, &response.body) {
            Payload::Expired { instructions } => {
                warn!(url, instructions = ?instructions, "download link expired");
                ledger.append(DownloadRecord::expired(
                    url,
                    response.media_type,
                    instructions.clone(),
                ));
                Err(FetchError::Expired {
                    url: url.to_string(),
                    instructions,
                })
            }
            Payload::Data => {
                info!(
                    url,
                    media_type = %response.media_type,
                    bytes = response.body.len(),
                    "downloaded"
                );
                Ok(ledger.append(DownloadRecord::payload(
                    url,
                    response.media_type,
                    response.body,
                )))
            }
        }
    }
}
