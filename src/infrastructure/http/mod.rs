// SPDX-License-Identifier: MPL-2.0
//! Production HTTP transport over `reqwest`.

use crate::application::port::transport::{HttpTransport, TransportError, TransportResponse};
use async_trait::async_trait;
use url::Url;

/// User agent sent with every outbound request.
const USER_AGENT: &str = concat!("geolens/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// [`HttpTransport`] adapter backed by a shared [`reqwest::Client`].
///
/// The client follows a bounded number of redirects and identifies
/// itself with an explicit user agent. Timeouts are `reqwest`'s
/// defaults; the core defines no timeout policy of its own. Cloning is
/// cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds the production transport.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?
            .to_vec();

        Ok(TransportResponse { status, body })
    }
}
