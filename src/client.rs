// SPDX-License-Identifier: MPL-2.0
//! The search client: one request, one classified outcome.
//!
//! [`SearchClient`] wires the pure query builder, the provider
//! configuration, and an injected [`HttpTransport`] into the two
//! operations callers use: [`SearchClient::search_images`] and
//! [`SearchClient::download_bytes`]. Each call issues exactly one GET,
//! never retries, and resolves exactly once; dropping the returned
//! future cancels the in-flight request and nothing is delivered
//! afterwards.

use crate::application::port::transport::{HttpTransport, TransportResponse};
use crate::application::query;
use crate::config::ProviderConfig;
use crate::domain::reference::ImageReference;
use crate::domain::search::{PageSize, SearchParameters};
use crate::error::FetchError;
use crate::infrastructure::http::ReqwestTransport;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Query parameter names understood by the provider.
mod keys {
    pub const API_KEY: &str = "api_key";
    pub const FORMAT: &str = "format";
    pub const NO_JSON_CALLBACK: &str = "nojsoncallback";
    pub const METHOD: &str = "method";
    pub const EXTRAS: &str = "extras";
    pub const PER_PAGE: &str = "per_page";
    pub const LAT: &str = "lat";
    pub const LON: &str = "lon";
    pub const RADIUS: &str = "radius";
}

/// Fixed query parameter values.
mod values {
    /// Disables the JSONP wrapper around the response body.
    pub const NO_JSON_CALLBACK: &str = "1";
    /// Provider method performing a geotagged photo search.
    pub const PHOTOS_SEARCH: &str = "flickr.photos.search";
    /// Extra response field carrying the medium-size image URL.
    pub const MEDIUM_URL: &str = "url_m";
}

// =============================================================================
// Wire envelope
// =============================================================================

/// Response envelope of a photo search; `photos.photo` is the page.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    photos: PhotoPage,
}

#[derive(Debug, Deserialize)]
struct PhotoPage {
    photo: Vec<PhotoEntry>,
}

/// One search result entry. Only the medium-size URL is consumed; the
/// provider sends many more fields, all ignored.
#[derive(Debug, Deserialize)]
struct PhotoEntry {
    url_m: Option<String>,
}

// =============================================================================
// SearchClient
// =============================================================================

/// Client for the provider's geotagged photo search.
///
/// Holds the provider configuration and the injected transport; there is
/// no process-wide shared instance. Calls are independent and share no
/// mutable state, so one client can serve any number of concurrent
/// requests.
#[derive(Debug)]
pub struct SearchClient<T> {
    config: ProviderConfig,
    transport: T,
}

impl SearchClient<ReqwestTransport> {
    /// Builds a client over the production HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: ProviderConfig) -> Result<Self, FetchError> {
        let transport =
            ReqwestTransport::new().map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> SearchClient<T> {
    /// Builds a client over a caller-provided transport.
    #[must_use]
    pub fn with_transport(config: ProviderConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the provider configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetches one page of image references near a coordinate.
    ///
    /// Merges the fixed provider constants with the caller's parameters,
    /// issues a single GET, and classifies the outcome. The returned
    /// references preserve provider order; an empty page is a valid
    /// empty result. One entry with a missing or invalid image URL fails
    /// the whole page with [`FetchError::InvalidReference`] — no partial
    /// results are returned.
    ///
    /// # Errors
    ///
    /// See [`FetchError`] for the classification.
    pub async fn search_images(
        &self,
        params: &SearchParameters,
    ) -> Result<Vec<ImageReference>, FetchError> {
        let query = self.search_query(params);
        let url = query::build_url(
            &self.config.scheme,
            &self.config.host,
            &self.config.rest_path,
            &query,
        )
        .ok_or_else(|| FetchError::Transport("could not assemble request URL".to_string()))?;

        debug!(url = %url, "issuing photo search");
        let response = self.checked_get(&url).await?;

        let references = decode_search_page(&response.body)?;
        info!(count = references.len(), "photo search complete");
        Ok(references)
    }

    /// Downloads the raw bytes behind a reference.
    ///
    /// The payload is returned unmodified; format, size, and
    /// content-type validation are the caller's concern.
    ///
    /// # Errors
    ///
    /// Classifies transport failures, non-2xx statuses, and empty
    /// bodies; the payload itself is never inspected.
    pub async fn download_bytes(
        &self,
        reference: &ImageReference,
    ) -> Result<Vec<u8>, FetchError> {
        debug!(url = %reference, "downloading image bytes");
        let response = self.checked_get(reference.url()).await?;
        Ok(response.body)
    }

    /// Issues one GET and applies the shared transport/status/body
    /// classification, in that order.
    async fn checked_get(&self, url: &url::Url) -> Result<TransportResponse, FetchError> {
        let response = self.transport.get(url).await.map_err(|e| {
            warn!(url = %url, error = %e, "transport failure");
            FetchError::Transport(e.to_string())
        })?;

        if !response.is_success() {
            warn!(url = %url, status = response.status, "unsuccessful status code");
            return Err(FetchError::NotApproved {
                status: response.status,
            });
        }

        if response.body.is_empty() {
            return Err(FetchError::EmptyPayload);
        }

        Ok(response)
    }

    /// Merges the fixed provider constants with the caller's search
    /// parameters into a single stringified query mapping.
    fn search_query(&self, params: &SearchParameters) -> BTreeMap<String, String> {
        let page_size = params
            .page_size()
            .unwrap_or_else(|| PageSize::new(self.config.page_size));

        let mut query = BTreeMap::new();
        query.insert(keys::API_KEY.to_string(), self.config.api_key.clone());
        query.insert(
            keys::FORMAT.to_string(),
            params.format().as_str().to_string(),
        );
        query.insert(
            keys::NO_JSON_CALLBACK.to_string(),
            values::NO_JSON_CALLBACK.to_string(),
        );
        query.insert(keys::METHOD.to_string(), values::PHOTOS_SEARCH.to_string());
        query.insert(keys::EXTRAS.to_string(), values::MEDIUM_URL.to_string());
        query.insert(keys::PER_PAGE.to_string(), page_size.value().to_string());
        query.insert(
            keys::LAT.to_string(),
            params.latitude().value().to_string(),
        );
        query.insert(
            keys::LON.to_string(),
            params.longitude().value().to_string(),
        );
        query.insert(
            keys::RADIUS.to_string(),
            params.radius().value().to_string(),
        );
        query
    }
}

/// Decodes the search response body into validated references.
///
/// Decoding is two-staged so the two malformed-payload cases stay
/// distinguishable: the body must first parse as a JSON object, then
/// match the `photos.photo` envelope.
fn decode_search_page(body: &[u8]) -> Result<Vec<ImageReference>, FetchError> {
    let document: serde_json::Value = serde_json::from_slice(body)
        .map_err(|_| FetchError::MalformedPayload("deserialization failed".to_string()))?;
    if !document.is_object() {
        return Err(FetchError::MalformedPayload(
            "deserialization failed".to_string(),
        ));
    }

    let envelope: SearchEnvelope = serde_json::from_value(document)
        .map_err(|_| FetchError::MalformedPayload("unexpected shape".to_string()))?;

    let mut references = Vec::with_capacity(envelope.photos.photo.len());
    for entry in envelope.photos.photo {
        let raw = entry
            .url_m
            .ok_or_else(|| FetchError::InvalidReference("entry missing url_m".to_string()))?;
        references.push(ImageReference::parse(&raw)?);
    }
    Ok(references)
}
