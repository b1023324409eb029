// SPDX-License-Identifier: MPL-2.0
//! HTTP transport port definition.
//!
//! This module defines the [`HttpTransport`] trait behind which the
//! production HTTP stack lives. The client core never talks to the
//! network directly; it issues requests through this port, so tests can
//! substitute a scripted transport.
//!
//! # Design Notes
//!
//! - One operation: a single GET with no request body. The provider API
//!   is read-only.
//! - Timeout and TLS policy belong to the adapter; the port carries no
//!   timeout configuration of its own.
//! - The trait is `Send + Sync` so callers can fan out any number of
//!   concurrent requests over one shared transport.

use async_trait::async_trait;
use std::fmt;
use url::Url;

// =============================================================================
// TransportError
// =============================================================================

/// Failure before a response arrived: DNS, connection, TLS, or an
/// aborted request. Carries the underlying message verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}

// =============================================================================
// TransportResponse
// =============================================================================

/// A complete HTTP response as seen by the client core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code of the response.
    pub status: u16,
    /// Raw response body, possibly empty.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

// =============================================================================
// HttpTransport Trait
// =============================================================================

/// Port for outbound HTTP requests.
///
/// Implementations issue exactly one GET per call and resolve exactly
/// once. Cancellation follows future semantics: dropping the returned
/// future abandons the request and nothing is delivered afterwards.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues one GET request and resolves with the complete response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no response arrives.
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}
