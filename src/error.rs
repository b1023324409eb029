// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors produced by the fetch pipeline.
///
/// Every operation resolves to either a success value or exactly one of
/// these variants; nothing panics across the client boundary. Each
/// variant pairs the structured kind with a human-readable detail so the
/// caller can decide what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be built, or the transport failed before a
    /// response arrived (DNS, connection, TLS). Carries the underlying
    /// message.
    Transport(String),

    /// The provider answered with a status code outside the 2xx range.
    NotApproved {
        /// The observed HTTP status code.
        status: u16,
    },

    /// The provider answered successfully but with an empty body.
    EmptyPayload,

    /// The response body was not the expected JSON document.
    MalformedPayload(String),

    /// A result entry had a missing or invalid image URL.
    InvalidReference(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Transport error: {msg}"),
            FetchError::NotApproved { status } => {
                write!(f, "Unsuccessful status code {status}")
            }
            FetchError::EmptyPayload => write!(f, "No data received"),
            FetchError::MalformedPayload(msg) => write!(f, "Malformed payload: {msg}"),
            FetchError::InvalidReference(msg) => {
                write!(f, "Invalid image reference: {msg}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

pub type Result<T> = std::result::Result<T, FetchError>;
