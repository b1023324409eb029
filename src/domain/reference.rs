// SPDX-License-Identifier: MPL-2.0
//! Validated image references.

use crate::error::FetchError;
use std::fmt;
use url::Url;

/// A validated absolute URL pointing to a retrievable image resource.
///
/// Construction only succeeds for well-formed absolute `http`/`https`
/// URLs; everything else is rejected with
/// [`FetchError::InvalidReference`]. References are ordered and hashable
/// so callers can deduplicate or persist them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageReference(Url);

impl ImageReference {
    /// Parses a reference from a raw URL string.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidReference`] if the string is not a
    /// syntactically valid absolute `http`/`https` URL.
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let parsed = Url::parse(raw)
            .map_err(|e| FetchError::InvalidReference(format!("{raw}: {e}")))?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self(parsed)),
            other => Err(FetchError::InvalidReference(format!(
                "unsupported scheme `{other}`: {raw}"
            ))),
        }
    }

    /// Returns the underlying URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.0
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
