// SPDX-License-Identifier: MPL-2.0
//! Pure request-URL construction.
//!
//! Building the provider URL has no side effects and no transport
//! dependency, so it lives on the application side where it can be
//! tested without any network machinery.

use std::collections::BTreeMap;
use url::Url;

/// Composes a request URL from its base components and a query mapping.
///
/// One query pair is appended per mapping entry, values percent-encoded.
/// `BTreeMap` iteration is ordered, so identical inputs produce the same
/// URL string. Parameters are never silently dropped.
///
/// Returns `None` if `scheme`, `host`, or `path` is empty, if `path` is
/// not host-relative (leading `/`), or if the composed string does not
/// parse as a valid URL.
#[must_use]
pub fn build_url(
    scheme: &str,
    host: &str,
    path: &str,
    params: &BTreeMap<String, String>,
) -> Option<Url> {
    if scheme.is_empty() || host.is_empty() || path.is_empty() {
        return None;
    }
    // A path joined onto an authority must be absolute; anything else
    // would splice into the host.
    if !path.starts_with('/') {
        return None;
    }

    let mut url = Url::parse(&format!("{scheme}://{host}{path}")).ok()?;
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in params {
            pairs.append_pair(name, value);
        }
    }
    Some(url)
}
