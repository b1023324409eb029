// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the provider endpoint.
//!
//! This module is the single source of truth for where the provider
//! lives on the network. Bounds for the search parameters themselves
//! live next to their newtypes in [`crate::domain::search`].

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

/// Default URL scheme for the provider endpoint.
pub const DEFAULT_SCHEME: &str = "https";

/// Default provider host.
pub const DEFAULT_HOST: &str = "api.flickr.com";

/// Fixed REST API path on the provider host.
pub const DEFAULT_REST_PATH: &str = "/services/rest";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_SCHEME.is_empty());
    assert!(!DEFAULT_HOST.is_empty());
    assert!(!DEFAULT_REST_PATH.is_empty());
    // The query builder requires a host-relative path.
    assert!(DEFAULT_REST_PATH.as_bytes()[0] == b'/');
};
