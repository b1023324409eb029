// SPDX-License-Identifier: MPL-2.0
//! `geolens` finds photos taken near a coordinate.
//!
//! Callers hand the client a latitude/longitude pair, a radius, and
//! optionally a page size; the client asks the provider's REST API for
//! one page of matching photos and returns validated image URLs, which
//! it can also download. Map rendering, pin persistence, and album UI
//! are the caller's business — this crate is only the
//! request/response/error pipeline.
//!
//! ```no_run
//! use geolens::{ProviderConfig, SearchClient, SearchParameters};
//!
//! # async fn run() -> Result<(), geolens::FetchError> {
//! let config = ProviderConfig::with_api_key("0123456789abcdef");
//! let client = SearchClient::new(config)?;
//!
//! let params = SearchParameters::new(48.2082, 16.3738, 5.0);
//! let references = client.search_images(&params).await?;
//! if let Some(first) = references.first() {
//!     let bytes = client.download_bytes(first).await?;
//!     println!("downloaded {} bytes from {first}", bytes.len());
//! }
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/geolens/0.1.0")]

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use client::SearchClient;
pub use config::ProviderConfig;
pub use domain::reference::ImageReference;
pub use domain::search::SearchParameters;
pub use error::{FetchError, Result};
