// SPDX-License-Identifier: MPL-2.0
//! Port definitions implemented by infrastructure adapters.

pub mod transport;

pub use transport::{HttpTransport, TransportError, TransportResponse};
