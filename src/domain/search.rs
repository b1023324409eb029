// SPDX-License-Identifier: MPL-2.0
//! Search parameter newtypes.
//!
//! This module provides type-safe wrappers for the values of a photo
//! search, ensuring they are always within the ranges the provider
//! accepts. Out-of-range inputs are clamped on construction, so an
//! invalid parameter set is unrepresentable.

// =============================================================================
// Latitude
// =============================================================================

/// Latitude bounds in decimal degrees.
pub mod latitude_bounds {
    /// Southernmost representable latitude.
    pub const MIN: f64 = -90.0;
    /// Northernmost representable latitude.
    pub const MAX: f64 = 90.0;
}

/// Latitude in decimal degrees, guaranteed within [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latitude(f64);

impl Latitude {
    /// Creates a new latitude, clamping to the valid range.
    #[must_use]
    pub fn new(degrees: f64) -> Self {
        Self(degrees.clamp(latitude_bounds::MIN, latitude_bounds::MAX))
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

// =============================================================================
// Longitude
// =============================================================================

/// Longitude bounds in decimal degrees.
pub mod longitude_bounds {
    /// Westernmost representable longitude.
    pub const MIN: f64 = -180.0;
    /// Easternmost representable longitude.
    pub const MAX: f64 = 180.0;
}

/// Longitude in decimal degrees, guaranteed within [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitude(f64);

impl Longitude {
    /// Creates a new longitude, clamping to the valid range.
    #[must_use]
    pub fn new(degrees: f64) -> Self {
        Self(degrees.clamp(longitude_bounds::MIN, longitude_bounds::MAX))
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

// =============================================================================
// RadiusKm
// =============================================================================

/// Search radius bounds in kilometers. The ceiling is the largest radius
/// the provider accepts for a geotagged search.
pub mod radius_bounds {
    /// Minimum search radius (100 meters).
    pub const MIN: f64 = 0.1;
    /// Maximum search radius the provider accepts.
    pub const MAX: f64 = 32.0;
    /// Default search radius.
    pub const DEFAULT: f64 = 5.0;
}

/// Search radius in kilometers, guaranteed within (0, 32].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusKm(f64);

impl RadiusKm {
    /// Creates a new radius, clamping to the valid range.
    #[must_use]
    pub fn new(kilometers: f64) -> Self {
        Self(kilometers.clamp(radius_bounds::MIN, radius_bounds::MAX))
    }

    /// Returns the radius in kilometers.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for RadiusKm {
    fn default() -> Self {
        Self(radius_bounds::DEFAULT)
    }
}

// =============================================================================
// PageSize
// =============================================================================

/// Page size bounds. The ceiling is the largest page the provider
/// returns per request.
pub mod page_bounds {
    /// Minimum page size.
    pub const MIN: u32 = 1;
    /// Maximum page size the provider accepts.
    pub const MAX: u32 = 500;
    /// Default page size when the caller does not specify one.
    pub const DEFAULT: u32 = 21;
}

/// Number of results requested per page, guaranteed within [1, 500].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// Creates a new page size, clamping to the valid range.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self(size.clamp(page_bounds::MIN, page_bounds::MAX))
    }

    /// Returns the page size as a plain integer.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_bounds::DEFAULT)
    }
}

// =============================================================================
// OutputFormat
// =============================================================================

/// Response serialization formats the provider supports.
///
/// Only JSON is supported; the enum exists so the wire format is a typed
/// value rather than a loose string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON body without the JSONP callback wrapper.
    #[default]
    Json,
}

impl OutputFormat {
    /// Returns the wire value for the `format` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
        }
    }
}

// =============================================================================
// SearchParameters
// =============================================================================

/// Immutable parameter set for one photo search.
///
/// Constructed fresh per call and discarded after the result is
/// consumed. The page size is optional; when absent, the client falls
/// back to the configured provider default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParameters {
    latitude: Latitude,
    longitude: Longitude,
    radius: RadiusKm,
    page_size: Option<PageSize>,
    format: OutputFormat,
}

impl SearchParameters {
    /// Creates a parameter set for a coordinate and radius, with the
    /// default output format and no page-size override.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        Self {
            latitude: Latitude::new(latitude),
            longitude: Longitude::new(longitude),
            radius: RadiusKm::new(radius_km),
            page_size: None,
            format: OutputFormat::default(),
        }
    }

    /// Overrides the configured default page size for this search.
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(PageSize::new(size));
        self
    }

    /// Returns the latitude.
    #[must_use]
    pub fn latitude(&self) -> Latitude {
        self.latitude
    }

    /// Returns the longitude.
    #[must_use]
    pub fn longitude(&self) -> Longitude {
        self.longitude
    }

    /// Returns the search radius.
    #[must_use]
    pub fn radius(&self) -> RadiusKm {
        self.radius
    }

    /// Returns the page-size override, if any.
    #[must_use]
    pub fn page_size(&self) -> Option<PageSize> {
        self.page_size
    }

    /// Returns the requested output format.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}
