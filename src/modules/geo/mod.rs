//! Geolocation capability
//!
//! The device position lookup is a black box to the core: it either yields a
//! fix with coordinates and reverse-geocoded address text, or nothing at all
//! (permission denied, no signal).

use async_trait::async_trait;

use crate::core::error::Result;

/// A device position with whatever reverse-geocoded context was available
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Street-level address text
    pub street: Option<String>,
    /// Sub-region or neighbourhood text
    pub locality: Option<String>,
    /// Administrative region text, matched against the district table
    pub region: Option<String>,
}

/// Device geolocation capability
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Return the current fix, or `None` when the device cannot provide one
    async fn current_fix(&self) -> Result<Option<GeoFix>>;
}
