use std::sync::Arc;

use crate::features::regions::resolve_district;
use crate::features::reports::models::ReportLocation;
use crate::modules::geo::Geolocator;

/// Location fields ready to attach to a new report
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub location: ReportLocation,
    pub district: Option<String>,
    pub area: Option<String>,
}

/// Resolves the device position into report location fields
pub struct LocationService {
    geolocator: Arc<dyn Geolocator>,
}

impl LocationService {
    pub fn new(geolocator: Arc<dyn Geolocator>) -> Self {
        Self { geolocator }
    }

    /// Capture the current position and resolve district/area text
    ///
    /// Returns `None` when no fix is available. A geolocation error is logged
    /// and also yields `None`; submission is never blocked on location.
    pub async fn capture(&self) -> Option<ResolvedLocation> {
        let fix = match self.geolocator.current_fix().await {
            Ok(fix) => fix?,
            Err(e) => {
                tracing::warn!("Geolocation lookup failed: {}", e);
                return None;
            }
        };

        let district = fix
            .region
            .as_deref()
            .and_then(resolve_district)
            .map(String::from);

        let area = {
            let text = format!(
                "{} {}",
                fix.street.as_deref().unwrap_or_default(),
                fix.locality.as_deref().unwrap_or_default()
            );
            let text = text.trim().to_string();
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        };

        Some(ResolvedLocation {
            location: ReportLocation {
                latitude: fix.latitude,
                longitude: fix.longitude,
            },
            district,
            area,
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::core::error::{AppError, Result};
    use crate::modules::geo::GeoFix;

    struct StaticGeolocator {
        fix: Option<GeoFix>,
    }

    #[async_trait]
    impl Geolocator for StaticGeolocator {
        async fn current_fix(&self) -> Result<Option<GeoFix>> {
            Ok(self.fix.clone())
        }
    }

    struct FailingGeolocator;

    #[async_trait]
    impl Geolocator for FailingGeolocator {
        async fn current_fix(&self) -> Result<Option<GeoFix>> {
            Err(AppError::NotFound("location permission denied".to_string()))
        }
    }

    fn service(fix: Option<GeoFix>) -> LocationService {
        LocationService::new(Arc::new(StaticGeolocator { fix }))
    }

    fn ranchi_fix() -> GeoFix {
        GeoFix {
            latitude: 23.3441,
            longitude: 85.3096,
            street: Some("Main Rd".to_string()),
            locality: Some("Doranda".to_string()),
            region: Some("Ranchi Division".to_string()),
        }
    }

    #[tokio::test]
    async fn test_capture_resolves_district_and_area() {
        let resolved = service(Some(ranchi_fix())).capture().await.unwrap();

        assert_eq!(resolved.location.latitude, 23.3441);
        assert_eq!(resolved.district.as_deref(), Some("Ranchi"));
        assert_eq!(resolved.area.as_deref(), Some("Main Rd Doranda"));
    }

    #[tokio::test]
    async fn test_capture_without_address_text() {
        let fix = GeoFix {
            street: None,
            locality: None,
            region: None,
            ..ranchi_fix()
        };

        let resolved = service(Some(fix)).capture().await.unwrap();
        assert_eq!(resolved.district, None);
        assert_eq!(resolved.area, None);
    }

    #[tokio::test]
    async fn test_capture_with_partial_address_text() {
        let fix = GeoFix {
            street: None,
            ..ranchi_fix()
        };

        let resolved = service(Some(fix)).capture().await.unwrap();
        assert_eq!(resolved.area.as_deref(), Some("Doranda"));
    }

    #[tokio::test]
    async fn test_capture_with_unknown_region_leaves_district_unset() {
        let fix = GeoFix {
            region: Some("Mumbai Suburban".to_string()),
            ..ranchi_fix()
        };

        let resolved = service(Some(fix)).capture().await.unwrap();
        assert_eq!(resolved.district, None);
    }

    #[tokio::test]
    async fn test_capture_without_fix_returns_none() {
        assert_eq!(service(None).capture().await, None);
    }

    #[tokio::test]
    async fn test_capture_swallows_geolocation_errors() {
        let service = LocationService::new(Arc::new(FailingGeolocator));
        assert_eq!(service.capture().await, None);
    }
}
