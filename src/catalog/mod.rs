//! Carrier catalogs.
//!
//! A catalog tells the quote engine which carriers can deliver with a given
//! vehicle, and at which markup. Two sources are available:
//! - Static: a small built-in table
//! - File: a JSON document loaded once at startup

mod json_file;
mod static_data;

pub use json_file::*;
pub use static_data::*;

use std::sync::Arc;

use crate::config::{CatalogConfig, CatalogSource};
use crate::domain::{CarrierOffer, VehicleType};
use crate::error::CatalogError;

/// Source of carrier offers.
///
/// Implementations are read-only once built, so a single instance can serve
/// concurrent requests without locking.
pub trait CarrierCatalog: Send + Sync {
    /// Short name of the catalog source, for logs and health reporting.
    fn name(&self) -> &'static str;

    /// Offers available for the given vehicle, in catalog order.
    ///
    /// An empty list means no carrier serves that vehicle; it is not an error.
    fn find_offers(&self, vehicle: VehicleType) -> Vec<CarrierOffer>;
}

/// Build the catalog selected by configuration.
pub fn open(config: &CatalogConfig) -> Result<Arc<dyn CarrierCatalog>, CatalogError> {
    match config.source {
        CatalogSource::Static => Ok(Arc::new(StaticCatalog::new())),
        CatalogSource::File => {
            let path = config.path.as_ref().ok_or(CatalogError::MissingPath)?;
            tracing::info!(path = %path.display(), "Loading carrier catalog from file");
            Ok(Arc::new(FileCatalog::from_path(path)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_static() {
        let catalog = open(&CatalogConfig::default()).unwrap();
        assert_eq!(catalog.name(), "static");
        assert_eq!(catalog.find_offers(VehicleType::SmallVan).len(), 3);
    }

    #[test]
    fn test_open_file_requires_path() {
        let config = CatalogConfig {
            source: CatalogSource::File,
            path: None,
        };

        let result = open(&config);
        assert!(matches!(result, Err(CatalogError::MissingPath)));
    }

    #[test]
    fn test_open_file_missing_on_disk() {
        let config = CatalogConfig {
            source: CatalogSource::File,
            path: Some("does/not/exist.json".into()),
        };

        let result = open(&config);
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
