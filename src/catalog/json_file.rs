//! Catalog loaded from a JSON file.
//!
//! The file is a list of carriers, each with a base price and the services it
//! runs:
//!
//! ```json
//! [
//!   {
//!     "carrier_name": "Hercules",
//!     "base_price": 20,
//!     "services": [
//!       { "delivery_time": 5, "markup": 15, "vehicles": ["small_van", "large_van"] }
//!     ]
//!   }
//! ]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::CarrierCatalog;
use crate::domain::{CarrierOffer, VehicleType};
use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
struct CarrierRecord {
    carrier_name: String,
    base_price: i64,
    services: Vec<ServiceRecord>,
}

#[derive(Debug, Deserialize)]
struct ServiceRecord {
    delivery_time: i64,
    markup: i64,
    vehicles: Vec<String>,
}

/// Catalog indexed by vehicle name, built once from a JSON document.
#[derive(Debug)]
pub struct FileCatalog {
    offers_by_vehicle: HashMap<String, Vec<CarrierOffer>>,
}

impl FileCatalog {
    /// Read and index the catalog file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Index a catalog from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let carriers: Vec<CarrierRecord> = serde_json::from_str(json)?;
        let catalog = Self::from_records(carriers)?;

        tracing::info!(
            vehicles = catalog.offers_by_vehicle.len(),
            offers = catalog.offers_by_vehicle.values().map(Vec::len).sum::<usize>(),
            "Carrier catalog loaded"
        );

        Ok(catalog)
    }

    /// Flatten carriers into per-vehicle offer lists.
    ///
    /// Document order is kept within each list. A vehicle listed twice by the
    /// same service yields two identical offers. Negative prices or times, and
    /// markups that overflow an `i64`, reject the whole document.
    fn from_records(carriers: Vec<CarrierRecord>) -> Result<Self, CatalogError> {
        let mut offers_by_vehicle: HashMap<String, Vec<CarrierOffer>> = HashMap::new();

        for carrier in &carriers {
            let invalid = |reason: &str| CatalogError::InvalidOffer {
                carrier: carrier.carrier_name.clone(),
                reason: reason.to_string(),
            };

            if carrier.base_price < 0 {
                return Err(invalid("negative base_price"));
            }

            for service in &carrier.services {
                if service.markup < 0 {
                    return Err(invalid("negative markup"));
                }
                if service.delivery_time < 0 {
                    return Err(invalid("negative delivery_time"));
                }

                let markup = carrier
                    .base_price
                    .checked_add(service.markup)
                    .ok_or_else(|| invalid("base_price plus markup overflows"))?;

                for vehicle in &service.vehicles {
                    offers_by_vehicle
                        .entry(vehicle.clone())
                        .or_default()
                        .push(CarrierOffer::new(
                            carrier.carrier_name.clone(),
                            markup,
                            service.delivery_time,
                        ));
                }
            }
        }

        Ok(Self { offers_by_vehicle })
    }
}

impl CarrierCatalog for FileCatalog {
    fn name(&self) -> &'static str {
        "file"
    }

    fn find_offers(&self, vehicle: VehicleType) -> Vec<CarrierOffer> {
        self.offers_by_vehicle
            .get(vehicle.as_str())
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const CATALOG: &str = r#"[
        {
            "carrier_name": "RoyalPackages",
            "base_price": 20,
            "services": [
                { "delivery_time": 1, "markup": 60, "vehicles": ["small_van", "large_van"] },
                { "delivery_time": 3, "markup": 10, "vehicles": ["bicycle"] }
            ]
        },
        {
            "carrier_name": "Hercules",
            "base_price": 15,
            "services": [
                { "delivery_time": 5, "markup": 20, "vehicles": ["small_van", "small_van"] }
            ]
        }
    ]"#;

    #[test]
    fn test_offers_combine_base_price_and_markup() {
        let catalog = FileCatalog::from_json_str(CATALOG).unwrap();

        assert_eq!(
            catalog.find_offers(VehicleType::Bicycle),
            vec![CarrierOffer::new("RoyalPackages", 30, 3)]
        );
        assert_eq!(
            catalog.find_offers(VehicleType::LargeVan),
            vec![CarrierOffer::new("RoyalPackages", 80, 1)]
        );
    }

    #[test]
    fn test_document_order_and_duplicates_kept() {
        let catalog = FileCatalog::from_json_str(CATALOG).unwrap();

        assert_eq!(
            catalog.find_offers(VehicleType::SmallVan),
            vec![
                CarrierOffer::new("RoyalPackages", 80, 1),
                CarrierOffer::new("Hercules", 35, 5),
                CarrierOffer::new("Hercules", 35, 5),
            ]
        );
    }

    #[test]
    fn test_unlisted_vehicle_has_no_offers() {
        let catalog = FileCatalog::from_json_str(CATALOG).unwrap();
        assert!(catalog.find_offers(VehicleType::Motorbike).is_empty());
        assert!(catalog.find_offers(VehicleType::ParcelCar).is_empty());
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            FileCatalog::from_json_str("{\"carrier_name\": 1}"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            FileCatalog::from_json_str(r#"[{"carrier_name": "X", "services": []}]"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_markup_overflow_rejected() {
        let json = r#"[{
            "carrier_name": "X",
            "base_price": 9223372036854775807,
            "services": [{ "delivery_time": 1, "markup": 1, "vehicles": ["small_van"] }]
        }]"#;

        let result = FileCatalog::from_json_str(json);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidOffer { ref carrier, .. }) if carrier == "X"
        ));
    }

    #[test]
    fn test_negative_values_rejected() {
        let documents = [
            r#"[{"carrier_name": "A", "base_price": -1, "services": []}]"#,
            r#"[{"carrier_name": "B", "base_price": 0,
                 "services": [{"delivery_time": 1, "markup": -5, "vehicles": ["bicycle"]}]}]"#,
            r#"[{"carrier_name": "C", "base_price": 0,
                 "services": [{"delivery_time": -1, "markup": 5, "vehicles": ["bicycle"]}]}]"#,
        ];

        for json in documents {
            assert!(matches!(
                FileCatalog::from_json_str(json),
                Err(CatalogError::InvalidOffer { .. })
            ));
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = FileCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.find_offers(VehicleType::SmallVan).len(), 3);
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/carriers.json");
        let catalog = FileCatalog::from_path(path).unwrap();

        let names: Vec<String> = catalog
            .find_offers(VehicleType::SmallVan)
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["RoyalPackages", "Hercules", "CollectTimes"]);
        for vehicle in VehicleType::ALL {
            assert!(!catalog.find_offers(vehicle).is_empty());
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileCatalog::from_path(dir.path().join("carriers.json"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
