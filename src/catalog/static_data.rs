//! Built-in carrier table.

use crate::catalog::CarrierCatalog;
use crate::domain::{CarrierOffer, VehicleType};

/// Catalog backed by a fixed table.
///
/// Only small vans are served; every other vehicle gets no offers.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CarrierCatalog for StaticCatalog {
    fn name(&self) -> &'static str {
        "static"
    }

    fn find_offers(&self, vehicle: VehicleType) -> Vec<CarrierOffer> {
        match vehicle {
            VehicleType::SmallVan => vec![
                CarrierOffer::new("RoyalPackages", 80, 1),
                CarrierOffer::new("Hercules", 35, 5),
                CarrierOffer::new("CollectTimes", 70, 1),
            ],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_van_offers() {
        let offers = StaticCatalog::new().find_offers(VehicleType::SmallVan);

        let names: Vec<&str> = offers.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["RoyalPackages", "Hercules", "CollectTimes"]);
        assert_eq!(offers[1], CarrierOffer::new("Hercules", 35, 5));
    }

    #[test]
    fn test_other_vehicles_have_no_offers() {
        let catalog = StaticCatalog::new();
        for vehicle in VehicleType::ALL {
            if vehicle != VehicleType::SmallVan {
                assert!(catalog.find_offers(vehicle).is_empty());
            }
        }
    }
}
