//! Vehicle types and their price multipliers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Vehicles a delivery can be carried with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Bicycle,
    Motorbike,
    ParcelCar,
    SmallVan,
    LargeVan,
}

impl VehicleType {
    /// Every supported vehicle, in ascending order of markup.
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Bicycle,
        VehicleType::Motorbike,
        VehicleType::ParcelCar,
        VehicleType::SmallVan,
        VehicleType::LargeVan,
    ];

    /// Wire name of the vehicle, as used in requests and catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Bicycle => "bicycle",
            VehicleType::Motorbike => "motorbike",
            VehicleType::ParcelCar => "parcel_car",
            VehicleType::SmallVan => "small_van",
            VehicleType::LargeVan => "large_van",
        }
    }

    /// Multiplicative markup applied to the base price, if one is configured.
    pub fn markup(&self) -> Option<f64> {
        VEHICLE_MARKUPS
            .iter()
            .find(|(vehicle, _)| vehicle == self)
            .map(|(_, factor)| *factor)
    }
}

/// Markup applied to the base price for each vehicle.
pub static VEHICLE_MARKUPS: [(VehicleType, f64); 5] = [
    (VehicleType::Bicycle, 1.10),
    (VehicleType::Motorbike, 1.15),
    (VehicleType::ParcelCar, 1.20),
    (VehicleType::SmallVan, 1.30),
    (VehicleType::LargeVan, 1.40),
];

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|vehicle| vehicle.as_str() == s)
            .ok_or_else(|| format!("Unknown vehicle type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_vehicles() {
        for vehicle in VehicleType::ALL {
            assert_eq!(vehicle.as_str().parse::<VehicleType>(), Ok(vehicle));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("scooter".parse::<VehicleType>().is_err());
        assert!("Bicycle".parse::<VehicleType>().is_err());
        assert!("small-van".parse::<VehicleType>().is_err());
        assert!("".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_every_vehicle_has_markup() {
        assert_eq!(VehicleType::Bicycle.markup(), Some(1.10));
        assert_eq!(VehicleType::Motorbike.markup(), Some(1.15));
        assert_eq!(VehicleType::ParcelCar.markup(), Some(1.20));
        assert_eq!(VehicleType::SmallVan.markup(), Some(1.30));
        assert_eq!(VehicleType::LargeVan.markup(), Some(1.40));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&VehicleType::ParcelCar).unwrap();
        assert_eq!(json, "\"parcel_car\"");
        let parsed: VehicleType = serde_json::from_str("\"large_van\"").unwrap();
        assert_eq!(parsed, VehicleType::LargeVan);
    }
}
