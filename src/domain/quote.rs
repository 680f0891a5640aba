//! Quote request and result types.
//!
//! Field names match the JSON wire format of the pricing API, so these types
//! double as request and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::VehicleType;

/// Pickup and delivery postcodes of a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Route {
    /// Postcode the parcel is collected from.
    pub pickup_postcode: String,
    /// Postcode the parcel is delivered to.
    pub delivery_postcode: String,
}

impl Route {
    pub fn new(pickup_postcode: impl Into<String>, delivery_postcode: impl Into<String>) -> Self {
        Self {
            pickup_postcode: pickup_postcode.into(),
            delivery_postcode: delivery_postcode.into(),
        }
    }
}

/// A route together with the requested vehicle.
///
/// The vehicle stays a raw string here: unknown values must reach the quote
/// engine so they can be reported as an invalid vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VehicleRoute {
    #[serde(flatten)]
    pub route: Route,
    /// One of `bicycle`, `motorbike`, `parcel_car`, `small_van`, `large_van`.
    pub vehicle: String,
}

/// Price of a delivery based on postcodes alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BasicQuote {
    #[serde(flatten)]
    pub route: Route,
    /// Price in minor currency units.
    pub price: i64,
}

/// Price of a delivery with the vehicle markup applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VehicleQuote {
    #[serde(flatten)]
    pub route: Route,
    pub vehicle: VehicleType,
    /// Price in minor currency units.
    pub price: i64,
}

/// One entry of a carrier price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CarrierPrice {
    /// Carrier name.
    #[serde(rename = "service")]
    pub carrier_name: String,
    /// Vehicle price plus the carrier markup.
    #[serde(rename = "price")]
    pub amount: i64,
    /// Delivery time in minutes.
    pub delivery_time: i64,
}

/// Prices of every carrier serving the requested vehicle, cheapest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CarrierQuote {
    #[serde(flatten)]
    pub route: Route,
    pub vehicle: VehicleType,
    pub price_list: Vec<CarrierPrice>,
}
