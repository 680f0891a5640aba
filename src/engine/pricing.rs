//! Price arithmetic.
//!
//! Pure functions from postcodes, vehicles and offers to prices. The quote
//! engine strings these together; nothing here logs or holds state.

use crate::domain::{postcode, CarrierOffer, CarrierPrice, VehicleType};
use crate::error::{QuoteError, QuoteResult};

/// Postcode distance covered by one unit of base price.
const POSTCODE_DISTANCE_PER_UNIT: u64 = 100_000_000;

/// Base price between two postcodes.
///
/// Both postcodes are read as base-36 numbers; the price is their absolute
/// difference divided by [`POSTCODE_DISTANCE_PER_UNIT`], rounded down.
pub fn compute_base_price(pickup: &str, delivery: &str) -> QuoteResult<i64> {
    let pickup_value =
        postcode::decode(pickup).ok_or_else(|| QuoteError::InvalidPostcode(pickup.to_string()))?;
    let delivery_value = postcode::decode(delivery)
        .ok_or_else(|| QuoteError::InvalidPostcode(delivery.to_string()))?;

    // Both values are non-negative, so the quotient always fits in an i64.
    let units = pickup_value.abs_diff(delivery_value) / POSTCODE_DISTANCE_PER_UNIT;
    Ok(units as i64)
}

/// Resolve a vehicle name against the supported vehicles.
pub fn parse_vehicle(vehicle: &str) -> QuoteResult<VehicleType> {
    vehicle
        .parse()
        .map_err(|_| QuoteError::InvalidVehicle(vehicle.to_string()))
}

/// Base price with the vehicle markup applied.
///
/// Ties round to even, so `2.5` becomes `2` and `3.5` becomes `4`.
pub fn apply_vehicle_markup(base_price: i64, vehicle: VehicleType) -> i64 {
    match vehicle.markup() {
        Some(factor) => (base_price as f64 * factor).round_ties_even() as i64,
        None => base_price,
    }
}

/// Price every offer on top of `vehicle_price`, cheapest first.
///
/// The sort is stable: offers with equal amounts keep their catalog order.
/// An amount that does not fit in an `i64` fails the whole list.
pub fn build_price_list(
    vehicle_price: i64,
    offers: Vec<CarrierOffer>,
) -> QuoteResult<Vec<CarrierPrice>> {
    let mut price_list = offers
        .into_iter()
        .map(|offer| {
            let amount = vehicle_price
                .checked_add(offer.markup)
                .ok_or_else(|| QuoteError::PriceOutOfRange(offer.name.clone()))?;
            Ok(CarrierPrice {
                carrier_name: offer.name,
                amount,
                delivery_time: offer.delivery_time,
            })
        })
        .collect::<QuoteResult<Vec<_>>>()?;

    price_list.sort_by_key(|price| price.amount);
    Ok(price_list)
}
