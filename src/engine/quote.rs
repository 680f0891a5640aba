//! Quote Engine - builds the three kinds of quotes.
//!
//! Each operation validates its input up front and stops at the first
//! failure, so a rejected request never yields a partial quote.

use std::sync::Arc;

use crate::catalog::CarrierCatalog;
use crate::domain::{BasicQuote, CarrierQuote, Route, VehicleQuote, VehicleRoute};
use crate::engine::pricing::{
    apply_vehicle_markup, build_price_list, compute_base_price, parse_vehicle,
};
use crate::error::{QuoteError, QuoteResult};

/// Computes delivery quotes against a carrier catalog.
///
/// Holds no mutable state; one instance is shared by all requests.
pub struct QuoteEngine {
    catalog: Arc<dyn CarrierCatalog>,
}

impl QuoteEngine {
    /// Create a new engine over the given catalog.
    pub fn new(catalog: Arc<dyn CarrierCatalog>) -> Self {
        Self { catalog }
    }

    /// Name of the catalog backing this engine.
    pub fn catalog_name(&self) -> &'static str {
        self.catalog.name()
    }

    /// Price a delivery from its postcodes alone.
    pub fn basic_quote(&self, route: &Route) -> QuoteResult<BasicQuote> {
        tracing::debug!(
            pickup_postcode = %route.pickup_postcode,
            delivery_postcode = %route.delivery_postcode,
            "Computing basic quote"
        );

        let price = compute_base_price(&route.pickup_postcode, &route.delivery_postcode)?;

        Ok(BasicQuote {
            route: route.clone(),
            price,
        })
    }

    /// Price a delivery for a specific vehicle.
    pub fn vehicle_quote(&self, request: &VehicleRoute) -> QuoteResult<VehicleQuote> {
        tracing::debug!(
            pickup_postcode = %request.route.pickup_postcode,
            delivery_postcode = %request.route.delivery_postcode,
            vehicle = %request.vehicle,
            "Computing vehicle quote"
        );

        let vehicle = parse_vehicle(&request.vehicle)?;
        let base_price = compute_base_price(
            &request.route.pickup_postcode,
            &request.route.delivery_postcode,
        )?;

        Ok(VehicleQuote {
            route: request.route.clone(),
            vehicle,
            price: apply_vehicle_markup(base_price, vehicle),
        })
    }

    /// Price a delivery for a vehicle with every carrier serving it.
    ///
    /// The price list is sorted by amount, cheapest first.
    pub fn carrier_quote(&self, request: &VehicleRoute) -> QuoteResult<CarrierQuote> {
        tracing::debug!(
            pickup_postcode = %request.route.pickup_postcode,
            delivery_postcode = %request.route.delivery_postcode,
            vehicle = %request.vehicle,
            catalog = self.catalog.name(),
            "Computing carrier quote"
        );

        let vehicle = parse_vehicle(&request.vehicle)?;
        let base_price = compute_base_price(
            &request.route.pickup_postcode,
            &request.route.delivery_postcode,
        )?;
        let vehicle_price = apply_vehicle_markup(base_price, vehicle);

        let offers = self.catalog.find_offers(vehicle);
        if offers.is_empty() {
            return Err(QuoteError::NoCarrierServices(vehicle));
        }

        tracing::debug!(
            vehicle = %vehicle,
            vehicle_price,
            offers = offers.len(),
            "Carrier offers found"
        );

        Ok(CarrierQuote {
            route: request.route.clone(),
            vehicle,
            price_list: build_price_list(vehicle_price, offers)?,
        })
    }
}
