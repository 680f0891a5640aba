//! HTTP request handlers.

use axum::{extract::State, Json};

use crate::api::types::*;
use crate::domain::{BasicQuote, CarrierQuote, Route, VehicleQuote, VehicleRoute};
use crate::error::QuoteResult;
use crate::AppState;

/// Quote a delivery from its postcodes.
///
/// POST /quotes, POST /quotes/basic
#[utoipa::path(
    post,
    path = "/quotes/basic",
    request_body = Route,
    responses(
        (status = 200, description = "Quote computed", body = BasicQuote),
        (status = 400, description = "Invalid postcode", body = crate::error::ErrorResponse)
    ),
    tag = "quotes"
)]
pub async fn basic_quote(
    State(state): State<AppState>,
    Json(request): Json<Route>,
) -> QuoteResult<Json<BasicQuote>> {
    let quote = state.engine.basic_quote(&request).inspect_err(|e| {
        tracing::info!(error = %e, "Basic quote rejected");
    })?;

    tracing::info!(
        pickup_postcode = %quote.route.pickup_postcode,
        delivery_postcode = %quote.route.delivery_postcode,
        price = quote.price,
        "Basic quote computed"
    );

    Ok(Json(quote))
}

/// Quote a delivery for a vehicle.
///
/// POST /quotes/byvehicle
#[utoipa::path(
    post,
    path = "/quotes/byvehicle",
    request_body = VehicleRoute,
    responses(
        (status = 200, description = "Quote computed", body = VehicleQuote),
        (status = 400, description = "Invalid postcode or vehicle", body = crate::error::ErrorResponse)
    ),
    tag = "quotes"
)]
pub async fn quote_by_vehicle(
    State(state): State<AppState>,
    Json(request): Json<VehicleRoute>,
) -> QuoteResult<Json<VehicleQuote>> {
    let quote = state.engine.vehicle_quote(&request).inspect_err(|e| {
        tracing::info!(error = %e, vehicle = %request.vehicle, "Vehicle quote rejected");
    })?;

    tracing::info!(
        pickup_postcode = %quote.route.pickup_postcode,
        delivery_postcode = %quote.route.delivery_postcode,
        vehicle = %quote.vehicle,
        price = quote.price,
        "Vehicle quote computed"
    );

    Ok(Json(quote))
}

/// Quote a delivery for a vehicle with every available carrier.
///
/// POST /quotes/bycarrier
#[utoipa::path(
    post,
    path = "/quotes/bycarrier",
    request_body = VehicleRoute,
    responses(
        (status = 200, description = "Carrier prices, cheapest first", body = CarrierQuote),
        (status = 400, description = "Invalid postcode or vehicle, or no carrier serves the vehicle", body = crate::error::ErrorResponse)
    ),
    tag = "quotes"
)]
pub async fn quote_by_carrier(
    State(state): State<AppState>,
    Json(request): Json<VehicleRoute>,
) -> QuoteResult<Json<CarrierQuote>> {
    let quote = state.engine.carrier_quote(&request).inspect_err(|e| {
        tracing::info!(error = %e, vehicle = %request.vehicle, "Carrier quote rejected");
    })?;

    tracing::info!(
        pickup_postcode = %quote.route.pickup_postcode,
        delivery_postcode = %quote.route.delivery_postcode,
        vehicle = %quote.vehicle,
        carriers = quote.price_list.len(),
        "Carrier quote computed"
    );

    Ok(Json(quote))
}

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog: state.engine.catalog_name().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
