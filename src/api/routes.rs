//! Route definitions for the API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::basic_quote,
        handlers::quote_by_vehicle,
        handlers::quote_by_carrier,
        handlers::health_check,
    ),
    components(schemas(
        crate::api::types::HealthResponse,
        crate::error::ErrorResponse,
        crate::domain::Route,
        crate::domain::VehicleRoute,
        crate::domain::VehicleType,
        crate::domain::BasicQuote,
        crate::domain::VehicleQuote,
        crate::domain::CarrierQuote,
        crate::domain::CarrierPrice,
    )),
    tags(
        (name = "quotes", description = "Delivery quote endpoints"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Carrier Pricing API",
        version = "0.1.0",
        description = "Prices deliveries between postcodes by vehicle and carrier",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Quotes
        .route("/quotes", post(handlers::basic_quote))
        .route("/quotes/basic", post(handlers::basic_quote))
        .route("/quotes/byvehicle", post(handlers::quote_by_vehicle))
        .route("/quotes/bycarrier", post(handlers::quote_by_carrier))
        // Health
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
