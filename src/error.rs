//! Error types for the carrier pricing service.
//!
//! Quote errors are per-request client errors and map to HTTP responses.
//! Catalog errors only occur while loading the catalog at startup.

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::VehicleType;

/// Failure to compute a quote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Invalid postcode: '{0}'")]
    InvalidPostcode(String),

    #[error("Invalid vehicle provided: '{0}'")]
    InvalidVehicle(String),

    #[error("No available carrier services for vehicle '{0}'")]
    NoCarrierServices(VehicleType),

    #[error("Price for carrier '{0}' is out of range")]
    PriceOutOfRange(String),
}

impl QuoteError {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            QuoteError::InvalidPostcode(_) => "INVALID_POSTCODE",
            QuoteError::InvalidVehicle(_) => "INVALID_VEHICLE",
            QuoteError::NoCarrierServices(_) => "NO_CARRIER_SERVICES",
            QuoteError::PriceOutOfRange(_) => "PRICE_OUT_OF_RANGE",
        }
    }
}

/// Failure to load a carrier catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog source 'file' requires catalog.path to be set")]
    MissingPath,

    #[error("Invalid offer from carrier '{carrier}': {reason}")]
    InvalidOffer { carrier: String, reason: String },
}

/// Error response body for API clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            QuoteError::InvalidVehicle(_) => (
                StatusCode::BAD_REQUEST,
                Some(format!(
                    "Supported vehicles: {}",
                    VehicleType::ALL.map(|v| v.as_str()).join(", ")
                )),
            ),
            QuoteError::InvalidPostcode(_) | QuoteError::NoCarrierServices(_) => {
                (StatusCode::BAD_REQUEST, None)
            }
            QuoteError::PriceOutOfRange(carrier) => {
                // Catalog data problem, not a client mistake
                tracing::error!(carrier = %carrier, "Carrier price overflowed");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for quote operations.
pub type QuoteResult<T> = Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_errors_are_client_errors() {
        let errors = [
            QuoteError::InvalidPostcode("_".to_string()),
            QuoteError::InvalidVehicle("scooter".to_string()),
            QuoteError::NoCarrierServices(VehicleType::Bicycle),
        ];

        for error in errors {
            assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_price_out_of_range_is_server_error() {
        let response = QuoteError::PriceOutOfRange("Hercules".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QuoteError::InvalidVehicle("scooter".to_string()).to_string(),
            "Invalid vehicle provided: 'scooter'"
        );
        assert_eq!(
            QuoteError::NoCarrierServices(VehicleType::LargeVan).to_string(),
            "No available carrier services for vehicle 'large_van'"
        );
    }
}
