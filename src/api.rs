//! Rental API Bindings
//!
//! Thin HTTP wrappers over the dashboard backend, one function per endpoint.

use std::fmt;

use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::models::{Rental, RentalSummary};

#[derive(Debug)]
pub enum ApiError {
    /// Request never completed (network failure, abort)
    Network(String),
    /// Server answered with a non-success status
    Status(u16),
    /// Body was not the expected JSON shape
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {e}"),
            ApiError::Status(code) => write!(f, "server returned status {code}"),
            ApiError::Decode(e) => write!(f, "invalid response body: {e}"),
        }
    }
}

/// Fetch one rental with its customer, line items, payments and creator.
///
/// The optional `signal` ties the request to the caller's lifetime; an aborted
/// request resolves to `ApiError::Network`.
pub async fn fetch_rental(id: &str, signal: Option<&AbortSignal>) -> Result<Rental, ApiError> {
    let response = Request::get(&format!("/api/rentals/{id}"))
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<Rental>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the rentals listing.
pub async fn list_rentals() -> Result<Vec<RentalSummary>, ApiError> {
    let response = Request::get("/api/rentals")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<Vec<RentalSummary>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
