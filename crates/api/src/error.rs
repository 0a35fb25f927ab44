//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inventory::LedgerError;
use reservations::ReservationError;
use serde_json::json;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Request failed validation; every message is reported.
    BadRequest(Vec<String>),
    /// Registry error.
    Reservation(ReservationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(details) => bad_request(details),
            ApiError::Reservation(err) => reservation_error_to_response(err),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn bad_request(details: Vec<String>) -> (StatusCode, serde_json::Value) {
    (
        StatusCode::BAD_REQUEST,
        json!({ "error": "Bad Request", "details": details }),
    )
}

fn not_found(message: &str) -> (StatusCode, serde_json::Value) {
    (
        StatusCode::NOT_FOUND,
        json!({ "error": "Not Found", "message": message }),
    )
}

fn reservation_error_to_response(err: ReservationError) -> (StatusCode, serde_json::Value) {
    match err {
        ReservationError::Validation(details) => bad_request(details),
        ReservationError::Conflict(LedgerError::InsufficientCapacity {
            requested,
            available,
        }) => (
            StatusCode::CONFLICT,
            json!({
                "error": "Not enough seats left",
                "availableSeats": available,
                "requestedSeats": requested,
            }),
        ),
        ReservationError::Conflict(LedgerError::VersionConflict { .. }) => (
            StatusCode::CONFLICT,
            json!({
                "error": "Not enough seats left",
                "message": "Conflict detected - please retry",
            }),
        ),
        ReservationError::NotFound(_) => not_found("Reservation not found"),
        ReservationError::AlreadyCancelled(_) => not_found("Reservation already cancelled"),
        err @ ReservationError::DuplicateId(_) => {
            tracing::error!(error = %err, "internal server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": err.to_string() }),
            )
        }
    }
}

impl From<ReservationError> for ApiError {
    fn from(err: ReservationError) -> Self {
        ApiError::Reservation(err)
    }
}
