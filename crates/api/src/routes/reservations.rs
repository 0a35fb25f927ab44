//! Reservation create, cancel and listing endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{ReservationId, validate_partner_id, validate_seats_value};
use inventory::SeatLedger;
use ::reservations::{PartnerReservations, ReservationStatus};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AppState;
use crate::error::ApiError;

// -- Request types --

/// Raw create body. Fields stay untyped so that wrong JSON types surface as
/// validation messages rather than deserialization failures.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub partner_id: Option<Value>,
    pub seats: Option<Value>,
}

// -- Response types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreatedResponse {
    pub reservation_id: ReservationId,
    pub seats: u32,
    pub status: ReservationStatus,
}

/// Checks every field and collects all failures.
pub fn validate_create_request(req: &CreateReservationRequest) -> Result<(&str, u32), Vec<String>> {
    let partner_id = req.partner_id.as_ref().and_then(Value::as_str);

    match (
        validate_partner_id(partner_id),
        validate_seats_value(req.seats.as_ref()),
    ) {
        (Ok(()), Ok(seats)) => Ok((partner_id.unwrap_or_default(), seats)),
        (partner, seats) => Err(partner
            .err()
            .into_iter()
            .chain(seats.err())
            .map(|e| e.to_string())
            .collect()),
    }
}

// -- Handlers --

/// POST /reservations — reserve seats for a partner.
#[tracing::instrument(skip(state, payload))]
pub async fn create<L: SeatLedger + 'static>(
    State(state): State<Arc<AppState<L>>>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReservationCreatedResponse>), ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(vec![rejection.body_text()]))?;
    tracing::debug!(?req, "reservation request");

    let (partner_id, seats) = validate_create_request(&req).map_err(|details| {
        metrics::counter!("api_validation_failures_total").increment(1);
        ApiError::BadRequest(details)
    })?;

    let reservation = state
        .registry
        .create_reservation(partner_id, seats)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationCreatedResponse {
            reservation_id: reservation.reservation_id,
            seats: reservation.seats,
            status: reservation.status,
        }),
    ))
}

/// DELETE /reservations/:id — cancel a reservation, keeping it for audit.
#[tracing::instrument(skip(state))]
pub async fn cancel<L: SeatLedger + 'static>(
    State(state): State<Arc<AppState<L>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .registry
        .cancel_reservation(&ReservationId::new(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /reservations/:partner_id — confirmed reservations for a partner.
#[tracing::instrument(skip(state))]
pub async fn list_for_partner<L: SeatLedger + 'static>(
    State(state): State<Arc<AppState<L>>>,
    Path(partner_id): Path<String>,
) -> Json<PartnerReservations> {
    Json(state.registry.list_by_partner(&partner_id).await)
}
