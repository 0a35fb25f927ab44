//! Event state endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use inventory::SeatLedger;
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStateResponse {
    pub event_id: String,
    pub name: String,
    pub total_seats: u32,
    pub available_seats: u32,
    pub version: u64,
}

/// GET /event — event metadata plus live seat counters.
#[tracing::instrument(skip(state))]
pub async fn get<L: SeatLedger + 'static>(
    State(state): State<Arc<AppState<L>>>,
) -> Json<EventStateResponse> {
    let snapshot = state.registry.event_state().await;

    Json(EventStateResponse {
        event_id: state.event.event_id.clone(),
        name: state.event.name.clone(),
        total_seats: snapshot.total_seats,
        available_seats: snapshot.available_seats,
        version: snapshot.version.as_u64(),
    })
}
