pub mod event;
pub mod health;
pub mod metrics;
pub mod reservations;

use ::reservations::ReservationRegistry;
use common::EventInfo;
use inventory::SeatLedger;

/// Shared application state accessible from all handlers.
pub struct AppState<L: SeatLedger> {
    pub event: EventInfo,
    pub registry: ReservationRegistry<L>,
}
