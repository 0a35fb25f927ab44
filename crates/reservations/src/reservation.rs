//! Reservation records.

use chrono::{DateTime, Utc};
use common::{PartnerId, ReservationId};
use serde::Serialize;

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservationStatus::Confirmed => write!(f, "confirmed"),
            ReservationStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A block of seats held by a partner.
///
/// `seats` is exactly what was debited from the ledger at creation and
/// exactly what is credited back on cancellation. Records are never
/// removed; cancellation only flips the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub partner_id: PartnerId,
    pub seats: u32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub(crate) fn confirmed(id: ReservationId, partner_id: PartnerId, seats: u32) -> Self {
        Self {
            reservation_id: id,
            partner_id,
            seats,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
            cancelled_at: None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }

    pub(crate) fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
        self.cancelled_at = Some(Utc::now());
    }
}

/// Confirmed reservations held by one partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerReservations {
    pub partner_id: String,
    pub reservations: Vec<Reservation>,
    pub total_seats: u32,
}
