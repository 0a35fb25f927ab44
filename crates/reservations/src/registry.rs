//! Reservation registry: record lifecycle kept in lockstep with the ledger.

use std::collections::HashMap;

use common::{PartnerId, ReservationId, validate_seats};
use inventory::{LedgerSnapshot, SeatLedger, SeatLedgerExt};
use tokio::sync::RwLock;

use crate::error::{ReservationError, Result};
use crate::id::{IdGenerator, UuidIdGenerator};
use crate::reservation::{PartnerReservations, Reservation};

/// Records in insertion order, indexed by ID.
#[derive(Debug, Default)]
struct RecordStore {
    records: Vec<Reservation>,
    index: HashMap<ReservationId, usize>,
}

impl RecordStore {
    fn contains(&self, id: &ReservationId) -> bool {
        self.index.contains_key(id)
    }

    fn insert(&mut self, reservation: Reservation) {
        self.index
            .insert(reservation.reservation_id.clone(), self.records.len());
        self.records.push(reservation);
    }

    fn get(&self, id: &ReservationId) -> Option<&Reservation> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    fn get_mut(&mut self, id: &ReservationId) -> Option<&mut Reservation> {
        self.index.get(id).map(|&i| &mut self.records[i])
    }
}

/// Owns reservation records for one event and keeps them consistent with
/// its seat ledger.
///
/// Every confirmed record's seats are debited from the ledger, and a
/// cancelled record's seats have been credited back exactly once, so at
/// rest `available = total - sum(confirmed seats)`.
///
/// Conflicts are returned to the caller immediately; the registry never
/// retries on its own.
pub struct ReservationRegistry<L: SeatLedger, G: IdGenerator = UuidIdGenerator> {
    ledger: L,
    ids: G,
    store: RwLock<RecordStore>,
}

impl<L: SeatLedger> ReservationRegistry<L> {
    /// Creates a registry issuing random UUID reservation IDs.
    pub fn new(ledger: L) -> Self {
        Self::with_id_generator(ledger, UuidIdGenerator)
    }
}

impl<L: SeatLedger, G: IdGenerator> ReservationRegistry<L, G> {
    /// Creates a registry with a custom ID generator.
    pub fn with_id_generator(ledger: L, ids: G) -> Self {
        Self {
            ledger,
            ids,
            store: RwLock::new(RecordStore::default()),
        }
    }

    /// Returns a reference to the underlying ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Reserves `seats` for `partner_id` in a single optimistic attempt.
    ///
    /// Reads the ledger, then commits against the version it read. Either
    /// both the debit and the record land, or neither does: the store's
    /// write lock is held from before the ledger read until the insert, and
    /// nothing is awaited between a successful debit and the insert, so a
    /// dropped call cannot strand debited seats.
    #[tracing::instrument(skip(self))]
    pub async fn create_reservation(&self, partner_id: &str, seats: u32) -> Result<Reservation> {
        let (partner_id, seats) = match (PartnerId::parse(partner_id), validate_seats(seats)) {
            (Ok(partner_id), Ok(seats)) => (partner_id, seats),
            (partner, seats) => {
                let errors: Vec<_> = partner.err().into_iter().chain(seats.err()).collect();
                return Err(errors.into());
            }
        };

        let mut store = self.store.write().await;

        let id = self.ids.next_id();
        if store.contains(&id) {
            tracing::error!(reservation_id = %id, "id generator returned a duplicate id");
            return Err(ReservationError::DuplicateId(id));
        }

        if let Err(e) = self.ledger.reserve_at_current(seats).await {
            metrics::counter!("reservations_conflicts_total").increment(1);
            return Err(e.into());
        }

        let reservation = Reservation::confirmed(id.clone(), partner_id, seats);
        store.insert(reservation.clone());

        metrics::counter!("reservations_created_total").increment(1);
        tracing::info!(reservation_id = %id, seats, "reservation created");

        Ok(reservation)
    }

    /// Cancels a confirmed reservation and returns its seats to the ledger.
    ///
    /// Cancelling twice fails with `AlreadyCancelled`. The status check,
    /// ledger release and status change all happen under the store's write
    /// lock, so concurrent cancels of one ID cannot both succeed.
    #[tracing::instrument(skip(self))]
    pub async fn cancel_reservation(&self, id: &ReservationId) -> Result<Reservation> {
        let mut store = self.store.write().await;

        let reservation = store
            .get_mut(id)
            .ok_or_else(|| ReservationError::NotFound(id.clone()))?;

        if !reservation.is_confirmed() {
            return Err(ReservationError::AlreadyCancelled(id.clone()));
        }

        let version = self.ledger.release(reservation.seats).await;
        reservation.cancel();

        metrics::counter!("reservations_cancelled_total").increment(1);
        tracing::info!(reservation_id = %id, seats = reservation.seats, %version, "reservation cancelled");

        Ok(reservation.clone())
    }

    /// Lists a partner's confirmed reservations in creation order, with
    /// their seat total. Cancelled records are left out of both.
    #[tracing::instrument(skip(self))]
    pub async fn list_by_partner(&self, partner_id: &str) -> PartnerReservations {
        let store = self.store.read().await;

        let reservations: Vec<Reservation> = store
            .records
            .iter()
            .filter(|r| r.partner_id.as_str() == partner_id && r.is_confirmed())
            .cloned()
            .collect();
        let total_seats = reservations.iter().map(|r| r.seats).sum();

        PartnerReservations {
            partner_id: partner_id.to_string(),
            reservations,
            total_seats,
        }
    }

    /// Looks up any reservation, cancelled ones included.
    pub async fn get(&self, id: &ReservationId) -> Option<Reservation> {
        self.store.read().await.get(id).cloned()
    }

    /// Returns the ledger counters for the event.
    pub async fn event_state(&self) -> LedgerSnapshot {
        self.ledger.snapshot().await
    }

    /// Total number of records, cancelled ones included.
    pub async fn reservation_count(&self) -> usize {
        self.store.read().await.records.len()
    }

    /// Sum of seats across confirmed records.
    pub async fn confirmed_seats(&self) -> u32 {
        self.store
            .read()
            .await
            .records
            .iter()
            .filter(|r| r.is_confirmed())
            .map(|r| r.seats)
            .sum()
    }
}
