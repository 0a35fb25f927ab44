use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{LedgerError, LedgerSnapshot, Result, SeatLedger, Version};

#[derive(Debug)]
struct LedgerState {
    total_seats: u32,
    available_seats: u32,
    version: Version,
}

impl LedgerState {
    fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            total_seats: self.total_seats,
            available_seats: self.available_seats,
            version: self.version,
        }
    }
}

/// In-memory seat ledger.
///
/// Cloning yields another handle to the same counters. Mutations are
/// serialized by a single write lock; snapshots share a read lock.
///
/// Only ledgers built with [`InMemorySeatLedger::for_event`] publish the
/// `inventory_seats_available` gauge, labelled with their event id.
#[derive(Debug, Clone)]
pub struct InMemorySeatLedger {
    state: Arc<RwLock<LedgerState>>,
    event_id: Option<Arc<str>>,
}

impl InMemorySeatLedger {
    /// Creates an unlabelled ledger with every seat available, at version 0.
    pub fn new(total_seats: u32) -> Self {
        Self {
            state: Arc::new(RwLock::new(LedgerState {
                total_seats,
                available_seats: total_seats,
                version: Version::initial(),
            })),
            event_id: None,
        }
    }

    /// Creates a ledger that reports its availability under `event_id`.
    pub fn for_event(event_id: &str, total_seats: u32) -> Self {
        let ledger = Self {
            event_id: Some(Arc::from(event_id)),
            ..Self::new(total_seats)
        };
        ledger.publish_available(total_seats);
        ledger
    }

    /// Event id used as the metrics label, if any.
    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    fn publish_available(&self, available: u32) {
        if let Some(event_id) = &self.event_id {
            metrics::gauge!("inventory_seats_available", "event_id" => event_id.to_string())
                .set(f64::from(available));
        }
    }

    /// Returns the fixed seat total.
    pub async fn total_seats(&self) -> u32 {
        self.state.read().await.total_seats
    }
}

#[async_trait]
impl SeatLedger for InMemorySeatLedger {
    async fn reserve(&self, requested: u32, expected_version: Version) -> Result<Version> {
        let mut state = self.state.write().await;

        if state.version != expected_version {
            tracing::warn!(
                expected = %expected_version,
                actual = %state.version,
                "version conflict on reserve"
            );
            metrics::counter!("inventory_version_conflicts_total").increment(1);
            return Err(LedgerError::VersionConflict {
                expected: expected_version,
                actual: state.version,
            });
        }

        if state.available_seats < requested {
            tracing::warn!(
                available = state.available_seats,
                requested,
                "not enough seats"
            );
            metrics::counter!("inventory_capacity_rejections_total").increment(1);
            return Err(LedgerError::InsufficientCapacity {
                requested,
                available: state.available_seats,
            });
        }

        state.available_seats -= requested;
        state.version = state.version.next();

        tracing::debug!(
            seats = requested,
            available = state.available_seats,
            version = %state.version,
            "seats reserved"
        );
        self.publish_available(state.available_seats);

        Ok(state.version)
    }

    async fn release(&self, seats: u32) -> Version {
        let mut state = self.state.write().await;

        let restored = state.available_seats.saturating_add(seats);
        debug_assert!(
            restored <= state.total_seats,
            "released more seats than were reserved"
        );
        if restored > state.total_seats {
            tracing::error!(
                seats,
                available = state.available_seats,
                total = state.total_seats,
                "release exceeds reserved seats; clamping to total"
            );
        }
        state.available_seats = restored.min(state.total_seats);
        state.version = state.version.next();

        tracing::debug!(
            seats,
            available = state.available_seats,
            version = %state.version,
            "seats released"
        );
        self.publish_available(state.available_seats);

        state.version
    }

    async fn snapshot(&self) -> LedgerSnapshot {
        self.state.read().await.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeatLedgerExt;

    #[tokio::test]
    async fn new_ledger_is_full_at_version_zero() {
        let ledger = InMemorySeatLedger::new(500);
        let snapshot = ledger.snapshot().await;

        assert_eq!(snapshot.total_seats, 500);
        assert_eq!(snapshot.available_seats, 500);
        assert_eq!(snapshot.version, Version::initial());
        assert_eq!(snapshot.reserved_seats(), 0);
    }

    #[tokio::test]
    async fn reserve_debits_and_bumps_version() {
        let ledger = InMemorySeatLedger::new(500);

        let version = ledger.reserve(5, Version::initial()).await.unwrap();
        assert_eq!(version, Version::new(1));

        let snapshot = ledger.snapshot().await;
        assert_eq!(snapshot.available_seats, 495);
        assert_eq!(snapshot.version, Version::new(1));
    }

    #[tokio::test]
    async fn stale_version_is_rejected_without_side_effects() {
        let ledger = InMemorySeatLedger::new(500);
        ledger.reserve(5, Version::initial()).await.unwrap();

        let result = ledger.reserve(5, Version::initial()).await;
        assert_eq!(
            result,
            Err(LedgerError::VersionConflict {
                expected: Version::initial(),
                actual: Version::new(1),
            })
        );

        let snapshot = ledger.snapshot().await;
        assert_eq!(snapshot.available_seats, 495);
        assert_eq!(snapshot.version, Version::new(1));
    }

    #[tokio::test]
    async fn insufficient_capacity_is_rejected_without_side_effects() {
        let ledger = InMemorySeatLedger::new(4);

        let result = ledger.reserve(5, Version::initial()).await;
        assert_eq!(
            result,
            Err(LedgerError::InsufficientCapacity {
                requested: 5,
                available: 4,
            })
        );

        let snapshot = ledger.snapshot().await;
        assert_eq!(snapshot.available_seats, 4);
        assert_eq!(snapshot.version, Version::initial());
    }

    #[tokio::test]
    async fn version_is_checked_before_capacity() {
        let ledger = InMemorySeatLedger::new(5);
        ledger.reserve(5, Version::initial()).await.unwrap();

        let result = ledger.reserve(5, Version::initial()).await;
        assert!(matches!(result, Err(LedgerError::VersionConflict { .. })));
    }

    #[tokio::test]
    async fn exact_remaining_capacity_can_be_taken() {
        let ledger = InMemorySeatLedger::new(10);
        ledger.reserve(10, Version::initial()).await.unwrap();
        assert_eq!(ledger.available_seats().await, 0);
    }

    #[tokio::test]
    async fn release_credits_and_bumps_version() {
        let ledger = InMemorySeatLedger::new(500);
        ledger.reserve(5, Version::initial()).await.unwrap();

        let version = ledger.release(5).await;
        assert_eq!(version, Version::new(2));

        let snapshot = ledger.snapshot().await;
        assert_eq!(snapshot.available_seats, 500);
        assert_eq!(snapshot.version, Version::new(2));
    }

    #[tokio::test]
    async fn clones_share_counters() {
        let ledger = InMemorySeatLedger::new(20);
        let other = ledger.clone();

        other.reserve(3, Version::initial()).await.unwrap();
        assert_eq!(ledger.available_seats().await, 17);
        assert_eq!(ledger.total_seats().await, 20);
    }

    #[tokio::test]
    async fn reserve_at_current_uses_live_version() {
        let ledger = InMemorySeatLedger::new(10);
        ledger.reserve(2, Version::initial()).await.unwrap();

        let version = ledger.reserve_at_current(3).await.unwrap();
        assert_eq!(version, Version::new(2));

        let result = ledger.reserve_at_current(6).await;
        assert_eq!(
            result,
            Err(LedgerError::InsufficientCapacity {
                requested: 6,
                available: 5,
            })
        );
    }

    #[tokio::test]
    async fn event_ledgers_are_independent_and_labelled() {
        let meetup = InMemorySeatLedger::for_event("meetup", 10);
        let conf = InMemorySeatLedger::for_event("conf", 20);
        assert_eq!(meetup.event_id(), Some("meetup"));
        assert_eq!(InMemorySeatLedger::new(5).event_id(), None);

        meetup.reserve(4, Version::initial()).await.unwrap();
        assert_eq!(meetup.available_seats().await, 6);
        assert_eq!(conf.available_seats().await, 20);

        let clone = meetup.clone();
        assert_eq!(clone.event_id(), Some("meetup"));
    }

    #[tokio::test]
    async fn snapshot_serializes_camel_case() {
        let ledger = InMemorySeatLedger::new(3);
        let json = serde_json::to_value(ledger.snapshot().await).unwrap();
        assert_eq!(json["totalSeats"], 3);
        assert_eq!(json["availableSeats"], 3);
        assert_eq!(json["version"], 0);
    }
}
