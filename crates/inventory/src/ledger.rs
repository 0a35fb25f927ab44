use async_trait::async_trait;
use serde::Serialize;

use crate::{LedgerError, Result, Version};

/// Point-in-time view of the ledger counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub total_seats: u32,
    pub available_seats: u32,
    pub version: Version,
}

impl LedgerSnapshot {
    /// Seats currently held by reservations.
    pub fn reserved_seats(&self) -> u32 {
        self.total_seats - self.available_seats
    }

    /// Whether `seats` could be reserved as of this snapshot.
    pub fn can_fit(&self, seats: u32) -> bool {
        self.available_seats >= seats
    }
}

/// Authoritative seat counter for a single event.
///
/// `reserve` and `release` are the only mutation paths and each executes
/// as one indivisible step with respect to the other. Implementations must
/// be thread-safe (Send + Sync).
#[async_trait]
pub trait SeatLedger: Send + Sync {
    /// Debits `requested` seats if the ledger is still at `expected_version`.
    ///
    /// The version is checked before capacity: a stale caller sees
    /// `VersionConflict` even when capacity would also be short.
    /// Returns the new version on success. A failed attempt leaves both
    /// counters and the version untouched.
    async fn reserve(&self, requested: u32, expected_version: Version) -> Result<Version>;

    /// Credits back seats debited by an earlier successful `reserve`.
    ///
    /// Callers must release each reservation at most once and with the
    /// exact seat count that was debited.
    async fn release(&self, seats: u32) -> Version;

    /// Returns the current counters. Advisory only; never use it as a
    /// commit decision.
    async fn snapshot(&self) -> LedgerSnapshot;
}

/// Convenience methods built on top of [`SeatLedger`].
#[async_trait]
pub trait SeatLedgerExt: SeatLedger {
    /// Reserves against whatever version is current right now.
    ///
    /// Still fails with `VersionConflict` if another writer slips in
    /// between the read and the commit; there is no retry.
    async fn reserve_at_current(&self, requested: u32) -> Result<Version> {
        let snapshot = self.snapshot().await;
        tracing::debug!(
            version = %snapshot.version,
            available = snapshot.available_seats,
            "read ledger state"
        );
        // Cheap rejection; `reserve` re-checks capacity under the lock.
        if !snapshot.can_fit(requested) {
            return Err(LedgerError::InsufficientCapacity {
                requested,
                available: snapshot.available_seats,
            });
        }
        self.reserve(requested, snapshot.version).await
    }

    /// Returns the seats still available.
    async fn available_seats(&self) -> u32 {
        self.snapshot().await.available_seats
    }
}

impl<T: SeatLedger + ?Sized> SeatLedgerExt for T {}
