//! Reservation ID generation.

use std::sync::atomic::{AtomicU64, Ordering};

use common::ReservationId;

/// Source of fresh reservation IDs.
pub trait IdGenerator: Send + Sync {
    /// Returns an ID not previously returned by this generator.
    fn next_id(&self) -> ReservationId;
}

/// Random UUID v4 IDs. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> ReservationId {
        ReservationId::random()
    }
}

/// Deterministic `RES-0001`, `RES-0002`, ... IDs.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ReservationId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ReservationId::new(format!("RES-{n:04}"))
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for std::sync::Arc<G> {
    fn next_id(&self) -> ReservationId {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_padded_and_increasing() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id().as_str(), "RES-0001");
        assert_eq!(ids.next_id().as_str(), "RES-0002");
    }

    #[test]
    fn uuid_ids_differ() {
        let ids = UuidIdGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
