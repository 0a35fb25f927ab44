//! Reservation registry for the seat reservation engine.
//!
//! This crate owns the reservation records and their lifecycle:
//! - `ReservationRegistry` creates records only after a successful ledger
//!   debit and credits seats back on cancellation
//! - `IdGenerator` is the pluggable source of reservation IDs
//! - `ReservationError` carries the typed failure outcomes

pub mod error;
pub mod id;
pub mod registry;
pub mod reservation;

pub use error::{ErrorKind, ReservationError, Result};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use registry::ReservationRegistry;
pub use reservation::{PartnerReservations, Reservation, ReservationStatus};
