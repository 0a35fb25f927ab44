//! Shared types for the seat reservation engine.
//!
//! Identifiers, event metadata and the field validation rules used both by
//! the HTTP layer and, defensively, by the reservation registry.

pub mod types;
pub mod validation;

pub use types::{EventInfo, PartnerId, ReservationId};
pub use validation::{
    MAX_SEATS_PER_RESERVATION, ValidationError, validate_partner_id, validate_seats,
    validate_seats_value,
};
