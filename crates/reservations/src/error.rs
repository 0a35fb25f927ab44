//! Registry error types.

use common::{ReservationId, ValidationError};
use inventory::LedgerError;
use thiserror::Error;

/// Coarse classification of a registry failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input. Fix the request; never retried automatically.
    Validation,
    /// Lost a race or ran out of seats. Re-read state and retry the create.
    Conflict,
    /// Unknown or already-cancelled reservation. Terminal.
    NotFound,
    /// Broken internal assumption.
    Internal,
}

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum ReservationError {
    /// One or more request fields failed validation.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The ledger refused the reservation.
    #[error("Conflict: {0}")]
    Conflict(#[from] LedgerError),

    /// No reservation with this ID exists.
    #[error("Reservation not found: {0}")]
    NotFound(ReservationId),

    /// The reservation exists but has already been cancelled.
    #[error("Reservation already cancelled: {0}")]
    AlreadyCancelled(ReservationId),

    /// The ID generator produced an ID that is already in use.
    #[error("Duplicate reservation id generated: {0}")]
    DuplicateId(ReservationId),
}

impl ReservationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReservationError::Validation(_) => ErrorKind::Validation,
            ReservationError::Conflict(_) => ErrorKind::Conflict,
            ReservationError::NotFound(_) | ReservationError::AlreadyCancelled(_) => {
                ErrorKind::NotFound
            }
            ReservationError::DuplicateId(_) => ErrorKind::Internal,
        }
    }
}

impl From<ValidationError> for ReservationError {
    fn from(e: ValidationError) -> Self {
        ReservationError::Validation(vec![e.to_string()])
    }
}

impl From<Vec<ValidationError>> for ReservationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ReservationError::Validation(errors.iter().map(ToString::to_string).collect())
    }
}

/// Convenience type alias for registry results.
pub type Result<T> = std::result::Result<T, ReservationError>;

#[cfg(test)]
mod tests {
    use inventory::Version;

    use super::*;

    #[test]
    fn already_cancelled_is_reported_as_not_found() {
        let err = ReservationError::AlreadyCancelled(ReservationId::new("r1"));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn ledger_failures_are_conflicts() {
        let err: ReservationError = LedgerError::VersionConflict {
            expected: Version::new(0),
            actual: Version::new(1),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn validation_messages_are_joined() {
        let err: ReservationError = vec![
            ValidationError::PartnerIdRequired,
            ValidationError::SeatsNotANumber,
        ]
        .into();
        assert_eq!(
            err.to_string(),
            "Validation failed: partnerId is required; seats must be a number"
        );
    }
}
