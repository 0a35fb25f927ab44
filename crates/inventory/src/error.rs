use thiserror::Error;

use crate::Version;

/// Reasons a conditional reservation against the ledger can be refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The ledger was mutated between the caller's read and its commit.
    #[error("Version conflict: expected version {expected}, found {actual}")]
    VersionConflict { expected: Version, actual: Version },

    /// Not enough seats left to satisfy the request.
    #[error("Insufficient capacity: requested {requested} seats, {available} available")]
    InsufficientCapacity { requested: u32, available: u32 },
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
