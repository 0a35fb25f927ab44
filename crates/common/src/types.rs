use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{ValidationError, validate_partner_id};

/// Unique identifier for a reservation.
///
/// Backed by a string so that alternative id schemes (sequential ids in
/// tests, ids handed in by a caller) can be used alongside UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    /// Creates a reservation ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a new random reservation ID (UUID v4).
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ReservationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ReservationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Uuid> for ReservationId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

impl AsRef<str> for ReservationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of the partner (reseller) holding reservations.
///
/// Never blank: construct through [`PartnerId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartnerId(String);

impl PartnerId {
    /// Parses a partner ID, rejecting empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate_partner_id(Some(raw))?;
        Ok(Self(raw.to_string()))
    }

    /// Returns the partner ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PartnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PartnerId {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        validate_partner_id(Some(&s))?;
        Ok(Self(s))
    }
}

impl From<PartnerId> for String {
    fn from(id: PartnerId) -> Self {
        id.0
    }
}

impl AsRef<str> for PartnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Descriptive metadata for the event whose seats are being sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    pub event_id: String,
    pub name: String,
}

impl EventInfo {
    pub fn new(event_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            name: name.into(),
        }
    }
}

impl Default for EventInfo {
    fn default() -> Self {
        Self::new("node-meetup-2025", "Node.js Meet-up")
    }
}
