use serde::{Deserialize, Serialize};

/// Version tag of the seat ledger, used for optimistic concurrency control.
///
/// Starts at 0 and increases by exactly one per successful reserve or
/// release.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(u64);

impl Version {
    /// Creates a version from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the version of a freshly initialized ledger.
    pub fn initial() -> Self {
        Self(0)
    }

    /// Returns the next version.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw version value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Version {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Version> for u64 {
    fn from(version: Version) -> Self {
        version.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_zero_and_next_increments() {
        let v = Version::initial();
        assert_eq!(v.as_u64(), 0);
        assert_eq!(v.next(), Version::new(1));
        assert!(v.next() > v);
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&Version::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
