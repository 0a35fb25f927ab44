//! Field validation for reservation requests.
//!
//! Checks run in a fixed order and each failure carries exactly one
//! human-readable message, so the HTTP layer can report them verbatim.

use serde_json::Value;
use thiserror::Error;

/// Upper bound on seats a single reservation may hold.
pub const MAX_SEATS_PER_RESERVATION: u32 = 10;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("partnerId is required")]
    PartnerIdRequired,

    #[error("seats must be a number")]
    SeatsNotANumber,

    #[error("seats must be greater than 0")]
    SeatsNotPositive,

    #[error("seats cannot exceed 10")]
    SeatsAboveLimit,

    #[error("seats must be a whole number")]
    SeatsNotWhole,
}

/// Checks that a partner ID is present and not blank.
pub fn validate_partner_id(raw: Option<&str>) -> Result<(), ValidationError> {
    match raw {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::PartnerIdRequired),
    }
}

/// Checks an already-typed seat count against the per-reservation limits.
pub fn validate_seats(seats: u32) -> Result<u32, ValidationError> {
    if seats == 0 {
        return Err(ValidationError::SeatsNotPositive);
    }
    if seats > MAX_SEATS_PER_RESERVATION {
        return Err(ValidationError::SeatsAboveLimit);
    }
    Ok(seats)
}

/// Validates a raw JSON seat value.
///
/// Only JSON numbers are accepted; `"5"` is a string and fails. Range is
/// checked before integrality, so `10.5` reports the limit, not the fraction.
pub fn validate_seats_value(value: Option<&Value>) -> Result<u32, ValidationError> {
    let number = match value {
        Some(Value::Number(n)) => n,
        _ => return Err(ValidationError::SeatsNotANumber),
    };

    let as_float = number.as_f64().ok_or(ValidationError::SeatsNotANumber)?;
    if as_float <= 0.0 {
        return Err(ValidationError::SeatsNotPositive);
    }
    if as_float > f64::from(MAX_SEATS_PER_RESERVATION) {
        return Err(ValidationError::SeatsAboveLimit);
    }

    match number.as_u64() {
        Some(whole) => u32::try_from(whole)
            .map_err(|_| ValidationError::SeatsAboveLimit)
            .and_then(validate_seats),
        // 5.0 is a whole number even though serde_json keeps it as a float
        None if as_float.fract() == 0.0 => validate_seats(as_float as u32),
        None => Err(ValidationError::SeatsNotWhole),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn partner_id_checks() {
        assert_eq!(
            validate_partner_id(None),
            Err(ValidationError::PartnerIdRequired)
        );
        assert_eq!(
            validate_partner_id(Some(" \t")),
            Err(ValidationError::PartnerIdRequired)
        );
        assert!(validate_partner_id(Some("p1")).is_ok());
    }

    #[test]
    fn typed_seat_bounds() {
        assert_eq!(validate_seats(0), Err(ValidationError::SeatsNotPositive));
        assert_eq!(validate_seats(1), Ok(1));
        assert_eq!(validate_seats(10), Ok(10));
        assert_eq!(validate_seats(11), Err(ValidationError::SeatsAboveLimit));
    }

    #[test]
    fn json_seat_boundaries() {
        let cases = [
            (json!(0), Err(ValidationError::SeatsNotPositive)),
            (json!(-1), Err(ValidationError::SeatsNotPositive)),
            (json!(11), Err(ValidationError::SeatsAboveLimit)),
            (json!(10.5), Err(ValidationError::SeatsAboveLimit)),
            (json!(3.5), Err(ValidationError::SeatsNotWhole)),
            (json!("5"), Err(ValidationError::SeatsNotANumber)),
            (json!(null), Err(ValidationError::SeatsNotANumber)),
            (json!(true), Err(ValidationError::SeatsNotANumber)),
            (json!(10), Ok(10)),
            (json!(5.0), Ok(5)),
            (json!(1), Ok(1)),
        ];

        for (value, expected) in cases {
            assert_eq!(validate_seats_value(Some(&value)), expected, "{value}");
        }
    }

    #[test]
    fn missing_seats_is_not_a_number() {
        assert_eq!(
            validate_seats_value(None),
            Err(ValidationError::SeatsNotANumber)
        );
    }

    #[test]
    fn huge_integers_are_over_limit() {
        let value = json!(u64::MAX);
        assert_eq!(
            validate_seats_value(Some(&value)),
            Err(ValidationError::SeatsAboveLimit)
        );
    }

    #[test]
    fn messages_match_wire_format() {
        assert_eq!(
            ValidationError::SeatsAboveLimit.to_string(),
            "seats cannot exceed 10"
        );
        assert_eq!(
            ValidationError::PartnerIdRequired.to_string(),
            "partnerId is required"
        );
    }
}
