//! Tests for the domain error payload.
#![expect(
    clippy::expect_used,
    reason = "test setup fails fast on invalid fixtures"
)]

use rstest::rstest;
use serde_json::json;

use super::*;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::conflict("stale"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InvalidRequest, message);
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn details_round_trip_through_serde() {
    let error = Error::conflict("registration no longer pending")
        .with_details(json!({ "currentStatus": "approved" }));

    let serialized = serde_json::to_value(&error).expect("error serializes");
    assert_eq!(serialized["code"], "conflict");
    assert_eq!(serialized["message"], "registration no longer pending");
    assert_eq!(serialized["details"]["currentStatus"], "approved");

    let deserialized: Error = serde_json::from_value(serialized).expect("error deserializes");
    assert_eq!(deserialized, error);
}

#[rstest]
fn deserialization_rejects_blank_messages() {
    let payload = json!({ "code": "not_found", "message": "  " });
    let result: Result<Error, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[rstest]
fn display_uses_the_message() {
    let error = Error::invalid_request("department required");
    assert_eq!(error.to_string(), "department required");
}
