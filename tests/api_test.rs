//! Wire-contract tests.
//!
//! Pin the JSON shapes the mobile client depends on: camelCase field
//! names on responses, camelCase request bodies, and the HTTP status
//! each error class maps to.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::json;

use barberqueue::domain::{
    Booking, BookingResponse, BookingStatus, User, UserResponse, UserRole,
};
use barberqueue::errors::AppError;

fn sample_user() -> User {
    let now = Utc::now();
    User {
        id: 4,
        phone: "+15551234567".to_string(),
        password_hash: "hashed".to_string(),
        full_name: "Test User".to_string(),
        email: "user@example.com".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
        role: UserRole::Client,
        branch_id: None,
        created_at: now,
        updated_at: now,
    }
}

fn sample_booking() -> Booking {
    let now = Utc::now();
    Booking {
        id: 1,
        client_id: 4,
        staff_id: 7,
        branch_id: 2,
        start_at: now,
        end_at: now,
        total_duration_minutes: 45,
        total_price: Decimal::new(3850, 2),
        status: BookingStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}

// =============================================================================
// Response shapes
// =============================================================================

#[test]
fn test_booking_response_uses_camel_case_fields() {
    let value = serde_json::to_value(BookingResponse::from(sample_booking())).unwrap();
    let obj = value.as_object().unwrap();

    for key in [
        "id",
        "clientId",
        "staffId",
        "branchId",
        "startAt",
        "endAt",
        "totalDuration",
        "totalPrice",
        "status",
        "createdAt",
    ] {
        assert!(obj.contains_key(key), "missing key {}", key);
    }
    assert_eq!(obj["status"], "pending");
    assert_eq!(obj["totalDuration"], 45);
}

#[test]
fn test_user_response_never_contains_the_password_hash() {
    let value = serde_json::to_value(UserResponse::from(sample_user())).unwrap();
    let text = value.to_string();

    assert!(!text.contains("hashed"));
    assert!(!text.contains("password"));

    let obj = value.as_object().unwrap();
    assert!(obj.contains_key("fullName"));
    assert!(obj.contains_key("birthDate"));
    assert_eq!(obj["role"], "client");
}

// =============================================================================
// Request shapes
// =============================================================================

#[test]
fn test_register_request_accepts_camel_case_body() {
    use barberqueue::api::handlers::auth_handler::RegisterClientRequest;

    let body = json!({
        "phone": "+15551234567",
        "password": "password123",
        "fullName": "Test User",
        "email": "user@example.com",
        "birthDate": "1990-05-01",
        "address": { "text": "221B Baker Street", "lat": 51.5237, "lng": -0.1585 }
    });

    let parsed: RegisterClientRequest = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.full_name, "Test User");
    assert_eq!(parsed.address.text, "221B Baker Street");
}

#[test]
fn test_attach_request_accepts_camel_case_body() {
    use barberqueue::api::handlers::booking_handler::AttachServicesRequest;

    let body = json!({ "bookingId": 1, "serviceId": [10, 11] });

    let parsed: AttachServicesRequest = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.booking_id, 1);
    assert_eq!(parsed.service_id, vec![10, 11]);
}

// =============================================================================
// Error statuses
// =============================================================================

#[test]
fn test_error_status_mapping() {
    let cases = [
        (AppError::NotFound, StatusCode::NOT_FOUND),
        (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
        (AppError::TokenRevoked, StatusCode::UNAUTHORIZED),
        (AppError::Forbidden, StatusCode::FORBIDDEN),
        // Bad credentials surface as 400 on this API
        (AppError::InvalidCredentials, StatusCode::BAD_REQUEST),
        (
            AppError::bad_request("Service with id 999 does not exist"),
            StatusCode::BAD_REQUEST,
        ),
        (AppError::conflict("Favorite"), StatusCode::CONFLICT),
        (AppError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn test_error_body_keeps_client_facing_message() {
    let response = AppError::bad_request("Service with id 999 does not exist").into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        value["error"]["message"],
        "Service with id 999 does not exist"
    );
    assert_eq!(value["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_internal_error_body_hides_details() {
    let response = AppError::internal("connection refused to 10.0.0.5").into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let message = value["error"]["message"].as_str().unwrap();
    assert!(!message.contains("10.0.0.5"));
}
