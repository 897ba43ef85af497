//! Booking service tests over a mocked database.
//!
//! These run the real BookingManager and Unit of Work against
//! `sea_orm::MockDatabase`, so the transaction path (begin, per-service
//! lookup, batched insert, commit/rollback) is the production code.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use barberqueue::domain::BookingAction;
use barberqueue::errors::AppError;
use barberqueue::infra::repositories::entities::{barber_service, booking, notification, user};
use barberqueue::infra::{Mailer, NewBooking, Persistence};
use barberqueue::services::{BookingManager, BookingService};

// =============================================================================
// Fixtures
// =============================================================================

fn booking_model(id: i32, status: &str) -> booking::Model {
    let now = Utc::now();
    booking::Model {
        id,
        client_id: 4,
        staff_id: 7,
        branch_id: 2,
        start_at: now,
        end_at: now,
        total_duration_minutes: 45,
        total_price: Decimal::new(3850, 2),
        status: status.to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn service_model(id: i32) -> barber_service::Model {
    let now = Utc::now();
    barber_service::Model {
        id,
        name: format!("Service {}", id),
        price: Decimal::new(2500, 2),
        duration_minutes: 30,
        created_at: now,
        updated_at: now,
    }
}

fn user_model(id: i32, role: &str) -> user::Model {
    let now = Utc::now();
    user::Model {
        id,
        phone: format!("+1555000{:04}", id),
        password_hash: "hashed".to_string(),
        full_name: "Test User".to_string(),
        email: "user@example.com".to_string(),
        birth_date: chrono::NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
        role: role.to_string(),
        branch_id: None,
        created_at: now,
        updated_at: now,
    }
}

fn notification_model(id: i32, user_id: i32) -> notification::Model {
    notification::Model {
        id,
        user_id,
        title: "Booking confirmed".to_string(),
        body: "Your appointment is confirmed.".to_string(),
        read: false,
        created_at: Utc::now(),
    }
}

fn manager(db: sea_orm::DatabaseConnection) -> BookingManager<Persistence> {
    BookingManager::new(Arc::new(Persistence::new(db)), Arc::new(Mailer::from_env()))
}

// =============================================================================
// Booking-service association
// =============================================================================

#[tokio::test]
async fn test_attach_services_persists_one_row_per_service() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // Pre-check: the booking exists
        .append_query_results([vec![booking_model(1, "pending")]])
        // Inside the transaction: both services exist
        .append_query_results([vec![service_model(10)], vec![service_model(11)]])
        // The batched insert
        .append_exec_results([MockExecResult {
            last_insert_id: 2,
            rows_affected: 2,
        }])
        .into_connection();

    let created = manager(db).attach_services(1, vec![10, 11]).await.unwrap();
    assert_eq!(created, 2);
}

#[tokio::test]
async fn test_attach_services_names_the_invalid_service_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![booking_model(1, "pending")]])
        // First service exists, second does not; no insert result is
        // prepared because the insert must never be issued
        .append_query_results([vec![service_model(10)], Vec::<barber_service::Model>::new()])
        .into_connection();

    let err = manager(db)
        .attach_services(1, vec![10, 999])
        .await
        .unwrap_err();

    match err {
        AppError::BadRequest(msg) => {
            assert!(msg.contains("Service with id 999 does not exist"), "{}", msg)
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn test_attach_services_missing_booking_fails_before_any_service_lookup() {
    // Only the booking lookup is prepared; a service lookup would hit
    // an exhausted mock and surface as a database error instead
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<booking::Model>::new()])
        .into_connection();

    let err = manager(db).attach_services(42, vec![10]).await.unwrap_err();

    match err {
        AppError::BadRequest(msg) => {
            assert!(msg.contains("Booking with id 42 does not exist"), "{}", msg)
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn test_attach_services_rejects_empty_service_list() {
    // No results prepared: the call must fail before touching the database
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let err = manager(db).attach_services(1, vec![]).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_attach_services_duplicate_ids_create_duplicate_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![booking_model(1, "pending")]])
        .append_query_results([vec![service_model(10)], vec![service_model(10)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 2,
            rows_affected: 2,
        }])
        .into_connection();

    let created = manager(db).attach_services(1, vec![10, 10]).await.unwrap();
    assert_eq!(created, 2);
}

// =============================================================================
// Booking creation
// =============================================================================

#[tokio::test]
async fn test_create_booking_checks_all_three_references() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // client, staff lookups (users), then branch lookup
        .append_query_results([vec![user_model(4, "client")], vec![user_model(7, "staff")]])
        .append_query_results([vec![branch_model(2)]])
        // the insert, with RETURNING
        .append_query_results([vec![booking_model(1, "pending")]])
        .into_connection();

    let booking = manager(db)
        .create_booking(new_booking(4, 7, 2))
        .await
        .unwrap();

    assert_eq!(booking.id, 1);
    assert_eq!(
        booking.status,
        barberqueue::domain::BookingStatus::Pending
    );
}

#[tokio::test]
async fn test_create_booking_unknown_branch_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_model(4, "client")], vec![user_model(7, "staff")]])
        .append_query_results([Vec::<barberqueue::infra::repositories::entities::branch::Model>::new()])
        .into_connection();

    let err = manager(db)
        .create_booking(new_booking(4, 7, 99))
        .await
        .unwrap_err();

    match err {
        AppError::BadRequest(msg) => {
            assert!(msg.contains("Branch with id 99 does not exist"), "{}", msg)
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_booking_requires_staff_role_on_staff_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // staffId references another client account
        .append_query_results([vec![user_model(4, "client")], vec![user_model(7, "client")]])
        .append_query_results([vec![branch_model(2)]])
        .into_connection();

    let err = manager(db)
        .create_booking(new_booking(4, 7, 2))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
}

fn branch_model(id: i32) -> barberqueue::infra::repositories::entities::branch::Model {
    let now = Utc::now();
    barberqueue::infra::repositories::entities::branch::Model {
        id,
        name: "Downtown".to_string(),
        address_text: "12 Main St".to_string(),
        lat: 40.7128,
        lng: -74.0060,
        phone: "+15559876543".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn new_booking(client_id: i32, staff_id: i32, branch_id: i32) -> NewBooking {
    let now = Utc::now();
    NewBooking {
        client_id,
        staff_id,
        branch_id,
        start_at: now,
        end_at: now,
        total_duration_minutes: 45,
        total_price: Decimal::new(3850, 2),
    }
}

// =============================================================================
// Status transitions
// =============================================================================

#[tokio::test]
async fn test_confirm_pending_booking_notifies_the_client() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // transition() loads the booking, set_status() loads it again
        .append_query_results([vec![booking_model(1, "pending")], vec![booking_model(1, "pending")]])
        // the UPDATE, with RETURNING
        .append_query_results([vec![booking_model(1, "confirmed")]])
        // client lookup for the notification
        .append_query_results([vec![user_model(4, "client")]])
        // notification insert, with RETURNING
        .append_query_results([vec![notification_model(1, 4)]])
        .into_connection();

    let booking = manager(db)
        .transition(1, BookingAction::Confirm)
        .await
        .unwrap();

    assert_eq!(
        booking.status,
        barberqueue::domain::BookingStatus::Confirmed
    );
}

#[tokio::test]
async fn test_completing_a_cancelled_booking_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![booking_model(1, "cancelled")]])
        .into_connection();

    let err = manager(db)
        .transition(1, BookingAction::Complete)
        .await
        .unwrap_err();

    match err {
        AppError::BadRequest(msg) => {
            assert!(msg.contains("cancelled"), "{}", msg)
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transition_on_missing_booking_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<booking::Model>::new()])
        .into_connection();

    let err = manager(db)
        .transition(1, BookingAction::Cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound));
}
