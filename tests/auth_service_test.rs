//! Authentication service tests over a mocked database and an
//! in-memory revocation store.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseBackend, MockDatabase};

use barberqueue::domain::Password;
use barberqueue::errors::{AppError, AppResult};
use barberqueue::infra::repositories::entities::{address, user};
use barberqueue::infra::{Mailer, Persistence, RevocationStore};
use barberqueue::services::{AuthService, Authenticator, ClientRegistration};
use barberqueue::Config;

// =============================================================================
// Test doubles
// =============================================================================

/// In-memory stand-in for the Redis-backed revocation store.
#[derive(Default)]
struct FakeRevocationStore {
    revoked: Mutex<HashSet<String>>,
}

#[async_trait]
impl RevocationStore for FakeRevocationStore {
    async fn revoke(&self, token: &str, _ttl_seconds: u64) -> AppResult<()> {
        self.revoked.lock().unwrap().insert(token.to_string());
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> AppResult<bool> {
        Ok(self.revoked.lock().unwrap().contains(token))
    }
}

// =============================================================================
// Fixtures
// =============================================================================

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

fn user_model(id: i32, phone: &str, password_hash: &str) -> user::Model {
    let now = Utc::now();
    user::Model {
        id,
        phone: phone.to_string(),
        password_hash: password_hash.to_string(),
        full_name: "Test User".to_string(),
        email: "user@example.com".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
        role: "client".to_string(),
        branch_id: None,
        created_at: now,
        updated_at: now,
    }
}

fn address_model(id: i32, user_id: i32) -> address::Model {
    address::Model {
        id,
        user_id,
        text: "221B Baker Street".to_string(),
        lat: 51.5237,
        lng: -0.1585,
        created_at: Utc::now(),
    }
}

fn registration(phone: &str) -> ClientRegistration {
    ClientRegistration {
        phone: phone.to_string(),
        password: "password123".to_string(),
        full_name: "Test User".to_string(),
        email: "user@example.com".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
        address_text: "221B Baker Street".to_string(),
        address_lat: 51.5237,
        address_lng: -0.1585,
    }
}

fn authenticator(
    db: sea_orm::DatabaseConnection,
    revocations: Arc<FakeRevocationStore>,
) -> Authenticator<Persistence> {
    Authenticator::new(
        Arc::new(Persistence::new(db)),
        revocations,
        Arc::new(Mailer::from_env()),
        Config::for_tests(TEST_SECRET),
    )
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_client_creates_user_and_address() {
    let phone = "+15551234567";
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // Duplicate-phone check inside the transaction
        .append_query_results([Vec::<user::Model>::new()])
        // User insert, then address insert (both RETURNING)
        .append_query_results([vec![user_model(1, phone, "hashed")]])
        .append_query_results([vec![address_model(1, 1)]])
        .into_connection();

    let response = authenticator(db, Arc::default())
        .register_client(registration(phone))
        .await
        .unwrap();

    assert!(!response.access_token.is_empty());
    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.user.phone, phone);
}

#[tokio::test]
async fn test_register_duplicate_phone_creates_nothing() {
    let phone = "+15551234567";
    // Only the duplicate-check result is prepared; an insert would hit
    // an exhausted mock and fail with a different error
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_model(1, phone, "hashed")]])
        .into_connection();

    let err = authenticator(db, Arc::default())
        .register_client(registration(phone))
        .await
        .unwrap_err();

    match err {
        AppError::BadRequest(msg) => {
            assert!(msg.contains("phone number already exists"), "{}", msg)
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_with_valid_credentials() {
    let phone = "+15551234567";
    let hash = Password::new("password123").unwrap().into_string();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_model(1, phone, &hash)]])
        .into_connection();

    let response = authenticator(db, Arc::default())
        .login(phone.to_string(), "password123".to_string())
        .await
        .unwrap();

    assert!(!response.access_token.is_empty());
    assert_eq!(response.user.id, 1);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let phone = "+15551234567";
    let hash = Password::new("password123").unwrap().into_string();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_model(1, phone, &hash)]])
        .into_connection();

    let err = authenticator(db, Arc::default())
        .login(phone.to_string(), "wrong-password".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_with_unknown_phone() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let err = authenticator(db, Arc::default())
        .login("+15550000000".to_string(), "password123".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

// =============================================================================
// Logout / revocation
// =============================================================================

#[tokio::test]
async fn test_logged_out_token_is_rejected() {
    let phone = "+15551234567";
    let hash = Password::new("password123").unwrap().into_string();
    let revocations = Arc::new(FakeRevocationStore::default());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_model(1, phone, &hash)]])
        .into_connection();
    let auth = authenticator(db, revocations);

    let token = auth
        .login(phone.to_string(), "password123".to_string())
        .await
        .unwrap()
        .access_token;

    // Valid before logout
    let claims = auth.verify_token(&token).await.unwrap();
    assert_eq!(claims.sub, 1);

    // Revoked after logout, even though the signature still verifies
    auth.logout(&token).await.unwrap();
    let err = auth.verify_token(&token).await.unwrap_err();
    assert!(matches!(err, AppError::TokenRevoked));
}

#[tokio::test]
async fn test_other_tokens_survive_a_logout() {
    let phone = "+15551234567";
    let hash = Password::new("password123").unwrap().into_string();
    let revocations = Arc::new(FakeRevocationStore::default());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_model(1, phone, &hash)], vec![user_model(1, phone, &hash)]])
        .into_connection();
    let auth = authenticator(db, revocations);

    let first = auth
        .login(phone.to_string(), "password123".to_string())
        .await
        .unwrap()
        .access_token;
    // Issued a second apart so the iat/exp claims differ
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let second = auth
        .login(phone.to_string(), "password123".to_string())
        .await
        .unwrap()
        .access_token;
    assert_ne!(first, second);

    auth.logout(&first).await.unwrap();

    assert!(auth.verify_token(&first).await.is_err());
    assert!(auth.verify_token(&second).await.is_ok());
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let auth = authenticator(db, Arc::default());

    let err = auth.verify_token("not-a-jwt").await.unwrap_err();
    assert!(matches!(err, AppError::Jwt(_)));
}
