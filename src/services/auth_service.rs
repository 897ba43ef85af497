//! Authentication service.
//!
//! Registration, login, logout and token verification. Logout writes
//! the token into the shared revocation store with a TTL matching the
//! token's remaining validity, so the guard rejects it on every node
//! until it would have expired anyway.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{
    Config, MIN_REVOCATION_TTL_SECONDS, ROLE_CLIENT, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER,
};
use crate::domain::{Password, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::{Mailer, NewAddress, NewUser, RevocationStore, UnitOfWork};
use crate::utils::messages;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub phone: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Everything a new client submits at registration.
#[derive(Debug, Clone)]
pub struct ClientRegistration {
    pub phone: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub address_text: String,
    pub address_lat: f64,
    pub address_lng: f64,
}

/// Token plus profile returned after registration and login.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
    /// Authenticated user's profile
    pub user: UserResponse,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new client account with its initial address
    async fn register_client(&self, registration: ClientRegistration) -> AppResult<AuthResponse>;

    /// Login and return JWT token plus profile
    async fn login(&self, phone: String, password: String) -> AppResult<AuthResponse>;

    /// Revoke the given token for the rest of its lifetime
    async fn logout(&self, token: &str) -> AppResult<()>;

    /// Verify JWT token, reject revoked ones, and extract claims
    async fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate a token + profile response for a user (shared helper)
fn generate_token(user: User, config: &Config) -> AppResult<AuthResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        phone: user.phone.clone(),
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(AuthResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
        user: UserResponse::from(user),
    })
}

/// Decode and signature-check a token (shared helper)
fn decode_claims(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    revocations: Arc<dyn RevocationStore>,
    mailer: Arc<Mailer>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance
    pub fn new(
        uow: Arc<U>,
        revocations: Arc<dyn RevocationStore>,
        mailer: Arc<Mailer>,
        config: Config,
    ) -> Self {
        Self {
            uow,
            revocations,
            mailer,
            config,
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register_client(&self, registration: ClientRegistration) -> AppResult<AuthResponse> {
        // Phone format and field presence are validated by the handler's
        // ValidatedJson extractor; hash before opening the transaction.
        let password_hash = Password::new(&registration.password)?.into_string();

        // User and initial address are written together or not at all.
        let user = self
            .uow
            .transaction(|ctx| {
                Box::pin(async move {
                    if ctx
                        .users()
                        .find_by_phone(&registration.phone)
                        .await?
                        .is_some()
                    {
                        return Err(AppError::bad_request(
                            "User with this phone number already exists",
                        ));
                    }

                    let user = ctx
                        .users()
                        .create(NewUser {
                            phone: registration.phone,
                            password_hash,
                            full_name: registration.full_name,
                            email: registration.email,
                            birth_date: registration.birth_date,
                            role: ROLE_CLIENT.to_string(),
                        })
                        .await?;

                    ctx.addresses()
                        .create(NewAddress {
                            user_id: user.id,
                            text: registration.address_text,
                            lat: registration.address_lat,
                            lng: registration.address_lng,
                        })
                        .await?;

                    Ok(user)
                })
            })
            .await?;

        tracing::info!(user_id = user.id, "Client registered");

        self.mailer
            .send(
                &user.email,
                "Welcome to BarberQueue",
                &messages::welcome_body(&user.full_name),
            )
            .await?;

        generate_token(user, &self.config)
    }

    async fn login(&self, phone: String, password: String) -> AppResult<AuthResponse> {
        let user_result = self.uow.users().find_by_phone(&phone).await?;

        // SECURITY: Perform password verification even if the phone is
        // unknown, so response timing does not leak which numbers are
        // registered. The dummy hash always fails verification.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Only succeed if both user exists AND password is valid
        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Safe to unwrap since we verified user_exists is true
        generate_token(user_result.unwrap(), &self.config)
    }

    async fn logout(&self, token: &str) -> AppResult<()> {
        let claims = decode_claims(token, &self.config)?;

        let remaining = claims.exp - Utc::now().timestamp();
        if remaining <= 0 {
            // Already expired; the guard rejects it without our help
            return Ok(());
        }

        let ttl = (remaining as u64).max(MIN_REVOCATION_TTL_SECONDS);
        self.revocations.revoke(token, ttl).await?;

        tracing::info!(user_id = claims.sub, "Token revoked");
        Ok(())
    }

    async fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let claims = decode_claims(token, &self.config)?;

        if self.revocations.is_revoked(token).await? {
            return Err(AppError::TokenRevoked);
        }

        Ok(claims)
    }
}
