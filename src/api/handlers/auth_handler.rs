//! Authentication handlers.

use axum::{
    extract::{Request, State},
    response::Json,
    routing::post,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::bearer_token;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::{AuthResponse, ClientRegistration};
use crate::types::MessageResponse;

/// Address submitted as part of registration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddressInput {
    /// Street address text
    #[validate(length(min = 1, message = "Address text is required"))]
    #[schema(example = "221B Baker Street")]
    pub text: String,
    /// Latitude
    #[schema(example = 51.5237)]
    pub lat: f64,
    /// Longitude
    #[schema(example = -0.1585)]
    pub lng: f64,
}

/// Client registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterClientRequest {
    /// Phone number used for login
    #[validate(custom(function = "crate::utils::phone::validate_phone"))]
    #[schema(example = "+15551234567")]
    pub phone: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    /// Full display name
    #[validate(length(min = 1, message = "Full name is required"))]
    #[schema(example = "John Doe")]
    pub full_name: String,
    /// Contact email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Initial saved address
    #[validate(nested)]
    pub address: AddressInput,
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Phone number used for login
    #[validate(custom(function = "crate::utils::phone::validate_phone"))]
    #[schema(example = "+15551234567")]
    pub phone: String,
    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Create public authentication routes (register, login)
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register/client", post(register_client))
        .route("/login", post(login))
}

/// Create authenticated authentication routes (logout)
pub fn logout_routes() -> Router<AppState> {
    Router::new().route("/auth/logout", post(logout))
}

/// Register a new client account
#[utoipa::path(
    post,
    path = "/auth/register/client",
    tag = "Authentication",
    request_body = RegisterClientRequest,
    responses(
        (status = 200, description = "Client registered successfully", body = AuthResponse),
        (status = 400, description = "Validation error or duplicate phone number")
    )
)]
pub async fn register_client(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterClientRequest>,
) -> AppResult<Json<AuthResponse>> {
    let response = state
        .auth_service
        .register_client(ClientRegistration {
            phone: payload.phone,
            password: payload.password,
            full_name: payload.full_name,
            email: payload.email,
            birth_date: payload.birth_date,
            address_text: payload.address.text,
            address_lat: payload.address.lat,
            address_lng: payload.address.lng,
        })
        .await?;

    Ok(Json(response))
}

/// Login and get JWT token plus profile
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Validation error or bad credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let response = state
        .auth_service
        .login(payload.phone, payload.password)
        .await?;

    Ok(Json(response))
}

/// Revoke the caller's token
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token revoked", body = MessageResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<Json<MessageResponse>> {
    let token = bearer_token(&request)?.to_string();
    state.auth_service.logout(&token).await?;

    Ok(Json(MessageResponse::new("Logged out")))
}
