//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::UserRole;
use crate::errors::AppError;

/// Authenticated user extracted from JWT token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i32,
    pub phone: String,
    pub role: UserRole,
}

/// JWT authentication middleware.
///
/// Extracts the bearer token from the Authorization header, verifies
/// it (signature, expiry, revocation store), then injects the
/// CurrentUser into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)?.to_string();

    let claims = state.auth_service.verify_token(&token).await?;

    let current_user = CurrentUser {
        id: claims.sub,
        phone: claims.phone,
        role: UserRole::from(claims.role.as_str()),
    };

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Pull the raw bearer token out of a request's Authorization header.
pub fn bearer_token(request: &Request) -> Result<&str, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)
}

/// Require the owner role.
pub fn require_owner(user: &CurrentUser) -> Result<(), AppError> {
    if user.role.is_owner() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Require a role that runs the shop floor (staff or owner).
pub fn require_staff_or_owner(user: &CurrentUser) -> Result<(), AppError> {
    if user.role.is_staff() || user.role.is_owner() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Require the client role.
pub fn require_client(user: &CurrentUser) -> Result<(), AppError> {
    if user.role.is_client() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(role: UserRole) -> CurrentUser {
        CurrentUser {
            id: 1,
            phone: "+15551234567".to_string(),
            role,
        }
    }

    #[test]
    fn test_role_guards() {
        assert!(require_owner(&user_with(UserRole::Owner)).is_ok());
        assert!(require_owner(&user_with(UserRole::Client)).is_err());

        assert!(require_staff_or_owner(&user_with(UserRole::Staff)).is_ok());
        assert!(require_staff_or_owner(&user_with(UserRole::Owner)).is_ok());
        assert!(require_staff_or_owner(&user_with(UserRole::Client)).is_err());

        assert!(require_client(&user_with(UserRole::Client)).is_ok());
        assert!(require_client(&user_with(UserRole::Staff)).is_err());
    }
}
