//! User domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_CLIENT, ROLE_OWNER, ROLE_STAFF};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Staff,
    Owner,
}

impl UserRole {
    /// Check if this role manages branches and the service catalog
    pub fn is_owner(&self) -> bool {
        matches!(self, UserRole::Owner)
    }

    /// Check if this role works behind the chair
    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Staff)
    }

    /// Check if this role books appointments
    pub fn is_client(&self) -> bool {
        matches!(self, UserRole::Client)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_OWNER => UserRole::Owner,
            ROLE_STAFF => UserRole::Staff,
            _ => UserRole::Client,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Client => write!(f, "{}", ROLE_CLIENT),
            UserRole::Staff => write!(f, "{}", ROLE_STAFF),
            UserRole::Owner => write!(f, "{}", ROLE_OWNER),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub role: UserRole,
    /// Branch a staff member works at (None for clients and owners)
    pub branch_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_owner(&self) -> bool {
        self.role.is_owner()
    }

    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}

/// User profile returned to the client (never includes the hash)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Phone number used for login
    #[schema(example = "+15551234567")]
    pub phone: String,
    /// Full display name
    #[schema(example = "John Doe")]
    pub full_name: String,
    /// Contact email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// User role
    #[schema(example = "client")]
    pub role: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            phone: user.phone,
            full_name: user.full_name,
            email: user.email,
            birth_date: user.birth_date,
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(UserRole::Client.to_string(), "client");
        assert_eq!(UserRole::Staff.to_string(), "staff");
        assert_eq!(UserRole::Owner.to_string(), "owner");
        assert_eq!(UserRole::from("staff"), UserRole::Staff);
        assert_eq!(UserRole::from("owner"), UserRole::Owner);
        // Unknown values default to client
        assert_eq!(UserRole::from("whatever"), UserRole::Client);
    }
}
