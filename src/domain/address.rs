//! Client address entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A saved address belonging to a user. One is created at registration;
/// more can be added later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: i32,
    pub user_id: i32,
    pub text: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: DateTime<Utc>,
}

/// Address representation returned to the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    #[schema(example = 5)]
    pub id: i32,
    #[schema(example = "221B Baker Street")]
    pub text: String,
    #[schema(example = 51.5237)]
    pub lat: f64,
    #[schema(example = -0.1585)]
    pub lng: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            text: address.text,
            lat: address.lat,
            lng: address.lng,
            created_at: address.created_at,
        }
    }
}
