//! Branch (shop location) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A physical barbershop location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: i32,
    pub name: String,
    pub address_text: String,
    pub lat: f64,
    pub lng: f64,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Branch representation returned to the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchResponse {
    #[schema(example = 2)]
    pub id: i32,
    #[schema(example = "Downtown")]
    pub name: String,
    #[schema(example = "12 Main St")]
    pub address: String,
    #[schema(example = 40.7128)]
    pub lat: f64,
    #[schema(example = -74.0060)]
    pub lng: f64,
    #[schema(example = "+15559876543")]
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<Branch> for BranchResponse {
    fn from(branch: Branch) -> Self {
        Self {
            id: branch.id,
            name: branch.name,
            address: branch.address_text,
            lat: branch.lat,
            lng: branch.lng,
            phone: branch.phone,
            created_at: branch.created_at,
        }
    }
}
