//! Favorite branch entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A client's bookmarked branch. One row per (client, branch) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i32,
    pub client_id: i32,
    pub branch_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Favorite representation returned to the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    #[schema(example = 9)]
    pub id: i32,
    #[schema(example = 2)]
    pub branch_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            branch_id: favorite.branch_id,
            created_at: favorite.created_at,
        }
    }
}
