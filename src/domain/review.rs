//! Branch review entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A client's rating of a branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub client_id: i32,
    pub branch_id: i32,
    /// 1 to 5 inclusive
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Review representation returned to the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = 4)]
    pub client_id: i32,
    #[schema(example = 2)]
    pub branch_id: i32,
    #[schema(example = 5)]
    pub rating: i32,
    #[schema(example = "Great fade, on time.")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            client_id: review.client_id,
            branch_id: review.branch_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}
