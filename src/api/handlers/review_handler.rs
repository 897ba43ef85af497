//! Review handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{delete, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_client, CurrentUser};
use crate::api::AppState;
use crate::domain::ReviewResponse;
use crate::errors::AppResult;
use crate::infra::NewReview;
use crate::types::{Created, NoContent};

/// Review creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Branch being reviewed
    #[schema(example = 2)]
    pub branch_id: i32,
    /// Rating between 1 and 5
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[schema(example = 5)]
    pub rating: i32,
    /// Optional free-text comment
    #[schema(example = "Great fade, on time.")]
    pub comment: Option<String>,
}

/// Create review routes
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_review))
        .route("/:id", delete(delete_review))
}

/// Leave a review on a branch
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Unknown branch or invalid rating"),
        (status = 403, description = "Caller is not a client")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateReviewRequest>,
) -> AppResult<Created<ReviewResponse>> {
    require_client(&user)?;

    let review = state
        .review_service
        .create_review(NewReview {
            client_id: user.id,
            branch_id: payload.branch_id,
            rating: payload.rating,
            comment: payload.comment,
        })
        .await?;

    Ok(Created(ReviewResponse::from(review)))
}

/// List a branch's reviews, newest first
#[utoipa::path(
    get,
    path = "/branches/{id}/reviews",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Branch id")),
    responses(
        (status = 200, description = "Branch reviews", body = [ReviewResponse]),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn list_branch_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<ReviewResponse>>> {
    let reviews = state.review_service.list_branch_reviews(id).await?;
    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

/// Delete one of the caller's reviews
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 403, description = "Review belongs to another user"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.review_service.delete_review(user.id, id).await?;
    Ok(NoContent)
}
