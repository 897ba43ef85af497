//! Favorite handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_client, CurrentUser};
use crate::api::AppState;
use crate::domain::FavoriteResponse;
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Favorite creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteRequest {
    /// Branch to bookmark
    #[schema(example = 2)]
    pub branch_id: i32,
}

/// Create favorite routes
pub fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favorites))
        .route("/", post(add_favorite))
        .route("/:branch_id", delete(remove_favorite))
}

/// List the caller's bookmarked branches
#[utoipa::path(
    get,
    path = "/favorites",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's favorites", body = [FavoriteResponse])
    )
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<FavoriteResponse>>> {
    let favorites = state.favorite_service.list_favorites(user.id).await?;
    Ok(Json(favorites.into_iter().map(FavoriteResponse::from).collect()))
}

/// Bookmark a branch
#[utoipa::path(
    post,
    path = "/favorites",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    request_body = CreateFavoriteRequest,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteResponse),
        (status = 400, description = "Unknown branch"),
        (status = 409, description = "Branch is already a favorite")
    )
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateFavoriteRequest>,
) -> AppResult<Created<FavoriteResponse>> {
    require_client(&user)?;

    let favorite = state
        .favorite_service
        .add_favorite(user.id, payload.branch_id)
        .await?;

    Ok(Created(FavoriteResponse::from(favorite)))
}

/// Remove a bookmarked branch
#[utoipa::path(
    delete,
    path = "/favorites/{branchId}",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    params(("branchId" = i32, Path, description = "Branch id")),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 404, description = "Favorite not found")
    )
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(branch_id): Path<i32>,
) -> AppResult<NoContent> {
    state
        .favorite_service
        .remove_favorite(user.id, branch_id)
        .await?;
    Ok(NoContent)
}
