//! Branch handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_owner, CurrentUser};
use crate::api::AppState;
use crate::domain::BranchResponse;
use crate::errors::AppResult;
use crate::infra::{BranchPatch, NewBranch};
use crate::types::{Created, NoContent};

use super::review_handler::list_branch_reviews;

/// Branch creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBranchRequest {
    /// Branch name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Downtown")]
    pub name: String,
    /// Street address text
    #[validate(length(min = 1, message = "Address is required"))]
    #[schema(example = "12 Main St")]
    pub address: String,
    /// Latitude
    #[schema(example = 40.7128)]
    pub lat: f64,
    /// Longitude
    #[schema(example = -74.0060)]
    pub lng: f64,
    /// Contact phone
    #[validate(custom(function = "crate::utils::phone::validate_phone"))]
    #[schema(example = "+15559876543")]
    pub phone: String,
}

/// Branch update request; omitted fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBranchRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub phone: Option<String>,
}

/// Create branch routes
pub fn branch_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_branches))
        .route("/", post(create_branch))
        .route("/:id", get(get_branch))
        .route("/:id", put(update_branch))
        .route("/:id", delete(delete_branch))
        .route("/:id/reviews", get(list_branch_reviews))
}

/// List all branches
#[utoipa::path(
    get,
    path = "/branches",
    tag = "Branches",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Branch listing", body = [BranchResponse])
    )
)]
pub async fn list_branches(State(state): State<AppState>) -> AppResult<Json<Vec<BranchResponse>>> {
    let branches = state.branch_service.list_branches().await?;
    Ok(Json(branches.into_iter().map(BranchResponse::from).collect()))
}

/// Get a branch by id
#[utoipa::path(
    get,
    path = "/branches/{id}",
    tag = "Branches",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Branch id")),
    responses(
        (status = 200, description = "Branch found", body = BranchResponse),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn get_branch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BranchResponse>> {
    let branch = state.branch_service.get_branch(id).await?;
    Ok(Json(BranchResponse::from(branch)))
}

/// Add a branch (owner only)
#[utoipa::path(
    post,
    path = "/branches",
    tag = "Branches",
    security(("bearer_auth" = [])),
    request_body = CreateBranchRequest,
    responses(
        (status = 201, description = "Branch created", body = BranchResponse),
        (status = 403, description = "Caller is not an owner")
    )
)]
pub async fn create_branch(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateBranchRequest>,
) -> AppResult<Created<BranchResponse>> {
    require_owner(&user)?;

    let branch = state
        .branch_service
        .create_branch(NewBranch {
            name: payload.name,
            address_text: payload.address,
            lat: payload.lat,
            lng: payload.lng,
            phone: payload.phone,
        })
        .await?;

    Ok(Created(BranchResponse::from(branch)))
}

/// Update a branch (owner only)
#[utoipa::path(
    put,
    path = "/branches/{id}",
    tag = "Branches",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Branch id")),
    request_body = UpdateBranchRequest,
    responses(
        (status = 200, description = "Branch updated", body = BranchResponse),
        (status = 403, description = "Caller is not an owner"),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn update_branch(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBranchRequest>,
) -> AppResult<Json<BranchResponse>> {
    require_owner(&user)?;

    let branch = state
        .branch_service
        .update_branch(
            id,
            BranchPatch {
                name: payload.name,
                address_text: payload.address,
                lat: payload.lat,
                lng: payload.lng,
                phone: payload.phone,
            },
        )
        .await?;

    Ok(Json(BranchResponse::from(branch)))
}

/// Delete a branch (owner only)
#[utoipa::path(
    delete,
    path = "/branches/{id}",
    tag = "Branches",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Branch id")),
    responses(
        (status = 204, description = "Branch deleted"),
        (status = 403, description = "Caller is not an owner"),
        (status = 404, description = "Branch not found")
    )
)]
pub async fn delete_branch(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    require_owner(&user)?;
    state.branch_service.delete_branch(id).await?;
    Ok(NoContent)
}
