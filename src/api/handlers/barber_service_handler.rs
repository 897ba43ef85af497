//! Barber service catalog handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_owner, CurrentUser};
use crate::api::AppState;
use crate::domain::BarberServiceResponse;
use crate::errors::AppResult;
use crate::infra::NewBarberService;
use crate::types::{Created, NoContent};

/// Catalog entry creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBarberServiceRequest {
    /// Service name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Classic haircut")]
    pub name: String,
    /// Price
    #[schema(value_type = f64, example = 25.0)]
    pub price: Decimal,
    /// Duration in minutes
    #[validate(range(min = 1, message = "duration must be positive"))]
    #[schema(example = 30)]
    pub duration: i32,
}

/// Catalog entry update request; omitted fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBarberServiceRequest {
    /// New name
    #[schema(example = "Skin fade")]
    pub name: Option<String>,
    /// New price
    #[schema(value_type = Option<f64>, example = 32.0)]
    pub price: Option<Decimal>,
    /// New duration in minutes
    #[validate(range(min = 1, message = "duration must be positive"))]
    #[schema(example = 40)]
    pub duration: Option<i32>,
}

/// Create catalog routes
pub fn barber_service_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services))
        .route("/", post(create_service))
        .route("/:id", get(get_service))
        .route("/:id", put(update_service))
        .route("/:id", delete(delete_service))
}

/// List the service catalog
#[utoipa::path(
    get,
    path = "/barber-services",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Catalog listing", body = [BarberServiceResponse])
    )
)]
pub async fn list_services(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BarberServiceResponse>>> {
    let services = state.catalog_service.list_services().await?;
    Ok(Json(
        services.into_iter().map(BarberServiceResponse::from).collect(),
    ))
}

/// Get a catalog entry by id
#[utoipa::path(
    get,
    path = "/barber-services/{id}",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "Catalog entry", body = BarberServiceResponse),
        (status = 404, description = "Service not found")
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BarberServiceResponse>> {
    let service = state.catalog_service.get_service(id).await?;
    Ok(Json(BarberServiceResponse::from(service)))
}

/// Add a catalog entry (owner only)
#[utoipa::path(
    post,
    path = "/barber-services",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    request_body = CreateBarberServiceRequest,
    responses(
        (status = 201, description = "Catalog entry created", body = BarberServiceResponse),
        (status = 403, description = "Caller is not an owner")
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateBarberServiceRequest>,
) -> AppResult<Created<BarberServiceResponse>> {
    require_owner(&user)?;

    let service = state
        .catalog_service
        .create_service(NewBarberService {
            name: payload.name,
            price: payload.price,
            duration_minutes: payload.duration,
        })
        .await?;

    Ok(Created(BarberServiceResponse::from(service)))
}

/// Update a catalog entry (owner only)
#[utoipa::path(
    put,
    path = "/barber-services/{id}",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Service id")),
    request_body = UpdateBarberServiceRequest,
    responses(
        (status = 200, description = "Catalog entry updated", body = BarberServiceResponse),
        (status = 403, description = "Caller is not an owner"),
        (status = 404, description = "Service not found")
    )
)]
pub async fn update_service(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBarberServiceRequest>,
) -> AppResult<Json<BarberServiceResponse>> {
    require_owner(&user)?;

    let service = state
        .catalog_service
        .update_service(id, payload.name, payload.price, payload.duration)
        .await?;

    Ok(Json(BarberServiceResponse::from(service)))
}

/// Delete a catalog entry (owner only)
#[utoipa::path(
    delete,
    path = "/barber-services/{id}",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 204, description = "Catalog entry deleted"),
        (status = 403, description = "Caller is not an owner"),
        (status = 404, description = "Service not found")
    )
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    require_owner(&user)?;
    state.catalog_service.delete_service(id).await?;
    Ok(NoContent)
}
