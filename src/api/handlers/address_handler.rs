//! Address handlers.

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
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::AddressResponse;
use crate::errors::AppResult;
use crate::infra::NewAddress;
use crate::types::{Created, NoContent};

/// Address creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAddressRequest {
    /// Street address text
    #[validate(length(min = 1, message = "Address text is required"))]
    #[schema(example = "221B Baker Street")]
    pub text: String,
    /// Latitude
    #[schema(example = 51.5237)]
    pub lat: f64,
    /// Longitude
    #[schema(example = -0.1585)]
    pub lng: f64,
}

/// Address update request; omitted fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAddressRequest {
    pub text: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Create address routes
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_addresses))
        .route("/", post(create_address))
        .route("/:id", put(update_address))
        .route("/:id", delete(delete_address))
}

/// List the caller's saved addresses
#[utoipa::path(
    get,
    path = "/addresses",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's addresses", body = [AddressResponse])
    )
)]
pub async fn list_addresses(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<AddressResponse>>> {
    let addresses = state.address_service.list_addresses(user.id).await?;
    Ok(Json(addresses.into_iter().map(AddressResponse::from).collect()))
}

/// Save a new address
#[utoipa::path(
    post,
    path = "/addresses",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    request_body = CreateAddressRequest,
    responses(
        (status = 201, description = "Address saved", body = AddressResponse)
    )
)]
pub async fn create_address(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateAddressRequest>,
) -> AppResult<Created<AddressResponse>> {
    let address = state
        .address_service
        .create_address(NewAddress {
            user_id: user.id,
            text: payload.text,
            lat: payload.lat,
            lng: payload.lng,
        })
        .await?;

    Ok(Created(AddressResponse::from(address)))
}

/// Update one of the caller's addresses
#[utoipa::path(
    put,
    path = "/addresses/{id}",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Address id")),
    request_body = UpdateAddressRequest,
    responses(
        (status = 200, description = "Address updated", body = AddressResponse),
        (status = 403, description = "Address belongs to another user"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn update_address(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAddressRequest>,
) -> AppResult<Json<AddressResponse>> {
    let address = state
        .address_service
        .update_address(user.id, id, payload.text, payload.lat, payload.lng)
        .await?;

    Ok(Json(AddressResponse::from(address)))
}

/// Delete one of the caller's addresses
#[utoipa::path(
    delete,
    path = "/addresses/{id}",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Address id")),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 403, description = "Address belongs to another user"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn delete_address(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.address_service.delete_address(user.id, id).await?;
    Ok(NoContent)
}
