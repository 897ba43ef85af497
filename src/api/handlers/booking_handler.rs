//! Booking handlers: creation, history, status actions, and the
//! booking-service association endpoint.

use axum::{
    extract::{Extension, Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_client, require_staff_or_owner, CurrentUser};
use crate::api::AppState;
use crate::domain::{BookingAction, BookingResponse};
use crate::errors::AppResult;
use crate::infra::NewBooking;
use crate::types::{Created, Paginated, PaginationParams};

/// Booking creation request.
///
/// Totals are computed by the client and stored as submitted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Appointment start
    pub start_at: DateTime<Utc>,
    /// Appointment end
    pub end_at: DateTime<Utc>,
    /// Total duration in minutes
    #[validate(range(min = 1, message = "totalDuration must be positive"))]
    #[schema(example = 45)]
    pub total_duration: i32,
    /// Total price
    #[schema(value_type = f64, example = 38.5)]
    pub total_price: Decimal,
    /// Booking client
    #[schema(example = 4)]
    pub client_id: i32,
    /// Assigned staff member
    #[schema(example = 7)]
    pub staff_id: i32,
    /// Branch the appointment takes place at
    #[schema(example = 2)]
    pub branch_id: i32,
}

/// Booking-service association request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachServicesRequest {
    /// Booking the services belong to
    #[schema(example = 1)]
    pub booking_id: i32,
    /// Purchased service ids, one join row is written per entry
    #[validate(length(min = 1, message = "serviceId must contain at least one service id"))]
    pub service_id: Vec<i32>,
}

/// Result of a booking-service association
#[derive(Debug, Serialize, ToSchema)]
pub struct AttachServicesResponse {
    /// Number of join rows written
    #[schema(example = 2)]
    pub created: u64,
}

/// Create booking routes
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/history", get(booking_history))
        .route("/:id", get(get_booking))
        .route("/:id/status/:action", post(change_status))
}

/// Create booking-service association routes
pub fn booking_service_routes() -> Router<AppState> {
    Router::new().route("/", post(attach_services))
}

/// Create a booking
#[utoipa::path(
    post,
    path = "/booking",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingResponse),
        (status = 400, description = "Validation error or unknown client/staff/branch"),
        (status = 403, description = "Caller is not a client")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateBookingRequest>,
) -> AppResult<Created<BookingResponse>> {
    require_client(&user)?;

    let booking = state
        .booking_service
        .create_booking(NewBooking {
            client_id: payload.client_id,
            staff_id: payload.staff_id,
            branch_id: payload.branch_id,
            start_at: payload.start_at,
            end_at: payload.end_at,
            total_duration_minutes: payload.total_duration,
            total_price: payload.total_price,
        })
        .await?;

    Ok(Created(BookingResponse::from(booking)))
}

/// Get a booking by id
#[utoipa::path(
    get,
    path = "/booking/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking found", body = BookingResponse),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookingResponse>> {
    let booking = state.booking_service.get_booking(id).await?;
    Ok(Json(BookingResponse::from(booking)))
}

/// Page through the caller's bookings, newest first
#[utoipa::path(
    get,
    path = "/booking/history",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page number"),
        ("limit" = Option<u64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Caller-scoped booking list")
    )
)]
pub async fn booking_history(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<BookingResponse>>> {
    let page = params.page;
    let limit = params.limit();

    let (bookings, total) = state.booking_service.history(user.id, params).await?;

    let data = bookings.into_iter().map(BookingResponse::from).collect();
    Ok(Json(Paginated::new(data, page, limit, total)))
}

/// Apply a status action to a booking
#[utoipa::path(
    post,
    path = "/booking/{id}/status/{action}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Booking id"),
        ("action" = String, Path, description = "One of: confirm, complete, cancel")
    ),
    responses(
        (status = 200, description = "Status changed", body = BookingResponse),
        (status = 400, description = "Unknown action or transition not allowed"),
        (status = 403, description = "Caller's role may not perform this action"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn change_status(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((id, action)): Path<(i32, String)>,
) -> AppResult<Json<BookingResponse>> {
    let action = BookingAction::parse(&action)?;

    // Clients may cancel; confirming and completing is shop-side work.
    match action {
        BookingAction::Confirm | BookingAction::Complete => require_staff_or_owner(&user)?,
        BookingAction::Cancel => {}
    }

    let booking = state.booking_service.transition(id, action).await?;
    Ok(Json(BookingResponse::from(booking)))
}

/// Attach purchased services to a booking
#[utoipa::path(
    post,
    path = "/booking-service",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    request_body = AttachServicesRequest,
    responses(
        (status = 201, description = "Join rows created", body = AttachServicesResponse),
        (status = 400, description = "Booking or a service id does not exist; nothing persisted")
    )
)]
pub async fn attach_services(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AttachServicesRequest>,
) -> AppResult<Created<AttachServicesResponse>> {
    let created = state
        .booking_service
        .attach_services(payload.booking_id, payload.service_id)
        .await?;

    Ok(Created(AttachServicesResponse { created }))
}
