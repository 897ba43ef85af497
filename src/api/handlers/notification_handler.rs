//! Notification handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::NotificationResponse;
use crate::errors::AppResult;
use crate::types::{Paginated, PaginationParams};

/// Result of marking every notification read
#[derive(Debug, Serialize, ToSchema)]
pub struct MarkAllReadResponse {
    /// Number of notifications touched
    #[schema(example = 3)]
    pub updated: u64,
}

/// Create notification routes
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/:id/read", post(mark_read))
        .route("/read-all", post(mark_all_read))
}

/// Page through the caller's notifications, newest first
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page number"),
        ("limit" = Option<u64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Caller's notifications")
    )
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<NotificationResponse>>> {
    let page = params.page;
    let limit = params.limit();

    let (notifications, total) = state
        .notification_service
        .list_notifications(user.id, params)
        .await?;

    let data = notifications
        .into_iter()
        .map(NotificationResponse::from)
        .collect();
    Ok(Json(Paginated::new(data, page, limit, total)))
}

/// Mark one notification as read
#[utoipa::path(
    post,
    path = "/notifications/{id}/read",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationResponse),
        (status = 404, description = "Notification not found")
    )
)]
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> AppResult<Json<NotificationResponse>> {
    let notification = state.notification_service.mark_read(user.id, id).await?;
    Ok(Json(NotificationResponse::from(notification)))
}

/// Mark every notification as read
#[utoipa::path(
    post,
    path = "/notifications/read-all",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All notifications marked read", body = MarkAllReadResponse)
    )
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<MarkAllReadResponse>> {
    let updated = state.notification_service.mark_all_read(user.id).await?;
    Ok(Json(MarkAllReadResponse { updated }))
}
