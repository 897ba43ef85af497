//! In-app notification entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A message shown to a user inside the app, written when something
/// happens to one of their bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification representation returned to the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    #[schema(example = 12)]
    pub id: i32,
    #[schema(example = "Booking confirmed")]
    pub title: String,
    #[schema(example = "Your appointment on Friday at 10:00 is confirmed.")]
    pub body: String,
    #[schema(example = false)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            title: notification.title,
            body: notification.body,
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}
