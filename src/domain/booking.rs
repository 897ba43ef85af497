//! Booking aggregate: the appointment itself, its status state machine,
//! and the line items linking it to purchased services.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{STATUS_CANCELLED, STATUS_COMPLETED, STATUS_CONFIRMED, STATUS_PENDING};
use crate::errors::{AppError, AppResult};

/// Booking lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Whether moving from `self` to `next` is an allowed transition.
    ///
    /// pending -> confirmed -> completed, with cancellation possible from
    /// pending or confirmed. Completed and cancelled are terminal.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }
}

impl From<&str> for BookingStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_CONFIRMED => BookingStatus::Confirmed,
            STATUS_COMPLETED => BookingStatus::Completed,
            STATUS_CANCELLED => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingStatus::Pending => STATUS_PENDING,
            BookingStatus::Confirmed => STATUS_CONFIRMED,
            BookingStatus::Completed => STATUS_COMPLETED,
            BookingStatus::Cancelled => STATUS_CANCELLED,
        };
        write!(f, "{}", s)
    }
}

/// Status-change actions exposed over the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingAction {
    Confirm,
    Complete,
    Cancel,
}

impl BookingAction {
    /// Status this action moves a booking into.
    pub fn target_status(&self) -> BookingStatus {
        match self {
            BookingAction::Confirm => BookingStatus::Confirmed,
            BookingAction::Complete => BookingStatus::Completed,
            BookingAction::Cancel => BookingStatus::Cancelled,
        }
    }

    /// Parse an action from its URL path segment.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            "confirm" => Ok(BookingAction::Confirm),
            "complete" => Ok(BookingAction::Complete),
            "cancel" => Ok(BookingAction::Cancel),
            other => Err(AppError::bad_request(format!(
                "Unknown booking action '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for BookingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingAction::Confirm => "confirm",
            BookingAction::Complete => "complete",
            BookingAction::Cancel => "cancel",
        };
        write!(f, "{}", s)
    }
}

/// Booking domain entity.
///
/// Totals are provided by the client at creation time and stored as-is;
/// they are not recomputed from the attached services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i32,
    pub client_id: i32,
    pub staff_id: i32,
    pub branch_id: i32,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub total_duration_minutes: i32,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Apply a status action, enforcing the transition table.
    pub fn apply(&mut self, action: BookingAction) -> AppResult<()> {
        let next = action.target_status();
        if !self.status.can_transition_to(next) {
            return Err(AppError::bad_request(format!(
                "Cannot {} a booking in {} status",
                action, self.status
            )));
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// One purchased service on a booking.
///
/// Rows are written once, in a single batch per association request,
/// and never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingItem {
    pub id: i32,
    pub booking_id: i32,
    pub service_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Booking representation returned to the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 4)]
    pub client_id: i32,
    #[schema(example = 7)]
    pub staff_id: i32,
    #[schema(example = 2)]
    pub branch_id: i32,
    /// Appointment start
    pub start_at: DateTime<Utc>,
    /// Appointment end
    pub end_at: DateTime<Utc>,
    /// Total duration in minutes, as submitted by the client
    #[schema(example = 45)]
    pub total_duration: i32,
    /// Total price, as submitted by the client
    #[schema(value_type = f64, example = 38.5)]
    pub total_price: Decimal,
    #[schema(example = "pending")]
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            client_id: booking.client_id,
            staff_id: booking.staff_id,
            branch_id: booking.branch_id,
            start_at: booking.start_at,
            end_at: booking.end_at,
            total_duration: booking.total_duration_minutes,
            total_price: booking.total_price,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_with(status: BookingStatus) -> Booking {
        Booking {
            id: 1,
            client_id: 1,
            staff_id: 2,
            branch_id: 1,
            start_at: Utc::now(),
            end_at: Utc::now(),
            total_duration_minutes: 30,
            total_price: Decimal::new(2500, 2),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_allowed_transitions() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Cancelled));
    }

    #[test]
    fn test_forbidden_transitions() {
        use BookingStatus::*;
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Cancelled.can_transition_to(Completed));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Completed.can_transition_to(Confirmed));
        assert!(!Confirmed.can_transition_to(Confirmed));
    }

    #[test]
    fn test_apply_updates_status() {
        let mut booking = booking_with(BookingStatus::Pending);
        booking.apply(BookingAction::Confirm).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        booking.apply(BookingAction::Complete).unwrap();
        assert_eq!(booking.status, BookingStatus::Completed);
    }

    #[test]
    fn test_apply_rejects_completing_cancelled_booking() {
        let mut booking = booking_with(BookingStatus::Cancelled);
        let err = booking.apply(BookingAction::Complete).unwrap_err();
        assert!(err.to_string().contains("cancelled"));
        // Status unchanged on rejection
        assert_eq!(booking.status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_action_parse() {
        assert_eq!(
            BookingAction::parse("confirm").unwrap(),
            BookingAction::Confirm
        );
        assert_eq!(
            BookingAction::parse("complete").unwrap(),
            BookingAction::Complete
        );
        assert_eq!(
            BookingAction::parse("cancel").unwrap(),
            BookingAction::Cancel
        );
        assert!(BookingAction::parse("archive").is_err());
    }
}
